//! Per-frame resolution pipeline.
//!
//! Applies the usage contract — contours first, then disks, once per
//! step — for a whole disk set, and reports summary stats for telemetry.

use papier_contour::ContourTree;
use papier_geom::Vec2;
use papier_types::Scalar;
use papier_types::constants::{DEFAULT_SETTLE_PASSES, EPSILON};
use serde::{Deserialize, Serialize};

use crate::disk::Disk;
use crate::resolver::{resolve_against_contours, resolve_against_disks};
use crate::settle::settle_against_disks;

/// Summary of one pipeline step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ResolveStats {
    /// Disks moved by the contour stage.
    pub contour_corrections: u32,
    /// Disks moved by the disk stage.
    pub disk_corrections: u32,
    /// Largest single-disk displacement over the whole step.
    pub max_displacement: Scalar,
}

/// Result of one pipeline step: corrected centers plus stats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameStepResult {
    /// Corrected disk centers, same order as the input set.
    pub corrected: Vec<Vec2>,
    /// Summary stats.
    pub stats: ResolveStats,
}

/// Orchestrates per-frame resolution for a disk set.
///
/// Each disk is corrected against the contour tree, then against the other
/// disks. Within the step, later disks see the already-corrected positions
/// of earlier ones, matching the original in-place update order — but the
/// caller's storage is never touched; corrected centers come back by value.
#[derive(Debug, Clone, Copy, Default)]
pub struct FramePipeline {
    /// Pass budget for the disk stage. `None` runs the documented
    /// single-pass primitive; `Some(n)` layers the settle loop on top.
    pub settle_passes: Option<u32>,
}

impl FramePipeline {
    /// Pipeline running the single-pass disk stage (the default contract).
    pub fn new() -> Self {
        Self::default()
    }

    /// Pipeline with the multi-pass settle layer on the disk stage.
    pub fn with_settle(passes: u32) -> Self {
        Self {
            settle_passes: Some(passes),
        }
    }

    /// Pipeline with the settle layer at the default pass budget.
    pub fn settled() -> Self {
        Self::with_settle(DEFAULT_SETTLE_PASSES)
    }

    /// Runs one step over the disk set.
    pub fn step(&self, tree: &ContourTree, disks: &[Disk]) -> FrameStepResult {
        let mut working: Vec<Disk> = disks.to_vec();
        let mut stats = ResolveStats::default();

        for i in 0..working.len() {
            let Disk { center, radius } = working[i];

            let after_contours = resolve_against_contours(center, radius, tree);
            if after_contours.distance(center) > EPSILON {
                stats.contour_corrections += 1;
            }

            let after_disks = match self.settle_passes {
                None => resolve_against_disks(after_contours, radius, &working, Some(i)),
                Some(passes) => {
                    settle_against_disks(after_contours, radius, &working, Some(i), passes)
                }
            };
            if after_disks.distance(after_contours) > EPSILON {
                stats.disk_corrections += 1;
            }

            stats.max_displacement = stats.max_displacement.max(after_disks.distance(center));
            working[i].center = after_disks;
        }

        FrameStepResult {
            corrected: working.into_iter().map(|d| d.center).collect(),
            stats,
        }
    }
}
