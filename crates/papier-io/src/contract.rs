//! Frame input/output contract types.
//!
//! These types define the I/O boundary of the papier engine. They are
//! serializable so frames can be recorded from a live installation and
//! replayed through the CLI or tests.

use papier_collide::{Disk, ResolveStats};
use papier_contour::RawContour;
use papier_geom::Vec2;
use papier_types::{PapierError, PapierResult};
use serde::{Deserialize, Serialize};

/// One frame's worth of input: the extraction step's raw contours plus
/// the caller's disk set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameInput {
    /// Detected outlines with raw parent links, in extraction order.
    pub contours: Vec<RawContour>,

    /// The moving disks to correct this frame.
    pub disks: Vec<Disk>,
}

impl FrameInput {
    /// Parses a frame from JSON.
    pub fn from_json(json: &str) -> PapierResult<Self> {
        serde_json::from_str(json).map_err(|e| PapierError::Serialization(e.to_string()))
    }

    /// Serializes the frame to pretty-printed JSON.
    pub fn to_json(&self) -> PapierResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| PapierError::Serialization(e.to_string()))
    }
}

/// Result of resolving one frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameOutput {
    /// Corrected disk centers, same order as the input disks.
    pub corrected: Vec<Vec2>,

    /// Summary stats from the resolve step.
    pub stats: ResolveStats,
}

impl FrameOutput {
    /// Serializes the output to pretty-printed JSON.
    pub fn to_json(&self) -> PapierResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| PapierError::Serialization(e.to_string()))
    }
}
