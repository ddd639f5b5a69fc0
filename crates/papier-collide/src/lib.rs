//! # papier-collide
//!
//! Per-frame positional correction for moving disks.
//!
//! The resolver keeps disks out of paper edges, out of holes, and out of
//! each other. It owns no physics: no velocities, no forces, no
//! integration. Callers integrate motion themselves and call the
//! correction functions once per simulation step — contours first, then
//! disks.
//!
//! All functions here are pure: they read the tree and the disk set and
//! return corrected positions, never mutating shared storage.

pub mod disk;
pub mod pipeline;
pub mod placement;
pub mod resolver;
pub mod settle;

pub use disk::Disk;
pub use pipeline::{FramePipeline, FrameStepResult, ResolveStats};
pub use placement::{Placement, classify};
pub use resolver::{resolve_against_contours, resolve_against_disks};
pub use settle::settle_against_disks;
