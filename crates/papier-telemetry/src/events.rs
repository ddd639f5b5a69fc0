//! Frame event types.
//!
//! Structured events emitted at various points of a frame. Events are
//! lightweight value types that carry just enough data to be useful for
//! monitoring and debugging the installation.

use serde::{Deserialize, Serialize};

/// A telemetry event emitted by the engine.
///
/// Events are tagged with a frame index and carry domain-specific data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameEvent {
    /// Frame number (0-indexed).
    pub frame: u32,
    /// Event payload.
    pub kind: EventKind,
}

/// Event payload variants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum EventKind {
    /// A contour tree was built from this frame's extraction output.
    TreeBuilt {
        /// Total contours in the frame.
        contours: u32,
        /// How many of them are holes.
        holes: u32,
        /// Deepest nesting level present.
        max_depth: u32,
    },

    /// The extraction output was malformed and the frame's tree was
    /// discarded (the previous frame's tree stays in use).
    BuildRejected {
        /// Human-readable rejection reason.
        reason: String,
    },

    /// The contour stage of a resolve step completed.
    ContoursResolved {
        /// Disks processed.
        disks: u32,
        /// Disks that were moved.
        moved: u32,
    },

    /// The disk stage of a resolve step completed.
    DisksResolved {
        /// Disks that were moved.
        moved: u32,
        /// Largest single-disk displacement over the step.
        max_displacement: f32,
    },

    /// Custom event for extensibility.
    Custom {
        /// Arbitrary label.
        label: String,
        /// JSON-encoded payload.
        payload: String,
    },
}

impl FrameEvent {
    /// Creates a new event for the given frame.
    pub fn new(frame: u32, kind: EventKind) -> Self {
        Self { frame, kind }
    }
}
