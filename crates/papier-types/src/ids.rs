//! Strongly-typed identifiers for frame entities.
//!
//! Newtype wrappers prevent accidental mixing of contour indices
//! with disk indices. Ids are only valid for the lifetime of the
//! frame's tree they index into — the tree is rebuilt every frame.

use serde::{Deserialize, Serialize};

/// Index into a frame's contour container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContourId(pub u32);

impl ContourId {
    /// Returns the raw index as `usize` for array indexing.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for ContourId {
    fn from(val: u32) -> Self {
        Self(val)
    }
}
