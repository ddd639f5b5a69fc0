//! Moving disk body.

use papier_geom::Vec2;
use papier_types::Scalar;
use serde::{Deserialize, Serialize};

/// A circular moving body.
///
/// The resolver only reads position and radius; velocity, color, and
/// lifetime stay with the caller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Disk {
    /// Center position.
    pub center: Vec2,
    /// Radius.
    pub radius: Scalar,
}

impl Disk {
    /// Creates a disk.
    pub fn new(center: Vec2, radius: Scalar) -> Self {
        Self { center, radius }
    }

    /// Returns true if this disk overlaps `other`.
    pub fn overlaps(&self, other: &Disk) -> bool {
        self.center.distance(other.center) < self.radius + other.radius
    }
}
