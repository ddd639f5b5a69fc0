//! # papier-geom
//!
//! 2D geometric primitives for the papier engine.
//!
//! Provides:
//! - Re-export of `glam::Vec2` as the canonical vector type
//! - Axis-aligned bounding rectangle (`Rect`)
//! - Closed polygon with closest-point and containment queries
//! - Zero-length-safe direction helper used by the collision resolver

pub mod polygon;
pub mod rect;

// Re-export glam's Vec2 as the canonical 2D vector type for papier.
pub use glam::Vec2;

pub use polygon::{ClosestPoint, Polygon, closest_point_on_segment};
pub use rect::Rect;

use papier_types::constants::DEGENERATE_LENGTH_SQ;

/// Unit direction from `from` toward `to`.
///
/// When the two points coincide (within the degenerate threshold) there is
/// no meaningful direction; a fixed `+X` unit vector is substituted so that
/// callers never divide by zero or produce NaN, and repeated runs stay
/// deterministic.
#[inline]
pub fn direction_or_fallback(from: Vec2, to: Vec2) -> Vec2 {
    let d = to - from;
    if d.length_squared() < DEGENERATE_LENGTH_SQ {
        Vec2::X
    } else {
        d / d.length()
    }
}
