//! Frame input validation.
//!
//! Validates a frame before the tree build receives it, catching
//! data-level errors early with clear diagnostics. The tree build itself
//! still guards the hierarchy invariants; this layer is about giving
//! recorded-frame tooling useful messages.

use papier_types::{PapierError, PapierResult};

use crate::contract::FrameInput;

/// Validates a complete frame input.
///
/// Checks:
/// - Every polygon has at least 3 points and finite coordinates
/// - Parent indices are in range
/// - Disk radii are positive and centers finite
pub fn validate_frame(input: &FrameInput) -> PapierResult<()> {
    let n = input.contours.len();

    for (i, rc) in input.contours.iter().enumerate() {
        if rc.polygon.len() < 3 {
            return Err(PapierError::InvalidPolygon(format!(
                "contour {} has {} points, need at least 3",
                i,
                rc.polygon.len()
            )));
        }
        for (j, p) in rc.polygon.points.iter().enumerate() {
            if !p.x.is_finite() || !p.y.is_finite() {
                return Err(PapierError::InvalidPolygon(format!(
                    "contour {i} point {j} is not finite"
                )));
            }
        }
        if let Some(parent) = rc.parent {
            if parent as usize >= n {
                return Err(PapierError::InvalidFrame(format!(
                    "contour {i} parent index {parent} out of range ({n} contours)"
                )));
            }
        }
    }

    for (i, d) in input.disks.iter().enumerate() {
        if !(d.radius > 0.0) {
            return Err(PapierError::InvalidFrame(format!(
                "disk {} radius must be positive, got {}",
                i, d.radius
            )));
        }
        if !d.center.x.is_finite() || !d.center.y.is_finite() {
            return Err(PapierError::InvalidFrame(format!(
                "disk {i} center is not finite"
            )));
        }
    }

    Ok(())
}
