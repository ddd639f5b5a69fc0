//! Single-pass positional correction.
//!
//! Two primitives, applied by callers in this order once per step:
//! contours first, then the other disks.

use papier_contour::{ContourKind, ContourTree};
use papier_geom::{Vec2, direction_or_fallback};
use papier_types::Scalar;

use crate::disk::Disk;
use crate::placement::{Placement, classify};

/// Corrects `point` (the center of a disk of `radius`) against the frame's
/// contour topology.
///
/// - On paper: if the nearest solid edge is closer than `radius`, the point
///   is pushed to exactly `radius` from the edge, on its own side of the
///   boundary (i.e. further onto the paper).
/// - In a hole: the point is always pushed out, to `radius` beyond the
///   closest point on the hole boundary — being inside a hole at all is
///   disallowed, so there is no distance threshold.
/// - Outside all paper: the point is pulled to `radius` past the closest
///   point of the nearest contour of any kind, homing it toward the
///   nearest sheet. An empty tree leaves the point unchanged.
///
/// Degenerate directions (point exactly on a boundary) fall back to a
/// fixed unit vector instead of producing NaN.
pub fn resolve_against_contours(point: Vec2, radius: Scalar, tree: &ContourTree) -> Vec2 {
    match classify(point, tree) {
        Placement::InSolid(id) => {
            let Some(hit) = tree[id].polyline.closest_point(point) else {
                return point;
            };
            if hit.distance < radius {
                hit.point + direction_or_fallback(hit.point, point) * radius
            } else {
                point
            }
        }
        Placement::InHole(id) => {
            let Some(hit) = tree[id].polyline.closest_point(point) else {
                return point;
            };
            hit.point + direction_or_fallback(point, hit.point) * radius
        }
        Placement::Outside => match tree.find_closest_contour(point, ContourKind::Any) {
            Some(hit) => hit.point + direction_or_fallback(point, hit.point) * radius,
            None => point,
        },
    }
}

/// Corrects `point` (the center of a disk of `radius`) against the other
/// disks, one pass in container order.
///
/// Every overlapping disk pushes the point directly away from its center
/// to exactly the sum of radii. Corrections accumulate within the call:
/// each subsequent test uses the already-corrected point, so the result
/// depends on disk order, and a later correction can reintroduce overlap
/// with an earlier disk. That partial correctness is a property of the
/// one-pass design; callers needing settled positions layer
/// [`crate::settle_against_disks`] on top.
pub fn resolve_against_disks(
    point: Vec2,
    radius: Scalar,
    disks: &[Disk],
    exclude: Option<usize>,
) -> Vec2 {
    let mut p = point;

    for (i, d) in disks.iter().enumerate() {
        if Some(i) == exclude {
            continue;
        }
        let min_sep = radius + d.radius;
        if p.distance(d.center) < min_sep {
            p = d.center + direction_or_fallback(d.center, p) * min_sep;
        }
    }

    p
}
