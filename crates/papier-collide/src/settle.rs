//! Multi-pass disk settling.
//!
//! The one-pass resolver is order-dependent by design; this layer repeats
//! it until the point stops moving or a pass budget runs out, without
//! changing the single-pass primitive's semantics.

use papier_geom::Vec2;
use papier_types::Scalar;
use papier_types::constants::EPSILON;

use crate::disk::Disk;
use crate::resolver::resolve_against_disks;

/// Repeats [`resolve_against_disks`] until the correction converges
/// (movement below epsilon) or `max_passes` is exhausted.
///
/// With a cramped disk set there may be no overlap-free position; the
/// budget bounds the work and the last iterate is returned as-is.
pub fn settle_against_disks(
    point: Vec2,
    radius: Scalar,
    disks: &[Disk],
    exclude: Option<usize>,
    max_passes: u32,
) -> Vec2 {
    let mut p = point;

    for _ in 0..max_passes {
        let next = resolve_against_disks(p, radius, disks, exclude);
        if p.distance_squared(next) < EPSILON * EPSILON {
            return next;
        }
        p = next;
    }

    p
}
