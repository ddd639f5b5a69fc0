//! Topological placement of a point in a frame's contour tree.

use papier_contour::ContourTree;
use papier_geom::Vec2;
use papier_types::ContourId;

/// Where a point sits relative to the frame's paper topology.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Inside a hole cut out of a sheet.
    InHole(ContourId),
    /// On paper (inside a solid contour, not inside any hole).
    InSolid(ContourId),
    /// Outside all paper.
    Outside,
}

/// Classifies `point` against every contour in the tree.
///
/// Hole containment takes priority: the scan stops at the first containing
/// hole, overriding any solid containment found so far. A point cannot be
/// "safely on paper" while inside a hole this pass detected. Solid
/// containment is recorded but the scan continues in case a hole shows up
/// later in container order.
///
/// Paper nested inside a hole is not handled correctly — the upstream
/// extraction only models two levels of nesting, and this priority rule
/// depends on that assumption.
pub fn classify(point: Vec2, tree: &ContourTree) -> Placement {
    let mut in_solid = None;

    for (id, c) in tree.iter_with_ids() {
        if !c.contains(point) {
            continue;
        }
        if c.is_hole {
            return Placement::InHole(id);
        }
        if in_solid.is_none() {
            in_solid = Some(id);
        }
    }

    match in_solid {
        Some(id) => Placement::InSolid(id),
        None => Placement::Outside,
    }
}
