//! Contour tree construction and queries.
//!
//! Nodes are stored in a flat container in input order; parent/child links
//! are typed indices into that container (arena style). The whole structure
//! is rebuilt from scratch every frame and read-only afterwards, so indices
//! stay valid exactly as long as the tree they came from.

use papier_geom::Vec2;
use papier_types::{ContourId, PapierError, PapierResult, Scalar};
use serde::{Deserialize, Serialize};

use crate::contour::{Contour, ContourKind, RawContour};

/// Result of a closest-contour query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClosestContour {
    /// The winning contour.
    pub id: ContourId,
    /// Closest point on that contour's polyline.
    pub point: Vec2,
    /// Euclidean distance from the query point.
    pub distance: Scalar,
}

/// One frame's worth of contours, hierarchy resolved.
///
/// Created empty, populated once via [`ContourTree::build`], read-only
/// thereafter until replaced next frame by the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContourTree {
    contours: Vec<Contour>,
}

impl ContourTree {
    /// Builds the tree from the extraction step's raw output.
    ///
    /// For each input polygon: the hole flag is derived from the presence
    /// of a parent link, children are collected in discovery order, depth
    /// is computed by walking parent links to a root, and the bounding
    /// rect is computed from the points.
    ///
    /// Fails only on malformed input — a parent index out of range, or a
    /// cycle in the parent links. On failure the caller is expected to
    /// discard this frame's contours and keep the previous tree.
    pub fn build(raw: Vec<RawContour>) -> PapierResult<Self> {
        let n = raw.len();

        // Validate parent links before touching anything else.
        for (i, rc) in raw.iter().enumerate() {
            if let Some(p) = rc.parent {
                if p as usize >= n {
                    return Err(PapierError::InvalidHierarchy {
                        index: i,
                        reason: format!("parent index {p} out of range ({n} contours)"),
                    });
                }
            }
        }

        // Depth by walking parent links; a walk longer than the container
        // can only mean a cycle.
        let mut depths = vec![0u32; n];
        for i in 0..n {
            let mut depth = 0u32;
            let mut at = i;
            while let Some(p) = raw[at].parent {
                depth += 1;
                if depth as usize > n {
                    return Err(PapierError::InvalidHierarchy {
                        index: i,
                        reason: "cycle in parent links".into(),
                    });
                }
                at = p as usize;
            }
            depths[i] = depth;
        }

        let mut contours: Vec<Contour> = raw
            .iter()
            .enumerate()
            .map(|(i, rc)| Contour {
                bounding_rect: rc.polygon.bounding_rect(),
                polyline: rc.polygon.clone(),
                center: rc.center,
                radius: rc.radius,
                area: rc.area,
                is_hole: rc.parent.is_some(),
                tree_depth: depths[i],
                parent: rc.parent.map(ContourId),
                children: Vec::new(),
            })
            .collect();

        // Children in input (discovery) order.
        for (i, rc) in raw.iter().enumerate() {
            if let Some(p) = rc.parent {
                contours[p as usize].children.push(ContourId(i as u32));
            }
        }

        Ok(Self { contours })
    }

    /// Number of contours in the frame.
    #[inline]
    pub fn len(&self) -> usize {
        self.contours.len()
    }

    /// Returns true if the frame had no contours.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.contours.is_empty()
    }

    /// The contour at `id`, if in range.
    #[inline]
    pub fn get(&self, id: ContourId) -> Option<&Contour> {
        self.contours.get(id.index())
    }

    /// Iterates contours in container (input) order.
    pub fn iter(&self) -> impl Iterator<Item = &Contour> {
        self.contours.iter()
    }

    /// Iterates `(id, contour)` pairs in container order.
    pub fn iter_with_ids(&self) -> impl Iterator<Item = (ContourId, &Contour)> {
        self.contours
            .iter()
            .enumerate()
            .map(|(i, c)| (ContourId(i as u32), c))
    }

    /// Number of hole contours in the frame.
    pub fn hole_count(&self) -> usize {
        self.contours.iter().filter(|c| c.is_hole).count()
    }

    /// Deepest nesting level present, or 0 for an empty tree.
    pub fn max_depth(&self) -> u32 {
        self.contours.iter().map(|c| c.tree_depth).max().unwrap_or(0)
    }

    /// Closest contour matching `kind` to `point`.
    ///
    /// Linear scan over all matching contours and, within each, all edges;
    /// no spatial index. Strict `<` comparison keeps the first contour in
    /// container order when two are equidistant. Returns `None` when no
    /// contour matches the filter.
    pub fn find_closest_contour(&self, point: Vec2, kind: ContourKind) -> Option<ClosestContour> {
        let mut best: Option<ClosestContour> = None;

        for (id, c) in self.iter_with_ids() {
            if !c.is_kind(kind) {
                continue;
            }
            let Some(hit) = c.polyline.closest_point(point) else {
                continue;
            };
            if best.map_or(true, |b| hit.distance < b.distance) {
                best = Some(ClosestContour {
                    id,
                    point: hit.point,
                    distance: hit.distance,
                });
            }
        }

        best
    }

    /// Deepest contour containing `point`, or `None` if no root contains it.
    ///
    /// Depth-first from each depth-0 root in container order: at a
    /// containing node, the first containing child's (deeper) result wins;
    /// otherwise the node itself is the leaf. A hole nested inside a sheet
    /// is therefore preferred over the sheet when the point lies in the
    /// hole.
    pub fn find_leaf_contour_containing_point(&self, point: Vec2) -> Option<ContourId> {
        for (id, c) in self.iter_with_ids() {
            if c.tree_depth == 0 {
                if let Some(leaf) = self.leaf_search(id, point) {
                    return Some(leaf);
                }
            }
        }
        None
    }

    fn leaf_search(&self, at: ContourId, point: Vec2) -> Option<ContourId> {
        let c = &self.contours[at.index()];
        if !c.contains(point) {
            return None;
        }
        for &child in &c.children {
            if let Some(leaf) = self.leaf_search(child, point) {
                return Some(leaf);
            }
        }
        Some(at)
    }
}

impl std::ops::Index<ContourId> for ContourTree {
    type Output = Contour;

    fn index(&self, id: ContourId) -> &Contour {
        &self.contours[id.index()]
    }
}
