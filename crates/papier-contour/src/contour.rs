//! Contour node types.
//!
//! A `Contour` is one closed outline in the current frame: either a sheet
//! of paper (solid) or a hole cut out of one. Raw input from the extraction
//! step arrives as `RawContour`; the tree build decorates it with hierarchy
//! and bounds.

use papier_geom::{Polygon, Rect, Vec2};
use papier_types::{ContourId, Scalar};
use serde::{Deserialize, Serialize};

/// Classification tag used to filter contour queries.
///
/// `Solid` and `Hole` are the stored classifications; `Any` is a
/// query-time wildcard and is never stored on a contour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContourKind {
    /// Matches every contour (query wildcard).
    Any,
    /// A sheet-of-paper outline (depth-0 root).
    Solid,
    /// A contour nested one level inside another, representing empty
    /// space cut out of a sheet.
    Hole,
}

/// One detected outline as handed over by the extraction step.
///
/// `center`, `radius` (enclosing circle) and `area` are computed upstream
/// and carried through unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawContour {
    /// The closed outline.
    pub polygon: Polygon,
    /// Index of the enclosing contour, or `None` for a root.
    pub parent: Option<u32>,
    /// Enclosing-circle center (pass-through).
    pub center: Vec2,
    /// Enclosing-circle radius (pass-through).
    pub radius: Scalar,
    /// Polygon area (pass-through).
    pub area: Scalar,
}

/// One node of a frame's contour tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contour {
    /// The closed outline.
    pub polyline: Polygon,
    /// Axis-aligned bounds of `polyline`, computed at build time.
    pub bounding_rect: Rect,
    /// Enclosing-circle center (pass-through from extraction).
    pub center: Vec2,
    /// Enclosing-circle radius (pass-through from extraction).
    pub radius: Scalar,
    /// Polygon area (pass-through from extraction).
    pub area: Scalar,
    /// True iff this contour has a parent. Under the two-level retrieval
    /// convention used upstream, depth-0 contours are never holes and
    /// depth-1 contours always are; deeper nesting is not modeled.
    pub is_hole: bool,
    /// 0 for roots, else parent's depth + 1.
    pub tree_depth: u32,
    /// Index of the enclosing contour in the owning tree.
    pub parent: Option<ContourId>,
    /// Children in discovery order from the raw hierarchy.
    pub children: Vec<ContourId>,
}

impl Contour {
    /// The stored classification of this contour.
    #[inline]
    pub fn kind(&self) -> ContourKind {
        if self.is_hole {
            ContourKind::Hole
        } else {
            ContourKind::Solid
        }
    }

    /// Returns true if this contour matches `filter`
    /// (`Any` matches everything).
    #[inline]
    pub fn is_kind(&self, filter: ContourKind) -> bool {
        filter == ContourKind::Any || filter == self.kind()
    }

    /// Containment test for this node: bounding-rect rejection first,
    /// then the even-odd polygon test.
    pub fn contains(&self, p: Vec2) -> bool {
        self.bounding_rect.contains(p) && self.polyline.contains(p)
    }
}
