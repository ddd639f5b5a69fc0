//! Closed polygon queries.
//!
//! A `Polygon` is an ordered point sequence with an implicit closing edge
//! from the last point back to the first. The two queries the rest of the
//! engine is built on live here: closest point on the polyline, and the
//! even-odd containment test.

use glam::Vec2;
use papier_types::Scalar;
use serde::{Deserialize, Serialize};

use crate::rect::Rect;

/// An ordered sequence of 2D points, implicitly closed.
///
/// Meaningful polygons have at least 3 points; shorter input is rejected
/// by the extraction step before it reaches this crate.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Polygon {
    /// The vertices, in winding order.
    pub points: Vec<Vec2>,
}

/// Result of a closest-point query against a polyline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClosestPoint {
    /// The nearest point lying on an edge of the polyline.
    pub point: Vec2,
    /// Euclidean distance from the query point.
    pub distance: Scalar,
}

/// Closest point to `p` on the segment `a`–`b` (clamped projection).
pub fn closest_point_on_segment(p: Vec2, a: Vec2, b: Vec2) -> Vec2 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq == 0.0 {
        return a;
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    a + ab * t
}

impl Polygon {
    /// Creates a polygon from a point list.
    pub fn new(points: Vec<Vec2>) -> Self {
        Self { points }
    }

    /// Number of vertices (equals the number of edges, the closing edge
    /// included).
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the polygon has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Axis-aligned bounds of the vertices.
    pub fn bounding_rect(&self) -> Rect {
        Rect::from_points(&self.points)
    }

    /// Closest point on the closed polyline to `p`.
    ///
    /// Scans every edge including the closing one. Comparison is strict
    /// `<`, so when two edges are equidistant the earlier edge in winding
    /// order wins — tie-breaking is deterministic for repeated runs.
    ///
    /// Returns `None` only for an empty polygon.
    pub fn closest_point(&self, p: Vec2) -> Option<ClosestPoint> {
        let n = self.points.len();
        if n == 0 {
            return None;
        }

        let mut best = ClosestPoint {
            point: self.points[0],
            distance: Scalar::INFINITY,
        };

        for i in 0..n {
            let a = self.points[i];
            let b = self.points[(i + 1) % n];
            let x = closest_point_on_segment(p, a, b);
            let d = p.distance(x);
            if d < best.distance {
                best = ClosestPoint {
                    point: x,
                    distance: d,
                };
            }
        }

        Some(best)
    }

    /// Even-odd containment test over the closed polyline.
    ///
    /// A ray is cast in +X from `p`; an odd number of edge crossings means
    /// the point is inside. Points exactly on a horizontal edge follow the
    /// usual half-open convention of the crossing test.
    pub fn contains(&self, p: Vec2) -> bool {
        let n = self.points.len();
        if n < 3 {
            return false;
        }

        let mut inside = false;
        let mut j = n - 1;
        for i in 0..n {
            let a = self.points[i];
            let b = self.points[j];
            if (a.y > p.y) != (b.y > p.y) {
                let x_at_py = a.x + (p.y - a.y) * (b.x - a.x) / (b.y - a.y);
                if p.x < x_at_py {
                    inside = !inside;
                }
            }
            j = i;
        }
        inside
    }
}
