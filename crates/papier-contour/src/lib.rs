//! # papier-contour
//!
//! Per-frame contour hierarchy for the papier engine.
//!
//! The vision collaborator hands over a flat list of closed outlines with
//! raw parent links each frame. `ContourTree::build` turns that into a
//! parent/child hierarchy encoding "paper" vs "holes" and exposes the two
//! queries everything else is built on: closest contour to a point, and
//! deepest contour containing a point.
//!
//! The tree is rebuilt wholesale every frame; there is no contour identity
//! across frames.

pub mod contour;
pub mod tree;

pub use contour::{Contour, ContourKind, RawContour};
pub use tree::{ClosestContour, ContourTree};
