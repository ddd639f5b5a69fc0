//! # papier-types
//!
//! Shared types, identifiers, error types, and constants
//! for the papier contour/collision engine.
//!
//! This crate has zero domain logic — it defines the vocabulary
//! that all other papier crates share.

pub mod constants;
pub mod error;
pub mod ids;
pub mod scalar;

pub use error::{PapierError, PapierResult};
pub use ids::ContourId;
pub use scalar::Scalar;
