//! Scalar type alias for the engine.
//!
//! `f32` matches `glam`'s native vector width and is comfortably
//! precise for camera-resolution coordinates. This alias makes it
//! easy to experiment with `f64` if a future input space needs it.

/// The floating-point type used throughout the engine.
pub type Scalar = f32;
