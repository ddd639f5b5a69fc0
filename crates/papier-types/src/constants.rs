//! Numeric constants and engine defaults.

/// Epsilon for floating-point comparisons.
pub const EPSILON: f32 = 1.0e-6;

/// Squared-length threshold below which a direction vector is treated
/// as degenerate and replaced by the fallback direction.
pub const DEGENERATE_LENGTH_SQ: f32 = 1.0e-12;

/// Default pass budget for the settled (multi-pass) disk solver.
pub const DEFAULT_SETTLE_PASSES: u32 = 8;
