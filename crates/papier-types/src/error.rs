//! Error types for the papier engine.
//!
//! All crates return `PapierResult<T>` from fallible operations.
//! Queries that can legitimately find nothing return `Option` instead;
//! "no contour here" is an expected condition, not an error.

use thiserror::Error;

/// Unified error type for the papier engine.
#[derive(Debug, Error)]
pub enum PapierError {
    /// The raw parent links handed over by the extraction step are
    /// malformed: a cycle, or a parent index pointing outside the frame.
    /// Raised only by tree construction; the caller is expected to keep
    /// the previous frame's tree and carry on.
    #[error("Invalid contour hierarchy at index {index}: {reason}")]
    InvalidHierarchy { index: usize, reason: String },

    /// A polygon in the frame input is unusable (too few points,
    /// non-finite coordinates).
    #[error("Invalid polygon: {0}")]
    InvalidPolygon(String),

    /// Frame-level input is inconsistent (bad disk radius, etc.).
    #[error("Invalid frame: {0}")]
    InvalidFrame(String),

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization failure.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Convenience alias for `Result<T, PapierError>`.
pub type PapierResult<T> = Result<T, PapierError>;
