//! # papier-io
//!
//! Frame input/output contract and validation.
//!
//! Defines the boundary types that external systems (CLI, recorded-frame
//! tooling, the vision collaborator) use to communicate with the papier
//! core, plus pre-build validation with clear diagnostics.

pub mod contract;
pub mod validator;

pub use contract::{FrameInput, FrameOutput};
pub use validator::validate_frame;
