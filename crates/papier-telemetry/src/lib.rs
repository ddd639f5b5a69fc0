//! # papier-telemetry
//!
//! Event bus for frame telemetry. Emits structured events (tree builds,
//! rejected frames, resolve passes) that can be consumed by pluggable
//! sinks (in-memory capture, `tracing` logs).

pub mod bus;
pub mod events;
pub mod sinks;

pub use bus::EventBus;
pub use events::{EventKind, FrameEvent};
pub use sinks::{EventSink, TracingSink, VecSink};
