//! Event bus — broadcast-style event dispatch with pluggable sinks.
//!
//! The bus uses `std::sync::mpsc` for thread-safe event delivery. Sinks
//! are registered once at initialization and receive events on `flush`.

use std::sync::mpsc;

use crate::events::FrameEvent;
use crate::sinks::EventSink;

/// Broadcast event bus for frame telemetry.
///
/// The producer side (`emit`) sends events to the channel; `flush`
/// delivers everything pending to each registered sink in order.
pub struct EventBus {
    sender: mpsc::Sender<FrameEvent>,
    receiver: mpsc::Receiver<FrameEvent>,
    sinks: Vec<Box<dyn EventSink>>,
    /// Whether the bus is active. A disabled bus drops events silently.
    enabled: bool,
}

impl EventBus {
    /// Creates a new event bus with no sinks.
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            sender,
            receiver,
            sinks: Vec::new(),
            enabled: true,
        }
    }

    /// Registers a sink to receive events.
    pub fn add_sink(&mut self, sink: Box<dyn EventSink>) {
        self.sinks.push(sink);
    }

    /// Enables or disables the bus.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Returns true if the bus is active.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Emit an event. If the bus is disabled, this is a no-op.
    pub fn emit(&self, event: FrameEvent) {
        if !self.enabled {
            return;
        }
        // Ignore the error if the receiver is somehow gone.
        let _ = self.sender.send(event);
    }

    /// Flush all pending events to registered sinks.
    ///
    /// Call at the end of each frame (or at shutdown) so sinks see
    /// everything that was emitted.
    pub fn flush(&mut self) {
        while let Ok(event) = self.receiver.try_recv() {
            for sink in &mut self.sinks {
                sink.handle(&event);
            }
        }
    }

    /// Returns the number of registered sinks.
    pub fn sink_count(&self) -> usize {
        self.sinks.len()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
