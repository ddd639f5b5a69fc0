//! Integration tests for papier-telemetry.

use std::sync::{Arc, Mutex};

use papier_telemetry::{EventBus, EventKind, EventSink, FrameEvent, VecSink};

fn tree_built(frame: u32) -> FrameEvent {
    FrameEvent::new(
        frame,
        EventKind::TreeBuilt {
            contours: 3,
            holes: 1,
            max_depth: 1,
        },
    )
}

/// Sink that records frame numbers into shared storage, so tests can
/// observe what a boxed sink received.
struct SharedSink {
    frames: Arc<Mutex<Vec<u32>>>,
}

impl EventSink for SharedSink {
    fn handle(&mut self, event: &FrameEvent) {
        self.frames.lock().unwrap().push(event.frame);
    }

    fn name(&self) -> &str {
        "shared_sink"
    }
}

// ─── Bus Tests ────────────────────────────────────────────────

#[test]
fn emitted_events_reach_sinks_on_flush() {
    let frames = Arc::new(Mutex::new(Vec::new()));
    let mut bus = EventBus::new();
    bus.add_sink(Box::new(SharedSink {
        frames: frames.clone(),
    }));
    assert_eq!(bus.sink_count(), 1);

    bus.emit(tree_built(0));
    bus.emit(tree_built(1));
    assert!(frames.lock().unwrap().is_empty(), "delivery happens on flush");

    bus.flush();
    assert_eq!(*frames.lock().unwrap(), vec![0, 1]);
}

#[test]
fn flush_delivers_in_emission_order() {
    let frames = Arc::new(Mutex::new(Vec::new()));
    let mut bus = EventBus::new();
    bus.add_sink(Box::new(SharedSink {
        frames: frames.clone(),
    }));

    for f in [3, 1, 2] {
        bus.emit(tree_built(f));
    }
    bus.flush();
    assert_eq!(*frames.lock().unwrap(), vec![3, 1, 2]);
}

#[test]
fn disabled_bus_drops_events() {
    let frames = Arc::new(Mutex::new(Vec::new()));
    let mut bus = EventBus::new();
    bus.add_sink(Box::new(SharedSink {
        frames: frames.clone(),
    }));

    bus.set_enabled(false);
    assert!(!bus.is_enabled());
    bus.emit(tree_built(0));
    bus.flush();
    assert!(frames.lock().unwrap().is_empty());

    bus.set_enabled(true);
    bus.emit(tree_built(1));
    bus.flush();
    assert_eq!(*frames.lock().unwrap(), vec![1]);
}

#[test]
fn every_sink_sees_every_event() {
    let a = Arc::new(Mutex::new(Vec::new()));
    let b = Arc::new(Mutex::new(Vec::new()));
    let mut bus = EventBus::new();
    bus.add_sink(Box::new(SharedSink { frames: a.clone() }));
    bus.add_sink(Box::new(SharedSink { frames: b.clone() }));

    bus.emit(tree_built(5));
    bus.flush();
    assert_eq!(*a.lock().unwrap(), vec![5]);
    assert_eq!(*b.lock().unwrap(), vec![5]);
}

// ─── Event Tests ──────────────────────────────────────────────

#[test]
fn events_serialize_to_json() {
    let event = FrameEvent::new(
        7,
        EventKind::BuildRejected {
            reason: "parent index 9 out of range".into(),
        },
    );
    let json = serde_json::to_string(&event).unwrap();
    assert!(json.contains("BuildRejected"));
    let back: FrameEvent = serde_json::from_str(&json).unwrap();
    assert_eq!(back.frame, 7);
}

#[test]
fn vec_sink_collects() {
    let mut sink = VecSink::new();
    sink.handle(&tree_built(1));
    sink.handle(&tree_built(2));
    assert_eq!(sink.events.len(), 2);
    assert_eq!(sink.name(), "vec_sink");
}
