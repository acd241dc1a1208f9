#![forbid(unsafe_code)]

//! Playback lifecycle events are emitted once per playback with the stop
//! reason attached.
//!
//! Run:
//!   cargo test -p sortviz-runtime --test tracing_playback_events

use std::sync::{Arc, Mutex};

use sortviz_core::{Algorithm, Element};
use sortviz_runtime::{CancellationSource, CancellationToken, Playback, Speed};
use tracing_subscriber::layer::SubscriberExt;

#[derive(Debug, Clone, Default)]
struct CapturedEvent {
    target: String,
    fields: Vec<(String, String)>,
}

impl CapturedEvent {
    fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

struct FieldVisitor(Vec<(String, String)>);

impl tracing::field::Visit for FieldVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        self.0.push((field.name().to_string(), format!("{value:?}")));
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        self.0.push((field.name().to_string(), value.to_string()));
    }

    fn record_u64(&mut self, field: &tracing::field::Field, value: u64) {
        self.0.push((field.name().to_string(), value.to_string()));
    }
}

struct EventCapture {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for EventCapture {
    fn on_event(
        &self,
        event: &tracing::Event<'_>,
        _ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        let mut visitor = FieldVisitor(Vec::new());
        event.record(&mut visitor);
        self.events.lock().unwrap().push(CapturedEvent {
            target: event.metadata().target().to_string(),
            fields: visitor.0,
        });
    }
}

fn capture<F: FnOnce()>(f: F) -> Vec<CapturedEvent> {
    let events = Arc::new(Mutex::new(Vec::new()));
    let layer = EventCapture {
        events: Arc::clone(&events),
    };
    let subscriber = tracing_subscriber::registry().with(layer);
    tracing::subscriber::with_default(subscriber, f);
    let out = events.lock().unwrap().clone();
    out
}

fn lifecycle(events: &[CapturedEvent]) -> Vec<CapturedEvent> {
    events
        .iter()
        .filter(|e| e.target == "sortviz.playback" && e.field("playback_event").is_some())
        .cloned()
        .collect()
}

fn playback() -> Playback {
    let steps = Algorithm::Merge
        .run(&Element::from_values(&[4, 2, 3, 1]))
        .into_steps();
    Playback::new(steps, Speed::new(100).unwrap())
}

#[test]
fn completed_playback_logs_start_and_stop_once() {
    let events = capture(|| {
        let mut playback = playback();
        let outcome = playback.play_with_sleeper(&CancellationToken::never(), |_| false, |_, _| {});
        assert!(!outcome.is_cancelled());
        // further ticks after completion must not log again
        let _ = playback.tick(&CancellationToken::never());
    });
    let lifecycle = lifecycle(&events);
    assert_eq!(lifecycle.len(), 2, "{lifecycle:?}");
    assert_eq!(lifecycle[0].field("playback_event"), Some("start"));
    assert_eq!(lifecycle[1].field("playback_event"), Some("stop"));
    assert_eq!(lifecycle[1].field("reason"), Some("completed"));
}

#[test]
fn cancelled_playback_logs_cancel_reason() {
    let events = capture(|| {
        let mut playback = playback();
        let source = CancellationSource::new();
        let token = source.token();
        let outcome = playback.play_with_sleeper(
            &token,
            |_| {
                source.cancel();
                true
            },
            |_, _| {},
        );
        assert!(outcome.is_cancelled());
    });
    let lifecycle = lifecycle(&events);
    assert_eq!(lifecycle.last().and_then(|e| e.field("reason")), Some("cancelled"));
}

#[test]
fn engine_runs_emit_step_counts() {
    let events = capture(|| {
        let _ = Algorithm::Quick.run(&Element::from_values(&[3, 1, 2]));
    });
    let engine = events
        .iter()
        .find(|e| e.target == "sortviz.engine")
        .expect("engine event");
    assert_eq!(engine.field("steps"), Some("6"));
    assert_eq!(engine.field("algorithm"), Some("quick"));
}
