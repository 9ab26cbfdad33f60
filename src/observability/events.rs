//! Request lifecycle events.
//!
//! # Responsibilities
//! - Define the sink the resolution pipeline reports into
//! - Render events as structured `tracing` events (JSON in production)
//! - Provide an in-memory sink for tests and embedding
//!
//! # Design Decisions
//! - Sinks never return errors; a failure to render an event is turned
//!   into a single `log_error` event and swallowed
//! - Events carry only what the pipeline already computed, so observing a
//!   request never changes its outcome

use std::sync::Mutex;

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

/// Target used for every request lifecycle event.
pub const EVENTS_TARGET: &str = "mock_service::events";

/// Query parameters reduced to their first value per key, in source order.
pub type FlatParams = IndexMap<String, String>;

/// Receiver of request lifecycle events.
pub trait EventSink: Send + Sync {
    /// A request reached the pipeline.
    fn request(&self, method: &str, path: &str, params: &FlatParams);

    /// A rule matched. `status` is the rule's configured status.
    fn matched(&self, path: &str, status: i64);

    /// No rule matched; the default response is used.
    fn no_match(&self);

    /// The final response handed back to the transport.
    fn response(&self, status: i64, body: &Value);
}

/// Sink that emits `tracing` events under [`EVENTS_TARGET`].
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl TracingSink {
    pub fn new() -> Self {
        Self
    }

    /// Serialize an event field, degrading to a `log_error` event on failure.
    ///
    /// JSON values and flat params always serialize; the error branch covers
    /// any other `Serialize` payload handed in.
    fn render<T: Serialize + ?Sized>(value: &T, entry: &'static str) -> Option<String> {
        match serde_json::to_string(value) {
            Ok(json) => Some(json),
            Err(e) => {
                tracing::error!(
                    target: EVENTS_TARGET,
                    kind = "log_error",
                    entry,
                    error = %e,
                    "Failed to marshal log entry"
                );
                None
            }
        }
    }
}

impl EventSink for TracingSink {
    fn request(&self, method: &str, path: &str, params: &FlatParams) {
        let Some(params) = Self::render(params, "request") else {
            return;
        };
        tracing::info!(
            target: EVENTS_TARGET,
            kind = "request",
            method = %method,
            path = %path,
            params = %params,
            "Request received"
        );
    }

    fn matched(&self, path: &str, status: i64) {
        tracing::info!(
            target: EVENTS_TARGET,
            kind = "match",
            rule_path = %path,
            rule_code = status,
            "Rule matched"
        );
    }

    fn no_match(&self) {
        tracing::info!(
            target: EVENTS_TARGET,
            kind = "default",
            "No matching rule found, using default response"
        );
    }

    fn response(&self, status: i64, body: &Value) {
        let Some(body) = Self::render(body, "response") else {
            return;
        };
        tracing::info!(
            target: EVENTS_TARGET,
            kind = "response",
            status_code = status,
            body = %body,
            "Response sent"
        );
    }
}

/// A single recorded event.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Request {
        method: String,
        path: String,
        params: FlatParams,
    },
    Match {
        path: String,
        status: i64,
    },
    NoMatch,
    Response {
        status: i64,
        body: Value,
    },
}

/// Sink that keeps every event in memory.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Mutex<Vec<Event>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events recorded so far.
    pub fn events(&self) -> Vec<Event> {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn push(&self, event: Event) {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(event);
    }
}

impl EventSink for RecordingSink {
    fn request(&self, method: &str, path: &str, params: &FlatParams) {
        self.push(Event::Request {
            method: method.to_string(),
            path: path.to_string(),
            params: params.clone(),
        });
    }

    fn matched(&self, path: &str, status: i64) {
        self.push(Event::Match {
            path: path.to_string(),
            status,
        });
    }

    fn no_match(&self) {
        self.push(Event::NoMatch);
    }

    fn response(&self, status: i64, body: &Value) {
        self.push(Event::Response {
            status,
            body: body.clone(),
        });
    }
}
