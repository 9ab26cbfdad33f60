//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Resolution pipeline produces:
//!     → events.rs (request / match / default / response events)
//!
//! HTTP server produces:
//!     → metrics.rs (counters, histograms)
//!     → request spans with correlation IDs (tower-http trace layer)
//!
//! Consumers:
//!     → logging.rs subscriber (stdout, JSON lines or pretty)
//!     → Metrics endpoint (Prometheus scrape)
//! ```
//!
//! # Design Decisions
//! - Structured logging (JSON) for machine parsing
//! - Request ID flows through every request span
//! - Observation never changes a response

pub mod events;
pub mod logging;
pub mod metrics;

pub use events::{EventSink, RecordingSink, TracingSink};
