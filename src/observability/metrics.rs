//! Metrics collection and exposition.
//!
//! # Metrics
//! - `mock_requests_total` (counter): requests by method, status, endpoint
//! - `mock_request_duration_seconds` (histogram): handling latency
//! - `mock_rules_loaded` (gauge): size of the active rule set
//!
//! Without an installed recorder every call is a no-op.

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Which handler answered a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Mock,
    Health,
}

impl Endpoint {
    pub fn as_str(self) -> &'static str {
        match self {
            Endpoint::Mock => "mock",
            Endpoint::Health => "health",
        }
    }
}

/// Install the Prometheus recorder and its scrape endpoint.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint started"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to start metrics endpoint"),
    }
}

/// Record one answered request.
pub fn record_request(method: &str, status: u16, endpoint: Endpoint, start: Instant) {
    metrics::counter!(
        "mock_requests_total",
        "method" => method.to_string(),
        "status" => status.to_string(),
        "endpoint" => endpoint.as_str()
    )
    .increment(1);

    metrics::histogram!("mock_request_duration_seconds", "endpoint" => endpoint.as_str())
        .record(start.elapsed().as_secs_f64());
}

/// Record the size of the active rule set.
pub fn record_rules_loaded(count: usize) {
    metrics::gauge!("mock_rules_loaded").set(count as f64);
}
