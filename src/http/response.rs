//! Response writing.
//!
//! # Responsibilities
//! - Turn a [`Resolution`] into an HTTP response with a JSON body
//! - Map statuses that have no wire form to 500
//!
//! # Design Decisions
//! - Bodies are serialized straight from the shared rule body, no copy
//! - A status outside `200..=999` cannot be sent as a final status (1xx is
//!   informational only); such responses become `500` with `{}` and an error log

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};

use crate::config::validation::is_wire_status;
use crate::routing::Resolution;

/// Body of the health probe.
pub fn health_body() -> Value {
    json!({"status": "healthy", "service": "mock-service"})
}

/// Convert a resolved status into a wire status.
pub fn wire_status(status: i64) -> Option<StatusCode> {
    if !is_wire_status(status) {
        return None;
    }
    u16::try_from(status)
        .ok()
        .and_then(|code| StatusCode::from_u16(code).ok())
}

/// Write a resolution as an HTTP response.
pub fn into_http_response(resolution: &Resolution) -> Response {
    match wire_status(resolution.status) {
        Some(status) => (status, Json(resolution.body.as_ref())).into_response(),
        None => {
            tracing::error!(
                status = resolution.status,
                "Resolved status cannot be sent, responding with 500"
            );
            (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({}))).into_response()
        }
    }
}
