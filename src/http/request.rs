//! Request handling.
//!
//! # Responsibilities
//! - Generate and propagate a request ID for every request
//! - Extract the matching-relevant information (method, decoded path, query)
//!
//! # Design Decisions
//! - Request ID added as early as possible for tracing
//! - The path is percent-decoded before matching; the raw path is used when
//!   decoding does not yield UTF-8
//! - Query strings are parsed as form-urlencoded, keeping every value in
//!   source order; flattening is the resolver's job

use std::borrow::Cow;

use axum::body::Body;
use axum::http::{Method, Request, Uri};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tracing::Span;

use crate::routing::{InboundRequest, QueryParams};

/// Header carrying the request ID.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Layer that assigns a UUID request ID when the client sent none.
pub fn set_request_id_layer() -> SetRequestIdLayer<MakeRequestUuid> {
    SetRequestIdLayer::x_request_id(MakeRequestUuid)
}

/// Layer that copies the request ID onto the response.
pub fn propagate_request_id_layer() -> PropagateRequestIdLayer {
    PropagateRequestIdLayer::x_request_id()
}

/// Span for one request, tagged with its request ID.
pub fn request_span(request: &Request<Body>) -> Span {
    let request_id = request
        .headers()
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown");

    tracing::info_span!(
        "request",
        request_id = %request_id,
        method = %request.method(),
        uri = %request.uri(),
    )
}

/// Percent-decode a URI path.
pub fn decode_path(raw: &str) -> Cow<'_, str> {
    urlencoding::decode(raw).unwrap_or(Cow::Borrowed(raw))
}

/// Parse a raw query string into an ordered multi-map.
pub fn parse_query(raw: Option<&str>) -> QueryParams {
    let mut params = QueryParams::new();
    let Some(raw) = raw else {
        return params;
    };

    for (key, value) in url::form_urlencoded::parse(raw.as_bytes()) {
        params
            .entry(key.into_owned())
            .or_default()
            .push(value.into_owned());
    }
    params
}

/// Build the resolver input from the request line.
pub fn inbound_request(method: &Method, uri: &Uri) -> InboundRequest {
    InboundRequest {
        method: method.as_str().to_string(),
        path: decode_path(uri.path()).into_owned(),
        query: parse_query(uri.query()),
    }
}
