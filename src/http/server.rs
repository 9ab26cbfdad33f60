//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router: health probe plus a catch-all mock handler
//! - Wire up middleware (request ID, tracing, timeout)
//! - Dispatch every request into the resolution pipeline
//! - Record request metrics

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    extract::State,
    http::{Method, Uri},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::{HealthConfig, ServiceConfig};
use crate::http::request::{
    inbound_request, propagate_request_id_layer, request_span, set_request_id_layer,
};
use crate::http::response::{health_body, into_http_response};
use crate::observability::metrics::{self, Endpoint};
use crate::routing::Resolver;

/// Application state injected into handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    pub resolver: Arc<Resolver>,
}

/// HTTP server for the mock service.
pub struct HttpServer {
    router: Router,
    config: ServiceConfig,
}

impl HttpServer {
    /// Create a new HTTP server answering from `resolver`.
    pub fn new(config: ServiceConfig, resolver: Resolver) -> Self {
        let state = AppState {
            resolver: Arc::new(resolver),
        };
        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &ServiceConfig, state: AppState) -> Router {
        let mut router = Router::new();

        if let Some(path) = health_route(&config.health) {
            router = router.route(path, get(health_handler).fallback(mock_handler));
        }

        router
            .fallback(mock_handler)
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(set_request_id_layer())
                    .layer(propagate_request_id_layer())
                    .layer(TraceLayer::new_for_http().make_span_with(request_span))
                    .layer(TimeoutLayer::new(Duration::from_secs(
                        config.timeouts.request_secs,
                    ))),
            )
    }

    /// The configured router, for driving the service without a listener.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            health = self.config.health.enabled,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }
}

/// The health route to register, if any.
fn health_route(health: &HealthConfig) -> Option<&str> {
    if !health.enabled {
        return None;
    }
    if !is_literal_route(&health.path) {
        tracing::warn!(
            path = %health.path,
            "Health path must be a literal path starting with '/', probe disabled"
        );
        return None;
    }
    Some(health.path.as_str())
}

/// A path axum registers verbatim: leading '/', no captures or wildcards.
fn is_literal_route(path: &str) -> bool {
    path.starts_with('/')
        && !path.contains(['{', '}'])
        && !path
            .split('/')
            .any(|segment| segment.starts_with(':') || segment.starts_with('*'))
}

/// Catch-all handler: resolves every request against the rules.
async fn mock_handler(State(state): State<AppState>, method: Method, uri: Uri) -> Response {
    let start = Instant::now();
    let request = inbound_request(&method, &uri);

    let resolution = state.resolver.resolve(&request);
    let response = into_http_response(&resolution);

    metrics::record_request(
        method.as_str(),
        response.status().as_u16(),
        Endpoint::Mock,
        start,
    );
    response
}

async fn health_handler(method: Method) -> Response {
    let start = Instant::now();
    let response = Json(health_body()).into_response();
    metrics::record_request(
        method.as_str(),
        response.status().as_u16(),
        Endpoint::Health,
        start,
    );
    response
}
