//! Startup orchestration.
//!
//! # Responsibilities
//! - Load the rules file into a fresh store and lint it
//! - Start the metrics endpoint when enabled
//! - Bind the listener and build the HTTP server
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal, nothing is served from a
//!   partially loaded rule set
//! - The listener binds last, after rules are in place

use std::net::SocketAddr;
use std::sync::Arc;

use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::broadcast;

use crate::config::loader::load_rules_file;
use crate::config::validation::lint_rules;
use crate::config::{ConfigError, ConfigStore, ServiceConfig};
use crate::http::HttpServer;
use crate::observability::metrics;
use crate::observability::TracingSink;
use crate::routing::Resolver;

/// Error type for startup and serving.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        source: std::io::Error,
    },

    #[error("invalid metrics address {address}: {source}")]
    MetricsAddress {
        address: String,
        source: std::net::AddrParseError,
    },

    #[error("server error: {0}")]
    Serve(std::io::Error),
}

/// Create a store and load the configured rules file into it.
pub fn load_rule_store(config: &ServiceConfig) -> Result<Arc<ConfigStore>, ConfigError> {
    let store = Arc::new(ConfigStore::new());
    let rules = load_rules_file(&store, &config.rules.path)?;

    for warning in lint_rules(&rules) {
        tracing::warn!(
            file = %config.rules.path.display(),
            warning = %warning,
            "Suspicious rule"
        );
    }

    metrics::record_rules_loaded(rules.len());
    tracing::info!(
        file = %config.rules.path.display(),
        rules = rules.len(),
        "Configuration loaded"
    );
    Ok(store)
}

/// A service ready to accept traffic.
pub struct Service {
    server: HttpServer,
    listener: TcpListener,
}

impl Service {
    /// Address the listener is bound to.
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Serve until `shutdown` fires.
    pub async fn run(self, shutdown: broadcast::Receiver<()>) -> Result<(), StartupError> {
        self.server
            .run(self.listener, shutdown)
            .await
            .map_err(StartupError::Serve)
    }
}

/// Run every startup step in order and return the bound service.
pub async fn start(config: ServiceConfig) -> Result<Service, StartupError> {
    let store = load_rule_store(&config)?;

    if config.observability.metrics_enabled {
        let address = &config.observability.metrics_address;
        let addr = address.parse().map_err(|source| StartupError::MetricsAddress {
            address: address.clone(),
            source,
        })?;
        metrics::init_metrics(addr);
    }

    let address = config.listener.bind_address.clone();
    let bind_error = |source| StartupError::Bind {
        address: address.clone(),
        source,
    };
    let listener = TcpListener::bind(&address).await.map_err(bind_error)?;
    let local_addr = listener.local_addr().map_err(bind_error)?;
    tracing::info!(address = %local_addr, "Listening for connections");

    let resolver = Resolver::new(store, Arc::new(TracingSink::new()));
    let server = HttpServer::new(config, resolver);
    Ok(Service { server, listener })
}
