//! Mock service (v1)
//!
//! Answers every HTTP request from an ordered list of JSON-configured rules.
//!
//! # Architecture Overview
//!
//! ```text
//!                      ┌──────────────────────────────────────────────────┐
//!                      │                  MOCK SERVICE                     │
//!                      │                                                   │
//!   Client Request     │  ┌─────────┐    ┌──────────┐    ┌─────────────┐  │
//!   ───────────────────┼─▶│  http   │───▶│ resolver │───▶│   matcher   │  │
//!                      │  │ server  │    │          │    │ (first wins)│  │
//!                      │  └─────────┘    └────┬─────┘    └──────┬──────┘  │
//!                      │                      │                 │         │
//!                      │                      ▼                 ▼         │
//!   Client Response    │  ┌─────────┐    ┌──────────┐    ┌─────────────┐  │
//!   ◀──────────────────┼──│response │◀───│synthesize│◀───│ rule store  │  │
//!                      │  │  JSON   │    │          │    │ (ArcSwap)   │  │
//!                      │  └─────────┘    └──────────┘    └─────────────┘  │
//!                      │                                                   │
//!                      │  config · observability · lifecycle               │
//!                      └──────────────────────────────────────────────────┘
//! ```

use clap::Parser;

use mock_service::cli::Cli;
use mock_service::lifecycle::{self, signals, Shutdown};
use mock_service::observability::logging;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Cli::parse().into_config()?;

    logging::init_logging(&config.observability)?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        rules = %config.rules.path.display(),
        bind_address = %config.listener.bind_address,
        "mock-service starting"
    );

    let service = match lifecycle::start(config).await {
        Ok(service) => service,
        Err(e) => {
            tracing::error!(error = %e, "Startup failed");
            return Err(e.into());
        }
    };

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    signals::spawn_signal_listener(shutdown);

    service.run(server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
