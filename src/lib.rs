//! Configuration-driven HTTP mock service library.

pub mod cli;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;

pub use config::{ConfigError, ConfigStore, ServiceConfig};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use routing::{InboundRequest, Resolution, Resolver, Rule, RuleSet};
