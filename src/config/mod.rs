//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! rules file (JSON)
//!     → loader.rs (read bytes)
//!     → store.rs (parse via rules.rs, atomic swap of Arc<RuleSet>)
//!     → validation.rs (lint warnings, logged at startup)
//!     → readers take Arc<RuleSet> snapshots
//!
//! settings file (TOML, optional) + CLI flags
//!     → loader.rs → schema.rs (ServiceConfig)
//! ```
//!
//! # Design Decisions
//! - Rule sets are immutable once loaded; a load replaces the whole set
//! - Parsing never touches the filesystem; byte acquisition is the loader's job
//! - Settings fields all have defaults to allow minimal configs

pub mod loader;
pub mod rules;
pub mod schema;
pub mod store;
pub mod validation;

pub use loader::ConfigError;
pub use schema::{HealthConfig, ListenerConfig, LogFormat, ObservabilityConfig, ServiceConfig};
pub use store::ConfigStore;
