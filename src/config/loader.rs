//! Configuration loading from disk.
//!
//! Reading bytes happens here; parsing the rules document is delegated to
//! [`crate::config::store::ConfigStore`], which never touches the filesystem.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use thiserror::Error;

use crate::config::schema::ServiceConfig;
use crate::config::store::ConfigStore;
use crate::routing::RuleSet;

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration bytes could not be acquired.
    #[error("failed to read config file {origin}: {error}")]
    Io {
        origin: String,
        #[source]
        error: std::io::Error,
    },

    /// The rules document is not valid JSON or has the wrong shape.
    #[error("failed to parse JSON config file {origin}: {error}")]
    Parse {
        origin: String,
        #[source]
        error: serde_json::Error,
    },

    /// The service settings file is not valid TOML or has the wrong shape.
    #[error("failed to parse settings file {origin}: {error}")]
    Settings {
        origin: String,
        #[source]
        error: toml::de::Error,
    },
}

impl ConfigError {
    /// Identity of the byte source that failed.
    pub fn origin(&self) -> &str {
        match self {
            ConfigError::Io { origin, .. }
            | ConfigError::Parse { origin, .. }
            | ConfigError::Settings { origin, .. } => origin,
        }
    }
}

/// Read a rules file and load it into `store`.
pub fn load_rules_file(store: &ConfigStore, path: &Path) -> Result<Arc<RuleSet>, ConfigError> {
    let origin = path.display().to_string();
    let bytes = fs::read(path).map_err(|error| ConfigError::Io {
        origin: origin.clone(),
        error,
    })?;

    store.load(origin, &bytes)
}

/// Load service settings from a TOML file.
pub fn load_settings(path: &Path) -> Result<ServiceConfig, ConfigError> {
    let origin = path.display().to_string();
    let content = fs::read_to_string(path).map_err(|error| ConfigError::Io {
        origin: origin.clone(),
        error,
    })?;

    parse_settings(origin, &content)
}

/// Parse service settings from TOML text.
pub fn parse_settings(origin: impl Into<String>, content: &str) -> Result<ServiceConfig, ConfigError> {
    toml::from_str(content).map_err(|error| ConfigError::Settings {
        origin: origin.into(),
        error,
    })
}
