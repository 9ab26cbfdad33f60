//! Command line interface.
//!
//! Flags override values from the optional settings file, which in turn
//! override the built-in defaults.

use std::path::PathBuf;

use clap::Parser;

use crate::config::loader::load_settings;
use crate::config::{ConfigError, LogFormat, ServiceConfig};

#[derive(Debug, Parser)]
#[command(name = "mock-service")]
#[command(version, about = "Configuration-driven HTTP mock service", long_about = None)]
pub struct Cli {
    /// Path to the JSON rules file [default: config.json]
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Port to listen on [default: 8080]
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Optional TOML settings file
    #[arg(short, long)]
    pub settings: Option<PathBuf>,

    /// Log output format
    #[arg(long, value_enum)]
    pub log_format: Option<LogFormat>,
}

impl Cli {
    /// Resolve the effective service settings.
    pub fn into_config(self) -> Result<ServiceConfig, ConfigError> {
        let mut config = match &self.settings {
            Some(path) => load_settings(path)?,
            None => ServiceConfig::default(),
        };

        if let Some(path) = self.config {
            config.rules.path = path;
        }
        if let Some(port) = self.port {
            config.listener.set_port(port);
        }
        if let Some(format) = self.log_format {
            config.observability.log_format = format;
        }

        Ok(config)
    }
}
