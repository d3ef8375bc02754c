//! Configuration management for the redirect service
//!
//! This module provides a layered configuration system that loads settings from:
//! 1. Default values (embedded in structs)
//! 2. TOML configuration file
//! 3. Environment variables (highest priority)
//!
//! # Usage
//!
//! ```no_run
//! use urlshort::config::Config;
//!
//! let config = Config::load().expect("Failed to load configuration");
//! println!("Server listening on: {}", config.server.bind_addr);
//! ```
//!
//! # Environment Variables
//!
//! Configuration can be overridden using environment variables with the pattern:
//! `URLSHORT__<section>__<key>`
//!
//! Examples:
//! - `URLSHORT__SERVER__BIND_ADDR=127.0.0.1:9000`
//! - `URLSHORT__SOURCES__YAML_PATH=/etc/urlshort/paths.yaml`
//! - `URLSHORT__FALLBACK__STATUS=404`
//!
//! # Configuration File
//!
//! By default, the configuration is loaded from `config/urlshort.toml`.
//! This can be overridden using the `URLSHORT_CONFIG` environment variable.

mod models;
mod sources;
mod validation;

pub use models::{Config, FallbackConfig, ServerConfig, SourcesConfig};
pub use validation::ValidationError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Configuration validation failed: {0}")]
    ValidationError(#[from] ValidationError),
}

impl Config {
    /// Load configuration from all sources (file + environment)
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables (`URLSHORT__*`)
    /// 2. TOML file (default: `config/urlshort.toml`)
    /// 3. Default values
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file is malformed or
    /// validation fails.
    pub fn load() -> Result<Self, ConfigError> {
        let config = sources::load()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: std::path::PathBuf) -> Result<Self, ConfigError> {
        let config = sources::load_from_sources(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Re-run validation, e.g. after applying command-line overrides
    pub fn validate(&self) -> Result<(), ValidationError> {
        validation::validate(self)
    }
}
