//! Application configuration module
//!
//! This module provides type-safe configuration loading using the `config`
//! and `dotenvy` crates. Sources are layered in this order, later sources
//! overriding earlier ones:
//!
//! 1. Built-in defaults (the framework-selection case study)
//! 2. An optional file named by `MCDA_RANKER_CONFIG` (YAML, TOML, JSON, ...)
//! 3. Environment variables with the `MCDA_RANKER` prefix, `__` separated
//!
//! # Example
//!
//! ```no_run
//! use mcda_ranker::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Ranking with {}", config.engine.method);
//! ```

mod engine;
mod error;
mod logging;

pub use engine::{CriterionConfig, EngineConfig, WEIGHT_TOTAL_TOLERANCE};
pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable naming an optional configuration file
pub const CONFIG_FILE_ENV: &str = "MCDA_RANKER_CONFIG";

/// Root application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Criteria, alternative catalog, input scale, default method
    #[serde(default)]
    pub engine: EngineConfig,

    /// Log filter and format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from the environment
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads the file named by `MCDA_RANKER_CONFIG`, if set
    /// 3. Reads environment variables with `MCDA_RANKER` prefix
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `MCDA_RANKER__ENGINE__METHOD=topsis` -> `engine.method = topsis`
    /// - `MCDA_RANKER__LOGGING__JSON=true` -> `logging.json = true`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or values cannot be
    /// parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let file = std::env::var(CONFIG_FILE_ENV).ok();
        Self::build(file.as_deref().map(Path::new))
    }

    /// Load configuration from an explicit file, still honouring
    /// environment overrides.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::build(Some(path.as_ref()))
    }

    fn build(file: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = config::Config::builder();
        if let Some(path) = file {
            tracing::debug!(path = %path.display(), "Reading configuration file");
            builder = builder.add_source(config::File::from(path).required(true));
        }

        let config = builder
            .add_source(
                config::Environment::default()
                    .prefix("MCDA_RANKER")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.engine.validate()?;
        Ok(())
    }
}
