//! Logging configuration

use serde::{Deserialize, Serialize};

/// Log output settings for the binary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset
    #[serde(default = "default_level")]
    pub level: String,

    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

impl LoggingConfig {
    /// Install the global tracing subscriber.
    ///
    /// `RUST_LOG` takes precedence over the configured level. Calling this
    /// twice is harmless; the second call leaves the first subscriber in place.
    pub fn init_tracing(&self) {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&self.level));

        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr);

        let result = if self.json {
            builder.json().try_init()
        } else {
            builder.try_init()
        };

        if let Err(e) = result {
            tracing::debug!("Tracing subscriber already installed: {}", e);
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            json: false,
        }
    }
}

fn default_level() -> String {
    "info,mcda_ranker=debug".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_defaults() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "info,mcda_ranker=debug");
        assert!(!config.json);
    }

    #[test]
    fn test_logging_deserialization_fills_defaults() {
        let config: LoggingConfig = serde_json::from_str(r#"{"json": true}"#).unwrap();
        assert!(config.json);
        assert_eq!(config.level, "info,mcda_ranker=debug");
    }

    #[test]
    fn test_init_tracing_twice_does_not_panic() {
        let config = LoggingConfig::default();
        config.init_tracing();
        config.init_tracing();
    }
}
