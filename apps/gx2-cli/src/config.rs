//! CLI configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.
//!
//! | Variable        | Values                                  | Default |
//! |-----------------|-----------------------------------------|---------|
//! | `GX2_LOG_LEVEL` | `trace`, `debug`, `info`, `warn`, `error` | `info`  |
//! | `GX2_OUTPUT`    | `text`, `json`                          | `text`  |
//!
//! `RUST_LOG`, when set, takes precedence over `GX2_LOG_LEVEL`.

use std::env;

use serde::{Deserialize, Serialize};

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// How command results are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Fallback tracing filter when `RUST_LOG` is unset
    pub log_level: String,

    /// Output format for command results
    pub output: OutputFormat,
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            log_level: "info".to_string(),
            output: OutputFormat::Text,
        }
    }
}

impl CliConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn load_from<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = CliConfig::default();

        let log_level = match lookup("GX2_LOG_LEVEL") {
            Some(level) => {
                let level = level.trim().to_ascii_lowercase();
                if !LOG_LEVELS.contains(&level.as_str()) {
                    return Err(ConfigError::InvalidValue("GX2_LOG_LEVEL".to_string()));
                }
                level
            }
            None => defaults.log_level,
        };

        let output = match lookup("GX2_OUTPUT").as_deref().map(str::trim) {
            None => defaults.output,
            Some(value) if value.eq_ignore_ascii_case("text") => OutputFormat::Text,
            Some(value) if value.eq_ignore_ascii_case("json") => OutputFormat::Json,
            Some(_) => return Err(ConfigError::InvalidValue("GX2_OUTPUT".to_string())),
        };

        Ok(CliConfig { log_level, output })
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
