//! # CLI Error Types
//!
//! Everything the command line can fail with.

use gx2_core::FormError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by `gx2` commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Bad environment configuration.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Contact form rejected; shown to the user with its Russian message.
    #[error("Form error: {0}")]
    Form(#[from] FormError),

    /// Result could not be encoded as JSON.
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Text printed to stderr for this error.
    pub fn user_message(&self) -> String {
        match self {
            CliError::Form(err) => format!(
                "{}: {}",
                gx2_core::error::USER_ERROR_TITLE,
                err.user_message()
            ),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CliConfig;

    #[test]
    fn test_form_error_user_message() {
        let err: CliError = FormError::InvalidPhone.into();
        assert_eq!(
            err.user_message(),
            "Ошибка валидации: Введите корректный номер телефона в формате +7 (XXX) XXX-XX-XX."
        );
    }

    #[test]
    fn test_config_error_message() {
        let lookup = |key: &str| (key == "GX2_OUTPUT").then(|| "xml".to_string());
        let err: CliError = CliConfig::load_from(lookup).unwrap_err().into();
        assert!(matches!(err, CliError::Config(ConfigError::InvalidValue(_))));
        assert_eq!(
            err.user_message(),
            "Configuration error: Invalid value for GX2_OUTPUT"
        );
    }
}
