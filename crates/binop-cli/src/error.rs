//! Error types for the CLI

use binop_calculator::config::ConfigError;
use binop_calculator::core::CalcError;
use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur in the CLI
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// One-shot calculation failed; the message was already printed
    #[error("calculation failed ({})", .0.kind())]
    Calculation(CalcError),

    /// IO error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON output error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Logging could not be set up
    #[error("Logging setup failed: {message}")]
    Logging {
        /// Error message
        message: String,
    },
}

impl CliError {
    /// Create a logging error
    #[must_use]
    pub fn logging(message: impl Into<String>) -> Self {
        Self::Logging {
            message: message.into(),
        }
    }
}

impl From<CalcError> for CliError {
    fn from(err: CalcError) -> Self {
        Self::Calculation(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculation_error_display() {
        let err = CliError::from(CalcError::DivisionByZero);
        assert_eq!(err.to_string(), "calculation failed (division_by_zero)");
    }

    #[test]
    fn test_io_error_display() {
        let err = CliError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert!(err.to_string().starts_with("I/O error:"));
    }

    #[test]
    fn test_logging_error() {
        let err = CliError::logging("already set");
        assert_eq!(err.to_string(), "Logging setup failed: already set");
    }

    #[test]
    fn test_config_error_from_yaml() {
        let yaml_err = binop_calculator::config::CalculatorConfig::from_yaml("animation_ms: [")
            .unwrap_err();
        let err = CliError::from(yaml_err);
        assert!(err.to_string().starts_with("Configuration error:"));
    }
}
