//! Configuration errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required configuration file is missing
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Configuration could not be parsed or deserialized
    #[error("Configuration parse error: {0}")]
    ParseError(String),

    /// A setting failed validation after loading
    #[error("Invalid configuration for {field}: {message}")]
    ValidationError { field: String, message: String },

    /// Conflicting environment variables were set
    #[error("Conflicting configuration sources: {0}")]
    MutualExclusivityError(String),

    /// Error from the underlying config crate
    #[error(transparent)]
    Other(#[from] config::ConfigError),
}

impl ConfigError {
    pub fn file_not_found(message: impl Into<String>) -> Self {
        ConfigError::FileNotFound(message.into())
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        ConfigError::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn mutual_exclusivity(message: impl Into<String>) -> Self {
        ConfigError::MutualExclusivityError(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = ConfigError::validation("database.url", "must not be empty");
        assert_eq!(
            err.to_string(),
            "Invalid configuration for database.url: must not be empty"
        );
    }
}
