//! Unified error types for hivemon
//!
//! This module defines all error types used throughout the application.
//! Uses thiserror for ergonomic error definitions.

use thiserror::Error;

/// Top-level application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from configuration parsing/validation
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Error from domain type validation
    #[error("Domain validation error: {0}")]
    Domain(#[from] DomainError),

    /// Error from the reading ingest boundary
    #[error("Ingest error: {0}")]
    Ingest(#[from] IngestError),

    /// IO error (file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from domain type validation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Calendar month outside 1-12
    #[error("Invalid calendar month: {0} (must be 1-12)")]
    InvalidMonth(u32),

    /// Invalid value provided
    #[error("Invalid value: {0}")]
    InvalidValue(String),
}

/// Errors from the ingest boundary
///
/// Individual malformed records are dropped and counted, never surfaced as
/// errors. These variants cover whole-input failures only.
#[derive(Error, Debug)]
pub enum IngestError {
    /// The raw records input could not be read at all
    #[error("Unreadable readings input: {0}")]
    UnreadableInput(String),

    /// The raw records input is not a JSON array of records
    #[error("Readings input is not a record array: {0}")]
    MalformedInput(#[from] serde_json::Error),
}

/// Errors from configuration parsing and validation
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Failed to parse config file
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    /// Invalid config value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// TOML parsing error
    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_error_display() {
        let err = DomainError::InvalidMonth(13);
        assert_eq!(err.to_string(), "Invalid calendar month: 13 (must be 1-12)");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::FileNotFound("hivemon.toml".to_string());
        assert!(err.to_string().contains("hivemon.toml"));
    }

    #[test]
    fn test_error_conversion() {
        let domain_err = DomainError::InvalidMonth(0);
        let app_err: AppError = domain_err.into();
        assert!(matches!(app_err, AppError::Domain(_)));
    }

    #[test]
    fn test_ingest_error_display() {
        let err = IngestError::UnreadableInput("readings.json".to_string());
        assert!(err.to_string().contains("readings.json"));
    }
}
