//! Core error types

use thiserror::Error;

/// Result type alias for thalia-ops
pub type Result<T> = std::result::Result<T, OpsError>;

/// Main error type for thalia-ops
#[derive(Error, Debug)]
pub enum OpsError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP client errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Notification delivery errors
    #[error("Notification error: {0}")]
    Notification(String),

    /// Logging setup errors
    #[error("Logging error: {0}")]
    Logging(String),
}
