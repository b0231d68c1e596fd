//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid bind address: {0}")]
    InvalidBindAddress(String),

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("CORS origin must start with http:// or https://: {0}")]
    InvalidCorsOrigin(String),

    #[error("Roster size must be between 1 and {max}")]
    InvalidRosterSize { max: usize },

    #[error("Chat page size must be between 1 and the retention")]
    InvalidChatWindow,

    #[error("Invalid cover art base URL: {0}")]
    InvalidCoverArtUrl(String),

    #[error("Cover art lookup timeout must be between 1 and 60 seconds")]
    InvalidCoverArtTimeout,
}
