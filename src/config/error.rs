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
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Session TTL must be positive")]
    InvalidSessionTtl,

    #[error("Token TTL must be positive")]
    InvalidTokenTtl,

    #[error("Access token TTL must be shorter than refresh token TTL")]
    AccessTtlNotShorter,

    #[error("Signing key must be at least 32 bytes in production")]
    SigningKeyTooShort,
}
