//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment
//! variables using the `config` and `dotenvy` crates. Configuration is
//! loaded with the `GATEHOUSE` prefix and nested values use double
//! underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use gatehouse::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod environment;
mod error;
mod session;
mod token;

pub use environment::Environment;
pub use error::{ConfigError, ValidationError};
pub use session::SessionConfig;
pub use token::TokenConfig;

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Deployment environment
    #[serde(default)]
    pub environment: Environment,

    /// Session lifecycle configuration
    #[serde(default)]
    pub session: SessionConfig,

    /// Token issuance configuration (signing key is required)
    pub token: TokenConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with the `GATEHOUSE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `GATEHOUSE__TOKEN__SIGNING_KEY=...` -> `token.signing_key = ...`
    /// - `GATEHOUSE__SESSION__TTL_MINUTES=45` -> `session.ttl_minutes = 45`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or values
    /// cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("GATEHOUSE")
                    .separator("__"),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Validate all configuration sections
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.session.validate()?;
        self.token.validate(&self.environment)?;
        Ok(())
    }
}
