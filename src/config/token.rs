//! Token issuance configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::time::Duration;

use super::environment::Environment;
use super::error::ValidationError;

/// Minimum signing key length required in production, in bytes.
const MIN_PRODUCTION_KEY_BYTES: usize = 32;

/// Token issuer configuration (signing key and expiries)
#[derive(Debug, Clone, Deserialize)]
pub struct TokenConfig {
    /// HMAC signing key material
    pub signing_key: SecretString,

    /// Identifier stamped into token headers for key-rotation tolerance
    #[serde(default = "default_key_id")]
    pub key_id: String,

    /// Access token TTL in seconds (short-lived)
    #[serde(default = "default_access_ttl_secs")]
    pub access_ttl_secs: u64,

    /// Refresh token TTL in days (long-lived)
    #[serde(default = "default_refresh_ttl_days")]
    pub refresh_ttl_days: u64,
}

impl TokenConfig {
    /// Get the access token TTL as a Duration
    pub fn access_ttl(&self) -> Duration {
        Duration::from_secs(self.access_ttl_secs)
    }

    /// Get the refresh token TTL as a Duration
    pub fn refresh_ttl(&self) -> Duration {
        Duration::from_secs(self.refresh_ttl_days * 24 * 60 * 60)
    }

    /// Validate token configuration
    ///
    /// In production, requires a signing key of at least 32 bytes.
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        if self.signing_key.expose_secret().is_empty() {
            return Err(ValidationError::MissingRequired("GATEHOUSE__TOKEN__SIGNING_KEY"));
        }
        if environment.is_production()
            && self.signing_key.expose_secret().len() < MIN_PRODUCTION_KEY_BYTES
        {
            return Err(ValidationError::SigningKeyTooShort);
        }
        if self.access_ttl_secs == 0 || self.refresh_ttl_days == 0 {
            return Err(ValidationError::InvalidTokenTtl);
        }
        if self.access_ttl() >= self.refresh_ttl() {
            return Err(ValidationError::AccessTtlNotShorter);
        }
        Ok(())
    }
}

fn default_key_id() -> String {
    "primary".to_string()
}

fn default_access_ttl_secs() -> u64 {
    900
}

fn default_refresh_ttl_days() -> u64 {
    30
}
