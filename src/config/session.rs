//! Session lifecycle configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Session configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// Session TTL in minutes; applied at login and on every refresh
    #[serde(default = "default_ttl_minutes")]
    pub ttl_minutes: u64,

    /// Force-revoke a session when one of its refresh tokens is replayed
    #[serde(default = "default_revoke_on_replay")]
    pub revoke_on_replay: bool,
}

impl SessionConfig {
    /// Get the session TTL as a Duration
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_minutes * 60)
    }

    /// Validate session configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.ttl_minutes == 0 {
            return Err(ValidationError::InvalidSessionTtl);
        }
        Ok(())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            ttl_minutes: default_ttl_minutes(),
            revoke_on_replay: default_revoke_on_replay(),
        }
    }
}

fn default_ttl_minutes() -> u64 {
    30
}

fn default_revoke_on_replay() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_config_defaults() {
        let config = SessionConfig::default();
        assert_eq!(config.ttl_minutes, 30);
        assert!(config.revoke_on_replay);
    }

    #[test]
    fn test_ttl_duration() {
        let config = SessionConfig {
            ttl_minutes: 45,
            ..Default::default()
        };
        assert_eq!(config.ttl(), Duration::from_secs(45 * 60));
    }

    #[test]
    fn test_validation_rejects_zero_ttl() {
        let config = SessionConfig {
            ttl_minutes: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidSessionTtl));
    }
}
