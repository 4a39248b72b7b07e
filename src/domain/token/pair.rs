//! Encoded token material.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Short-lived, self-contained signed credential for per-request
/// authorization. Never persisted server-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(encoded: impl Into<String>) -> Self {
        Self(encoded.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Long-lived, single-use credential for obtaining a new token pair.
/// Consumed by a successful rotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RefreshToken(String);

impl RefreshToken {
    pub fn new(encoded: impl Into<String>) -> Self {
        Self(encoded.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// An access/refresh pair, always produced atomically. A rotation is the
/// only operation that replaces one without re-authentication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: AccessToken,
    pub refresh_token: RefreshToken,
}

// Token material is a credential; display only a prefix. Truncation is
// per character, not per byte, since nothing constrains the wrapped
// string to ASCII.
fn fmt_truncated(encoded: &str, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for c in encoded.chars().take(12) {
        fmt::Write::write_char(f, c)?;
    }
    f.write_str("...")
}

impl fmt::Display for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_truncated(&self.0, f)
    }
}

impl fmt::Display for RefreshToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_truncated(&self.0, f)
    }
}
