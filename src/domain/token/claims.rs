//! Token claim shapes.
//!
//! Access and refresh tokens carry disjoint `aud` values so one category
//! can never verify in the other's context. Refresh tokens additionally
//! carry a `type` discriminant that must equal the literal `"refresh"`.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::foundation::{Role, SessionId, UserId};

/// Audience for access tokens.
pub const AUDIENCE_ACCESS: &str = "gatehouse/access";

/// Audience for refresh tokens.
pub const AUDIENCE_REFRESH: &str = "gatehouse/refresh";

/// Required value of the refresh token's `type` discriminant. Any other
/// value is a forged or mistyped token.
pub const REFRESH_TOKEN_TYPE: &str = "refresh";

/// Claims embedded in an access token; sufficient for stateless
/// authorization checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessClaims {
    /// Owning user.
    pub sub: UserId,

    /// Session this token was minted for.
    pub sid: SessionId,

    /// Role granted at login.
    pub role: Role,

    /// Verification context; always [`AUDIENCE_ACCESS`].
    pub aud: String,

    /// Issued-at, Unix seconds.
    pub iat: u64,

    /// Expiry, Unix seconds. Checked against the injected clock.
    pub exp: u64,
}

/// Plaintext claims embedded in a refresh token before signing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshTokenPayload {
    /// Session this token rotates.
    pub sid: SessionId,

    /// Owning user.
    pub sub: UserId,

    /// Type discriminant; must equal [`REFRESH_TOKEN_TYPE`].
    #[serde(rename = "type")]
    pub token_type: String,

    /// Version nonce for single-use enforcement. Matches the session's
    /// `refresh_version` until the token is consumed.
    pub ver: Uuid,

    /// Verification context; always [`AUDIENCE_REFRESH`].
    pub aud: String,

    /// Issued-at, Unix seconds.
    pub iat: u64,

    /// Expiry, Unix seconds. Checked against the injected clock.
    pub exp: u64,
}
