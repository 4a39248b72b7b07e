//! Token issuer - mints and verifies access/refresh token pairs.
//!
//! Tokens are HS256-signed JWTs tagged with the signing key's `kid`, so
//! verification keeps working across key rotation for as long as the old
//! key stays published. Expiry is checked against the injected clock,
//! never against the process clock, so expiry behavior is deterministic
//! under test.

use std::sync::Arc;
use std::time::Duration;

use jsonwebtoken::{decode, decode_header, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::domain::foundation::Clock;
use crate::domain::session::Session;
use crate::ports::SigningKeyProvider;

use super::claims::{AccessClaims, RefreshTokenPayload, AUDIENCE_ACCESS, AUDIENCE_REFRESH, REFRESH_TOKEN_TYPE};
use super::pair::{AccessToken, RefreshToken, TokenPair};
use super::TokenError;

/// Default access token lifetime: 15 minutes.
pub const DEFAULT_ACCESS_TTL: Duration = Duration::from_secs(15 * 60);

/// Default refresh token lifetime: 30 days.
pub const DEFAULT_REFRESH_TTL: Duration = Duration::from_secs(30 * 24 * 60 * 60);

/// Mints and verifies token pairs. Stateless; persists nothing.
pub struct TokenIssuer {
    keys: Arc<dyn SigningKeyProvider>,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

impl TokenIssuer {
    pub fn new(keys: Arc<dyn SigningKeyProvider>, access_ttl: Duration, refresh_ttl: Duration) -> Self {
        Self {
            keys,
            access_ttl,
            refresh_ttl,
        }
    }

    /// Issuer with the default short/long expiries.
    pub fn with_defaults(keys: Arc<dyn SigningKeyProvider>) -> Self {
        Self::new(keys, DEFAULT_ACCESS_TTL, DEFAULT_REFRESH_TTL)
    }

    /// Builds a fresh token pair for a session.
    ///
    /// The access token embeds `{sub, sid, role}` with the short expiry;
    /// the refresh token embeds `{sid, sub, type: "refresh", ver}` with
    /// the long expiry. Both are signed with the provider's current key.
    pub fn issue_pair(&self, session: &Session, clock: &dyn Clock) -> Result<TokenPair, TokenError> {
        let now = clock.now();

        let access = AccessClaims {
            sub: session.user_id().clone(),
            sid: *session.id(),
            role: session.role(),
            aud: AUDIENCE_ACCESS.to_string(),
            iat: now.as_unix_secs(),
            exp: now.plus_secs(self.access_ttl.as_secs()).as_unix_secs(),
        };

        let refresh = RefreshTokenPayload {
            sid: *session.id(),
            sub: session.user_id().clone(),
            token_type: REFRESH_TOKEN_TYPE.to_string(),
            ver: *session.refresh_version(),
            aud: AUDIENCE_REFRESH.to_string(),
            iat: now.as_unix_secs(),
            exp: now.plus_secs(self.refresh_ttl.as_secs()).as_unix_secs(),
        };

        Ok(TokenPair {
            access_token: AccessToken::new(self.sign(&access)?),
            refresh_token: RefreshToken::new(self.sign(&refresh)?),
        })
    }

    /// Verifies an access token and returns its claims.
    ///
    /// # Errors
    ///
    /// - `TokenError::Malformed` if structurally invalid
    /// - `TokenError::InvalidSignature` / `UnknownKey` on integrity failure
    /// - `TokenError::TypeMismatch` if minted for another context
    /// - `TokenError::Expired` if past expiry per the injected clock
    pub fn verify_access(
        &self,
        token: &AccessToken,
        clock: &dyn Clock,
    ) -> Result<AccessClaims, TokenError> {
        let claims: AccessClaims = self.verify(token.as_str())?;
        if claims.aud != AUDIENCE_ACCESS {
            return Err(TokenError::type_mismatch(claims.aud));
        }
        self.check_expiry(claims.exp, clock)?;
        Ok(claims)
    }

    /// Verifies a refresh token and returns its payload.
    ///
    /// Same failure modes as [`Self::verify_access`], plus
    /// `TokenError::TypeMismatch` when the `type` discriminant is not the
    /// literal `"refresh"`.
    pub fn verify_refresh(
        &self,
        token: &RefreshToken,
        clock: &dyn Clock,
    ) -> Result<RefreshTokenPayload, TokenError> {
        let payload: RefreshTokenPayload = self.verify(token.as_str())?;
        if payload.aud != AUDIENCE_REFRESH {
            return Err(TokenError::type_mismatch(payload.aud));
        }
        if payload.token_type != REFRESH_TOKEN_TYPE {
            return Err(TokenError::type_mismatch(payload.token_type));
        }
        self.check_expiry(payload.exp, clock)?;
        Ok(payload)
    }

    fn sign<T: Serialize>(&self, claims: &T) -> Result<String, TokenError> {
        let key = self.keys.current();
        let mut header = Header::new(Algorithm::HS256);
        header.kid = Some(key.id.clone());

        let encoding_key = EncodingKey::from_secret(key.secret.expose_secret().as_bytes());
        encode(&header, claims, &encoding_key).map_err(|e| {
            tracing::debug!("Token encoding failed: {}", e);
            TokenError::Malformed
        })
    }

    /// Decodes and signature-checks a token, resolving the key by `kid`.
    /// Audience and expiry are checked by the callers; jsonwebtoken's own
    /// wall-clock expiry validation stays disabled.
    fn verify<T: DeserializeOwned>(&self, raw: &str) -> Result<T, TokenError> {
        let header = decode_header(raw).map_err(|e| {
            tracing::debug!("Failed to decode token header: {}", e);
            TokenError::Malformed
        })?;

        let kid = header.kid.ok_or(TokenError::Malformed)?;
        let key = self
            .keys
            .find(&kid)
            .ok_or_else(|| TokenError::UnknownKey(kid))?;

        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.required_spec_claims.clear();

        let decoding_key = DecodingKey::from_secret(key.secret.expose_secret().as_bytes());
        let data = decode::<T>(raw, &decoding_key, &validation).map_err(|e| {
            use jsonwebtoken::errors::ErrorKind;
            tracing::debug!("Token verification failed: {}", e);
            match e.kind() {
                ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                _ => TokenError::Malformed,
            }
        })?;

        Ok(data.claims)
    }

    fn check_expiry(&self, exp: u64, clock: &dyn Clock) -> Result<(), TokenError> {
        if clock.now().as_unix_secs() >= exp {
            return Err(TokenError::Expired);
        }
        Ok(())
    }
}
