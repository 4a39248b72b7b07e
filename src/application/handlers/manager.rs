//! SessionLifecycleManager - the crate's public surface.
//!
//! One facade over the four lifecycle operations. Everything else
//! (identifiers, errors, tokens) flows through their inputs and outputs.

use std::sync::Arc;

use crate::config::SessionConfig;
use crate::domain::foundation::{Clock, SessionId};
use crate::domain::session::SessionError;
use crate::domain::token::{AccessClaims, AccessToken, RefreshToken, TokenIssuer};
use crate::ports::SessionStore;

use super::{LoginCommand, LoginHandler, LoginResult, RefreshHandler, RefreshResult, RevokeHandler, ValidateAccessHandler};

/// Orchestrates session creation, rotation, revocation, and validation.
///
/// Stateless compute over the session store; safe to share behind an
/// `Arc` and call concurrently.
pub struct SessionLifecycleManager {
    login: LoginHandler,
    refresh: RefreshHandler,
    revoke: RevokeHandler,
    validate: ValidateAccessHandler,
}

impl SessionLifecycleManager {
    pub fn new(
        store: Arc<dyn SessionStore>,
        issuer: Arc<TokenIssuer>,
        clock: Arc<dyn Clock>,
        config: &SessionConfig,
    ) -> Self {
        Self {
            login: LoginHandler::new(
                store.clone(),
                issuer.clone(),
                clock.clone(),
                config.ttl(),
            ),
            refresh: RefreshHandler::new(
                store.clone(),
                issuer.clone(),
                clock.clone(),
                config.ttl(),
                config.revoke_on_replay,
            ),
            revoke: RevokeHandler::new(store.clone()),
            validate: ValidateAccessHandler::new(store, issuer, clock),
        }
    }

    /// Opens a session for an authenticated user and mints its first
    /// token pair.
    pub async fn login(&self, cmd: LoginCommand) -> Result<LoginResult, SessionError> {
        self.login.handle(cmd).await
    }

    /// Exchanges a valid refresh token for a new pair, invalidating the
    /// presented token.
    pub async fn refresh(&self, token: &RefreshToken) -> Result<RefreshResult, SessionError> {
        self.refresh.handle(token).await
    }

    /// Revokes a session. Idempotent.
    pub async fn revoke(&self, id: &SessionId) -> Result<(), SessionError> {
        self.revoke.handle(id).await
    }

    /// Validates an access token for a request, including the revocation
    /// lookup.
    pub async fn validate_access(&self, token: &AccessToken) -> Result<AccessClaims, SessionError> {
        self.validate.handle(token).await
    }
}
