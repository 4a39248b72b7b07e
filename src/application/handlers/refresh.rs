//! RefreshHandler - rotates a refresh token into a new token pair.
//!
//! The central correctness property: concurrent refreshes with the same
//! refresh token resolve to exactly one success, everyone else fails with
//! `token_already_used`. Mutual exclusion is per refresh token (the
//! version CAS), not per session.
//!
//! The rotation commits through a single store primitive that checks
//! status and version and writes the extended session in one step, so a
//! revocation landing between the handler's read and its commit makes the
//! commit fail instead of being overwritten.

use std::sync::Arc;
use std::time::Duration;

use crate::domain::foundation::Clock;
use crate::domain::session::{Session, SessionError};
use crate::domain::token::{RefreshToken, TokenIssuer, TokenPair};
use crate::ports::SessionStore;

/// Result of a successful rotation: the extended session and a fresh
/// pair. The presented refresh token is invalid from this point on.
#[derive(Debug, Clone)]
pub struct RefreshResult {
    pub session: Session,
    pub tokens: TokenPair,
}

/// Handler for refresh-token rotation.
pub struct RefreshHandler {
    store: Arc<dyn SessionStore>,
    issuer: Arc<TokenIssuer>,
    clock: Arc<dyn Clock>,
    session_ttl: Duration,
    revoke_on_replay: bool,
}

impl RefreshHandler {
    pub fn new(
        store: Arc<dyn SessionStore>,
        issuer: Arc<TokenIssuer>,
        clock: Arc<dyn Clock>,
        session_ttl: Duration,
        revoke_on_replay: bool,
    ) -> Self {
        Self {
            store,
            issuer,
            clock,
            session_ttl,
            revoke_on_replay,
        }
    }

    pub async fn handle(&self, token: &RefreshToken) -> Result<RefreshResult, SessionError> {
        let payload = self.issuer.verify_refresh(token, &*self.clock)?;

        let mut session = self
            .store
            .get(&payload.sid)
            .await?
            .ok_or(SessionError::NotFound(payload.sid))?;

        // A stale version means this token was already consumed. Checked
        // before liveness so a replay reports as a replay regardless of
        // how much time has passed since the first use.
        if *session.refresh_version() != payload.ver {
            return self.replay_detected(&session).await;
        }

        if !session.status().is_active() {
            return Err(SessionError::Revoked);
        }

        let expected = payload.ver;
        session.extend(&*self.clock, self.session_ttl)?;

        let swapped = self
            .store
            .compare_and_swap_refresh_version(&session, expected)
            .await?;
        if !swapped {
            // Lost the race. Re-read to tell a concurrent rotation (new
            // version: replay) apart from a concurrent revocation.
            return match self.store.get(&payload.sid).await? {
                Some(current) if *current.refresh_version() != expected => {
                    self.replay_detected(&current).await
                }
                Some(_) => Err(SessionError::Revoked),
                None => Err(SessionError::NotFound(payload.sid)),
            };
        }

        let tokens = self.issuer.issue_pair(&session, &*self.clock)?;

        tracing::debug!(session_id = %session.id(), "refresh token rotated");
        Ok(RefreshResult { session, tokens })
    }

    /// Replay is a security event: the token holder may not be the
    /// session owner anymore. The session is optionally force-revoked as
    /// a precaution against token theft, through the store's atomic
    /// primitive so the revocation cannot lose a race with the winning
    /// rotation's commit.
    async fn replay_detected(&self, session: &Session) -> Result<RefreshResult, SessionError> {
        tracing::warn!(
            session_id = %session.id(),
            user_id = %session.user_id(),
            "refresh token replay detected"
        );

        if self.revoke_on_replay {
            self.store.mark_revoked(session.id()).await?;
            tracing::warn!(session_id = %session.id(), "session revoked after replay");
        }

        Err(SessionError::TokenAlreadyUsed)
    }
}
