//! Session aggregate entity.
//!
//! A session binds a user to a time-bounded authenticated context. The
//! aggregate owns the expiry and revocation rules; token material is
//! minted from it by the token issuer but never stored on it.
//!
//! # Invariants
//!
//! - `expires_at > created_at` at all times
//! - `id` and `user_id` never change after creation
//! - a session is live iff it is Active and `now < expires_at`
//! - `refresh_version` changes on every extension, never otherwise

use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

use crate::domain::foundation::{
    Clock, DomainError, Role, SessionId, StateMachine, Timestamp, UserId,
};

use super::SessionStatus;

/// Session aggregate - a user's authenticated context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Unique identifier for this session.
    id: SessionId,

    /// User who owns this session. Immutable.
    user_id: UserId,

    /// Role granted at login, embedded in issued access tokens.
    role: Role,

    /// Current stored status (Active or Revoked).
    status: SessionStatus,

    /// Single-use nonce backing refresh-token replay detection.
    /// Rotated on every successful extension.
    refresh_version: Uuid,

    /// When the session was created.
    created_at: Timestamp,

    /// When the session expires.
    expires_at: Timestamp,
}

impl Session {
    /// Create a new active session expiring `ttl` after the clock's now.
    ///
    /// # Errors
    ///
    /// - `validation_failed` if `ttl` is zero, which would violate
    ///   `expires_at > created_at`
    pub fn new(
        id: SessionId,
        user_id: UserId,
        role: Role,
        clock: &dyn Clock,
        ttl: Duration,
    ) -> Result<Self, DomainError> {
        if ttl.is_zero() {
            return Err(DomainError::validation_failed(
                "Session TTL must be positive",
            ));
        }

        let created_at = clock.now();
        Ok(Self {
            id,
            user_id,
            role,
            status: SessionStatus::Active,
            refresh_version: Uuid::new_v4(),
            created_at,
            expires_at: created_at.plus_secs(ttl.as_secs()),
        })
    }

    /// Reconstitute a session from persistence (no validation).
    pub fn reconstitute(
        id: SessionId,
        user_id: UserId,
        role: Role,
        status: SessionStatus,
        refresh_version: Uuid,
        created_at: Timestamp,
        expires_at: Timestamp,
    ) -> Self {
        Self {
            id,
            user_id,
            role,
            status,
            refresh_version,
            created_at,
            expires_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the session ID.
    pub fn id(&self) -> &SessionId {
        &self.id
    }

    /// Returns the owner's user ID.
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Returns the role granted at login.
    pub fn role(&self) -> Role {
        self.role
    }

    /// Returns the current stored status.
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// Returns the current refresh-token version nonce.
    pub fn refresh_version(&self) -> &Uuid {
        &self.refresh_version
    }

    /// Returns when the session was created.
    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Returns when the session expires.
    pub fn expires_at(&self) -> &Timestamp {
        &self.expires_at
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Lifecycle
    // ─────────────────────────────────────────────────────────────────────────

    /// A session is live iff it is Active and its expiry has not passed.
    ///
    /// Expiry is derived from the clock, never stored; a session crosses
    /// into Expired simply by time passing.
    pub fn is_live(&self, clock: &dyn Clock) -> bool {
        self.status.is_active() && clock.now().is_before(&self.expires_at)
    }

    /// Extend the session: `expires_at = now + ttl`, fresh refresh version.
    ///
    /// Identity fields are preserved unchanged. Expired sessions are never
    /// silently resurrected.
    ///
    /// # Errors
    ///
    /// - `session_revoked` if the session was revoked
    /// - `session_expired` if the expiry has already passed
    pub fn extend(&mut self, clock: &dyn Clock, ttl: Duration) -> Result<(), DomainError> {
        if !self.status.is_active() {
            return Err(DomainError::session_revoked(
                "Cannot extend a revoked session",
            ));
        }

        let now = clock.now();
        if !now.is_before(&self.expires_at) {
            return Err(DomainError::session_expired(
                "Cannot extend an expired session",
            ));
        }

        self.expires_at = now.plus_secs(ttl.as_secs());
        self.refresh_version = Uuid::new_v4();
        Ok(())
    }

    /// Revoke the session. Idempotent: revoking an already-revoked session
    /// is a no-op.
    pub fn revoke(&mut self) {
        if self.status.can_transition_to(&SessionStatus::Revoked) {
            self.status = SessionStatus::Revoked;
        }
    }
}
