//! Session store port.
//!
//! Defines the contract for persisting and retrieving Session aggregates,
//! and the atomic primitives backing refresh-token rotation and
//! revocation.
//!
//! # Atomicity contract
//!
//! `compare_and_swap_refresh_version` is the single commit point of a
//! rotation: it checks the stored status and version and writes the
//! extended session in one indivisible step, so a crash mid-refresh never
//! leaves an extended session paired with a still-valid old refresh
//! token, nor an invalidated token with no extension. Given N concurrent
//! swaps with the same expected version, exactly one succeeds. The check
//! includes status: a session revoked between a caller's read and its
//! swap makes the swap fail rather than let the write resurrect it.
//!
//! `mark_revoked` must likewise commit in one step so it can never be
//! interleaved around by a concurrent rotation's read-then-write.
//!
//! # Timeouts
//!
//! Implementations are expected to bound every call with a deadline and
//! surface overruns as [`StoreError::Timeout`]. The core never retries;
//! retry policy belongs to the caller.

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::foundation::{ErrorCode, SessionId};
use crate::domain::session::Session;

/// Infrastructure failures from the session store.
///
/// Distinct from domain errors: a timeout must never be interpreted as
/// "session not found".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Session store timed out: {0}")]
    Timeout(String),

    #[error("Session store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    pub fn timeout(message: impl Into<String>) -> Self {
        StoreError::Timeout(message.into())
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        StoreError::Unavailable(message.into())
    }

    /// Stable code discriminant for the wire.
    pub fn code(&self) -> ErrorCode {
        match self {
            StoreError::Timeout(_) => ErrorCode::StoreTimeout,
            StoreError::Unavailable(_) => ErrorCode::StoreUnavailable,
        }
    }
}

/// Port for Session aggregate persistence.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Fetch a session by id. Returns `None` if no row exists.
    async fn get(&self, id: &SessionId) -> Result<Option<Session>, StoreError>;

    /// Insert or replace a session.
    async fn put(&self, session: &Session) -> Result<(), StoreError>;

    /// Remove a session. Removing a missing session is a no-op.
    async fn delete(&self, id: &SessionId) -> Result<(), StoreError>;

    /// Atomically commit a rotation: replace the stored session with
    /// `session` iff the stored row exists, is Active, and its refresh
    /// version equals `expected`. Returns `false` when any of those
    /// checks fails (another rotation won, the session was revoked or
    /// deleted); the store is left unchanged in that case.
    async fn compare_and_swap_refresh_version(
        &self,
        session: &Session,
        expected: Uuid,
    ) -> Result<bool, StoreError>;

    /// Atomically mark a session Revoked. Idempotent: revoking an
    /// already-revoked or missing session is a no-op success.
    async fn mark_revoked(&self, id: &SessionId) -> Result<(), StoreError>;
}
