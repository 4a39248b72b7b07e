//! In-memory session store.
//!
//! Backs tests and single-process deployments. All mutations for a call
//! happen under one write lock, which satisfies the port's atomicity
//! contract trivially.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::foundation::SessionId;
use crate::domain::session::Session;
use crate::ports::{SessionStore, StoreError};

/// Session store over a `HashMap`.
///
/// Carries a failure-injection toggle so handler tests can exercise the
/// infrastructure-error paths without a real store.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<SessionId, Session>>,
    fail_with: std::sync::RwLock<Option<StoreError>>,
}

impl InMemorySessionStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent call return the given error.
    pub fn fail_with(&self, error: StoreError) {
        *self.fail_with.write().unwrap() = Some(error);
    }

    /// Clears the injected failure and returns to normal operation.
    pub fn clear_failure(&self) {
        *self.fail_with.write().unwrap() = None;
    }

    /// Returns the number of stored sessions.
    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }

    fn check_failure(&self) -> Result<(), StoreError> {
        match &*self.fail_with.read().unwrap() {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn get(&self, id: &SessionId) -> Result<Option<Session>, StoreError> {
        self.check_failure()?;
        Ok(self.sessions.read().await.get(id).cloned())
    }

    async fn put(&self, session: &Session) -> Result<(), StoreError> {
        self.check_failure()?;
        self.sessions
            .write()
            .await
            .insert(*session.id(), session.clone());
        Ok(())
    }

    async fn delete(&self, id: &SessionId) -> Result<(), StoreError> {
        self.check_failure()?;
        self.sessions.write().await.remove(id);
        Ok(())
    }

    async fn compare_and_swap_refresh_version(
        &self,
        session: &Session,
        expected: Uuid,
    ) -> Result<bool, StoreError> {
        self.check_failure()?;
        let mut sessions = self.sessions.write().await;
        match sessions.get(session.id()) {
            Some(stored)
                if stored.status().is_active() && *stored.refresh_version() == expected =>
            {
                sessions.insert(*session.id(), session.clone());
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn mark_revoked(&self, id: &SessionId) -> Result<(), StoreError> {
        self.check_failure()?;
        if let Some(stored) = self.sessions.write().await.get_mut(id) {
            stored.revoke();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{Clock, ManualClock, Role, UserId};
    use crate::domain::session::SessionStatus;
    use std::sync::Arc;
    use std::time::Duration;

    fn test_session(clock: &dyn Clock) -> Session {
        Session::new(
            SessionId::new(),
            UserId::new("user-1").unwrap(),
            Role::Member,
            clock,
            Duration::from_secs(1800),
        )
        .unwrap()
    }

    fn rotated(session: &Session, clock: &dyn Clock) -> Session {
        let mut updated = session.clone();
        updated.extend(clock, Duration::from_secs(1800)).unwrap();
        updated
    }

    #[tokio::test]
    async fn put_then_get_roundtrips() {
        let clock = ManualClock::at_unix_secs(0);
        let store = InMemorySessionStore::new();
        let session = test_session(&clock);

        store.put(&session).await.unwrap();
        let found = store.get(session.id()).await.unwrap();
        assert_eq!(found, Some(session));
    }

    #[tokio::test]
    async fn get_missing_returns_none() {
        let store = InMemorySessionStore::new();
        assert_eq!(store.get(&SessionId::new()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn delete_removes_session_and_is_idempotent() {
        let clock = ManualClock::at_unix_secs(0);
        let store = InMemorySessionStore::new();
        let session = test_session(&clock);

        store.put(&session).await.unwrap();
        store.delete(session.id()).await.unwrap();
        store.delete(session.id()).await.unwrap();
        assert_eq!(store.session_count().await, 0);
    }

    #[tokio::test]
    async fn cas_commits_the_rotated_session_once_per_version() {
        let clock = ManualClock::at_unix_secs(0);
        let store = InMemorySessionStore::new();
        let session = test_session(&clock);
        let old = *session.refresh_version();
        store.put(&session).await.unwrap();

        let updated = rotated(&session, &clock);
        assert!(store
            .compare_and_swap_refresh_version(&updated, old)
            .await
            .unwrap());

        let stored = store.get(session.id()).await.unwrap().unwrap();
        assert_eq!(stored, updated);

        // Second swap with the stale expected version loses and leaves the
        // store untouched.
        assert!(!store
            .compare_and_swap_refresh_version(&rotated(&session, &clock), old)
            .await
            .unwrap());
        assert_eq!(store.get(session.id()).await.unwrap(), Some(updated));
    }

    #[tokio::test]
    async fn cas_on_missing_session_returns_false() {
        let clock = ManualClock::at_unix_secs(0);
        let store = InMemorySessionStore::new();
        let session = test_session(&clock);
        let old = *session.refresh_version();

        let swapped = store
            .compare_and_swap_refresh_version(&rotated(&session, &clock), old)
            .await
            .unwrap();
        assert!(!swapped);
    }

    #[tokio::test]
    async fn cas_on_revoked_session_returns_false() {
        let clock = ManualClock::at_unix_secs(0);
        let store = InMemorySessionStore::new();
        let session = test_session(&clock);
        let old = *session.refresh_version();
        store.put(&session).await.unwrap();

        // Revocation lands between a caller's read and its swap; the swap
        // must not write the Active copy back.
        store.mark_revoked(session.id()).await.unwrap();
        let swapped = store
            .compare_and_swap_refresh_version(&rotated(&session, &clock), old)
            .await
            .unwrap();

        assert!(!swapped);
        let stored = store.get(session.id()).await.unwrap().unwrap();
        assert_eq!(stored.status(), SessionStatus::Revoked);
    }

    #[tokio::test]
    async fn concurrent_cas_with_same_expected_version_has_one_winner() {
        let clock = ManualClock::at_unix_secs(0);
        let store = Arc::new(InMemorySessionStore::new());
        let session = test_session(&clock);
        let old = *session.refresh_version();
        store.put(&session).await.unwrap();

        let mut tasks = Vec::new();
        for _ in 0..8 {
            let store = store.clone();
            let updated = rotated(&session, &clock);
            tasks.push(tokio::spawn(async move {
                store
                    .compare_and_swap_refresh_version(&updated, old)
                    .await
                    .unwrap()
            }));
        }

        let mut wins = 0;
        for task in tasks {
            if task.await.unwrap() {
                wins += 1;
            }
        }
        assert_eq!(wins, 1);
    }

    #[tokio::test]
    async fn mark_revoked_flips_status_and_is_idempotent() {
        let clock = ManualClock::at_unix_secs(0);
        let store = InMemorySessionStore::new();
        let session = test_session(&clock);
        store.put(&session).await.unwrap();

        store.mark_revoked(session.id()).await.unwrap();
        store.mark_revoked(session.id()).await.unwrap();

        let stored = store.get(session.id()).await.unwrap().unwrap();
        assert_eq!(stored.status(), SessionStatus::Revoked);
    }

    #[tokio::test]
    async fn mark_revoked_on_missing_session_is_a_no_op() {
        let store = InMemorySessionStore::new();
        store.mark_revoked(&SessionId::new()).await.unwrap();
        assert_eq!(store.session_count().await, 0);
    }

    #[tokio::test]
    async fn injected_failure_surfaces_on_every_call() {
        let clock = ManualClock::at_unix_secs(0);
        let store = InMemorySessionStore::new();
        let session = test_session(&clock);

        store.fail_with(StoreError::timeout("deadline exceeded"));
        assert!(store.get(session.id()).await.is_err());
        assert!(store.put(&session).await.is_err());
        assert!(store.mark_revoked(session.id()).await.is_err());

        store.clear_failure();
        assert!(store.put(&session).await.is_ok());
    }
}
