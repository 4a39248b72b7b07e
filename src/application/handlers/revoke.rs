//! RevokeHandler - marks a session revoked.
//!
//! Idempotent by contract: revoking an already-revoked or nonexistent
//! session is a no-op success, so a logout racing another logout can
//! never produce a false failure. The write goes through the store's
//! atomic mark-revoked primitive, never a read-modify-write, so it
//! cannot be overwritten by a concurrent rotation.

use std::sync::Arc;

use crate::domain::foundation::SessionId;
use crate::domain::session::SessionError;
use crate::ports::SessionStore;

/// Handler for session revocation.
pub struct RevokeHandler {
    store: Arc<dyn SessionStore>,
}

impl RevokeHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, id: &SessionId) -> Result<(), SessionError> {
        self.store.mark_revoked(id).await?;
        tracing::info!(session_id = %id, "session revoked");
        Ok(())
    }
}
