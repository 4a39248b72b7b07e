//! LoginHandler - creates a session and its first token pair.

use std::sync::Arc;
use std::time::Duration;

use crate::domain::foundation::{Clock, Role, SessionId, UserId};
use crate::domain::session::{Session, SessionError};
use crate::domain::token::{TokenIssuer, TokenPair};
use crate::ports::SessionStore;

/// Command to open a session after successful authentication.
#[derive(Debug, Clone)]
pub struct LoginCommand {
    pub user_id: UserId,
    pub role: Role,
}

/// Result of a successful login: a session and its matching token pair,
/// never one without the other.
#[derive(Debug, Clone)]
pub struct LoginResult {
    pub session: Session,
    pub tokens: TokenPair,
}

/// Handler for opening sessions.
pub struct LoginHandler {
    store: Arc<dyn SessionStore>,
    issuer: Arc<TokenIssuer>,
    clock: Arc<dyn Clock>,
    session_ttl: Duration,
}

impl LoginHandler {
    pub fn new(
        store: Arc<dyn SessionStore>,
        issuer: Arc<TokenIssuer>,
        clock: Arc<dyn Clock>,
        session_ttl: Duration,
    ) -> Self {
        Self {
            store,
            issuer,
            clock,
            session_ttl,
        }
    }

    pub async fn handle(&self, cmd: LoginCommand) -> Result<LoginResult, SessionError> {
        let session = Session::new(
            SessionId::new(),
            cmd.user_id,
            cmd.role,
            &*self.clock,
            self.session_ttl,
        )?;

        // Mint before persisting so a caller never observes a stored
        // session without a token pair.
        let tokens = self.issuer.issue_pair(&session, &*self.clock)?;
        self.store.put(&session).await?;

        tracing::info!(session_id = %session.id(), user_id = %session.user_id(), "session created");
        Ok(LoginResult { session, tokens })
    }
}
