//! ValidateAccessHandler - per-request access token validation.
//!
//! Verifies the token cryptographically, then looks the session up so
//! revocation takes effect immediately rather than after an
//! access-token-lifetime propagation delay.

use std::sync::Arc;

use crate::domain::foundation::Clock;
use crate::domain::session::SessionError;
use crate::domain::token::{AccessClaims, AccessToken, TokenIssuer};
use crate::ports::SessionStore;

/// Handler for access-token validation.
pub struct ValidateAccessHandler {
    store: Arc<dyn SessionStore>,
    issuer: Arc<TokenIssuer>,
    clock: Arc<dyn Clock>,
}

impl ValidateAccessHandler {
    pub fn new(store: Arc<dyn SessionStore>, issuer: Arc<TokenIssuer>, clock: Arc<dyn Clock>) -> Self {
        Self {
            store,
            issuer,
            clock,
        }
    }

    pub async fn handle(&self, token: &AccessToken) -> Result<AccessClaims, SessionError> {
        let claims = self.issuer.verify_access(token, &*self.clock)?;

        // A deleted row is a revocation: deletion is one of the two ways
        // a session is destroyed.
        let session = self
            .store
            .get(&claims.sid)
            .await?
            .ok_or(SessionError::Revoked)?;

        if !session.status().is_active() {
            return Err(SessionError::Revoked);
        }
        if !session.is_live(&*self.clock) {
            return Err(SessionError::Expired);
        }

        Ok(claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{InMemorySessionStore, StaticKeyProvider};
    use crate::application::handlers::{LoginCommand, LoginHandler, LoginResult, RevokeHandler};
    use crate::domain::foundation::{ErrorCode, ManualClock, Role, UserId};
    use crate::domain::token::TokenError;
    use crate::ports::{SigningKey, StoreError};
    use std::time::Duration;

    struct Fixture {
        store: Arc<InMemorySessionStore>,
        issuer: Arc<TokenIssuer>,
        clock: Arc<ManualClock>,
    }

    impl Fixture {
        fn new() -> Self {
            let keys = Arc::new(StaticKeyProvider::new(SigningKey::new(
                "k1",
                "0123456789abcdef0123456789abcdef",
            )));
            Self {
                store: Arc::new(InMemorySessionStore::new()),
                issuer: Arc::new(TokenIssuer::with_defaults(keys)),
                clock: Arc::new(ManualClock::at_unix_secs(1_000_000)),
            }
        }

        async fn login(&self) -> LoginResult {
            LoginHandler::new(
                self.store.clone(),
                self.issuer.clone(),
                self.clock.clone(),
                Duration::from_secs(30 * 60),
            )
            .handle(LoginCommand {
                user_id: UserId::new("user-42").unwrap(),
                role: Role::Admin,
            })
            .await
            .unwrap()
        }

        fn handler(&self) -> ValidateAccessHandler {
            ValidateAccessHandler::new(self.store.clone(), self.issuer.clone(), self.clock.clone())
        }
    }

    #[tokio::test]
    async fn valid_token_yields_its_claims() {
        let fx = Fixture::new();
        let login = fx.login().await;

        let claims = fx
            .handler()
            .handle(&login.tokens.access_token)
            .await
            .unwrap();

        assert_eq!(&claims.sid, login.session.id());
        assert_eq!(&claims.sub, login.session.user_id());
        assert_eq!(claims.role, Role::Admin);
    }

    #[tokio::test]
    async fn expired_token_fails_token_expired() {
        let fx = Fixture::new();
        let login = fx.login().await;

        fx.clock.advance_minutes(16);
        let err = fx
            .handler()
            .handle(&login.tokens.access_token)
            .await
            .unwrap_err();
        assert_eq!(err, SessionError::Token(TokenError::Expired));
    }

    #[tokio::test]
    async fn revoked_session_fails_immediately() {
        let fx = Fixture::new();
        let login = fx.login().await;

        RevokeHandler::new(fx.store.clone())
            .handle(login.session.id())
            .await
            .unwrap();

        let err = fx
            .handler()
            .handle(&login.tokens.access_token)
            .await
            .unwrap_err();
        assert_eq!(err, SessionError::Revoked);
    }

    #[tokio::test]
    async fn deleted_session_counts_as_revoked() {
        let fx = Fixture::new();
        let login = fx.login().await;

        fx.store.delete(login.session.id()).await.unwrap();
        let err = fx
            .handler()
            .handle(&login.tokens.access_token)
            .await
            .unwrap_err();
        assert_eq!(err, SessionError::Revoked);
    }

    #[tokio::test]
    async fn garbage_token_fails_malformed() {
        let fx = Fixture::new();
        let err = fx
            .handler()
            .handle(&AccessToken::new("garbage"))
            .await
            .unwrap_err();
        assert_eq!(err, SessionError::Token(TokenError::Malformed));
    }

    #[tokio::test]
    async fn store_timeout_surfaces_as_infrastructure() {
        let fx = Fixture::new();
        let login = fx.login().await;

        fx.store.fail_with(StoreError::timeout("deadline exceeded"));
        let err = fx
            .handler()
            .handle(&login.tokens.access_token)
            .await
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::StoreTimeout);
    }
}
