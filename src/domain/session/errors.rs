//! Session-specific error types.
//!
//! Infrastructure failures are kept strictly apart from state errors: a
//! store timeout is never reported as a missing session.

use crate::domain::foundation::{DomainError, ErrorCode, SessionId};
use crate::domain::token::TokenError;
use crate::ports::StoreError;

/// Errors surfaced by the session lifecycle operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// No session exists for the presented identifier.
    NotFound(SessionId),
    /// The session's expiry has passed.
    Expired,
    /// The session was revoked (or deleted, which counts as revocation).
    Revoked,
    /// The refresh token was already consumed by a successful rotation.
    TokenAlreadyUsed,
    /// Token verification failed.
    Token(TokenError),
    /// Validation failed.
    ValidationFailed { message: String },
    /// Store failure; the only retryable kind.
    Infrastructure { code: ErrorCode, message: String },
}

impl SessionError {
    pub fn not_found(id: SessionId) -> Self {
        SessionError::NotFound(id)
    }

    pub fn validation(message: impl Into<String>) -> Self {
        SessionError::ValidationFailed {
            message: message.into(),
        }
    }

    /// Stable code discriminant for the wire.
    pub fn code(&self) -> ErrorCode {
        match self {
            SessionError::NotFound(_) => ErrorCode::SessionNotFound,
            SessionError::Expired => ErrorCode::SessionExpired,
            SessionError::Revoked => ErrorCode::SessionRevoked,
            SessionError::TokenAlreadyUsed => ErrorCode::TokenAlreadyUsed,
            SessionError::Token(err) => err.code(),
            SessionError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            SessionError::Infrastructure { code, .. } => *code,
        }
    }

    pub fn message(&self) -> String {
        match self {
            SessionError::NotFound(id) => format!("Session not found: {}", id),
            SessionError::Expired => "Session expired".to_string(),
            SessionError::Revoked => "Session revoked".to_string(),
            SessionError::TokenAlreadyUsed => "Refresh token already used".to_string(),
            SessionError::Token(err) => err.to_string(),
            SessionError::ValidationFailed { message } => {
                format!("Validation failed: {}", message)
            }
            SessionError::Infrastructure { message, .. } => message.clone(),
        }
    }

    /// True if the caller may retry with backoff. Only infrastructure
    /// failures qualify; the core itself never retries.
    pub fn is_retryable(&self) -> bool {
        self.code().is_retryable()
    }

    /// Converts into the serializable boundary shape.
    pub fn to_domain_error(&self) -> DomainError {
        let err = DomainError::new(self.code(), self.message());
        match self {
            SessionError::NotFound(id) => err.with_detail("session_id", id.to_string()),
            _ => err,
        }
    }
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for SessionError {}

impl From<TokenError> for SessionError {
    fn from(err: TokenError) -> Self {
        SessionError::Token(err)
    }
}

impl From<StoreError> for SessionError {
    fn from(err: StoreError) -> Self {
        // A store failure must never masquerade as a state error.
        SessionError::Infrastructure {
            code: err.code(),
            message: err.to_string(),
        }
    }
}

impl From<DomainError> for SessionError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::SessionExpired => SessionError::Expired,
            ErrorCode::SessionRevoked => SessionError::Revoked,
            ErrorCode::TokenAlreadyUsed => SessionError::TokenAlreadyUsed,
            ErrorCode::ValidationFailed | ErrorCode::InvalidIdentifier => {
                SessionError::ValidationFailed {
                    message: err.message,
                }
            }
            code => SessionError::Infrastructure {
                code,
                message: err.message,
            },
        }
    }
}
