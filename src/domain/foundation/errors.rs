//! Error types for the domain layer.
//!
//! Every well-known failure kind carries a stable snake_case code so
//! callers can branch on `code` across a serialization boundary instead of
//! matching on Rust type identity. New kinds are declared through
//! [`domain_error_kinds!`] rather than hand-written error structs.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be positive, got {actual}")]
    NotPositive { field: String, actual: i64 },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField {
            field: field.into(),
        }
    }

    /// Creates a not-positive validation error.
    pub fn not_positive(field: impl Into<String>, actual: i64) -> Self {
        ValidationError::NotPositive {
            field: field.into(),
            actual,
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Declares every error kind with its stable wire code and generates a
/// named constructor per kind on [`DomainError`].
///
/// Two kinds declared with the same code string are the same domain error
/// kind; uniqueness of codes is the declarer's responsibility.
macro_rules! domain_error_kinds {
    ($($(#[$meta:meta])* $variant:ident => ($code:literal, $ctor:ident)),+ $(,)?) => {
        /// Error codes with stable wire representations.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum ErrorCode {
            $($(#[$meta])* $variant,)+
        }

        impl ErrorCode {
            /// Stable snake_case code, safe to match on across processes.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(ErrorCode::$variant => $code,)+
                }
            }
        }

        impl DomainError {
            $(
                $(#[$meta])*
                pub fn $ctor(message: impl Into<String>) -> Self {
                    Self::new(ErrorCode::$variant, message)
                }
            )+
        }
    };
}

domain_error_kinds! {
    /// Malformed identifier or field value; caller's fault, never retried.
    ValidationFailed => ("validation_failed", validation_failed),
    /// Identifier failed the underlying primitive's validation.
    InvalidIdentifier => ("invalid_identifier", invalid_identifier),

    /// No session row exists for the presented identifier.
    SessionNotFound => ("session_not_found", session_not_found),
    /// The session's expiry has passed.
    SessionExpired => ("session_expired", session_expired),
    /// The session was explicitly revoked (or deleted).
    SessionRevoked => ("session_revoked", session_revoked),

    /// Token expiry claim is in the past.
    TokenExpired => ("token_expired", token_expired),
    /// Token signature or signing-key resolution failed.
    TokenSignatureInvalid => ("token_signature_invalid", token_signature_invalid),
    /// Token is structurally invalid.
    TokenMalformed => ("token_malformed", token_malformed),
    /// Token presented in the wrong category or with a wrong discriminant.
    TokenTypeMismatch => ("token_type_mismatch", token_type_mismatch),
    /// Refresh token was already consumed by a successful rotation.
    TokenAlreadyUsed => ("token_already_used", token_already_used),

    /// Session store call exceeded its deadline.
    StoreTimeout => ("store_timeout", store_timeout),
    /// Session store is unreachable.
    StoreUnavailable => ("store_unavailable", store_unavailable),
    /// Unclassified internal failure.
    Internal => ("internal_error", internal),
}

impl ErrorCode {
    /// True only for infrastructure codes; all domain failures are final
    /// from the core's perspective and retry policy belongs to the caller.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ErrorCode::StoreTimeout | ErrorCode::StoreUnavailable)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Standard domain error with code, message, and optional details.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }

    /// Records the underlying cause as a detail.
    pub fn with_cause(self, cause: impl fmt::Display) -> Self {
        self.with_detail("cause", cause.to_string())
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}

impl From<ValidationError> for DomainError {
    fn from(err: ValidationError) -> Self {
        DomainError::validation_failed(err.to_string())
    }
}
