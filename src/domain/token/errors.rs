//! Token verification error types.

use thiserror::Error;

use crate::domain::foundation::ErrorCode;

/// Failures produced by token issuance and verification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// The token's expiry claim is in the past.
    #[error("Token expired")]
    Expired,

    /// Signature or integrity check failed.
    #[error("Token signature invalid")]
    InvalidSignature,

    /// The token references a signing key the provider does not publish.
    #[error("Unknown signing key: {0}")]
    UnknownKey(String),

    /// The token is structurally invalid.
    #[error("Token malformed")]
    Malformed,

    /// The token was presented in the wrong category, or its `type`
    /// discriminant is not the expected literal.
    #[error("Token type mismatch: got '{found}'")]
    TypeMismatch { found: String },
}

impl TokenError {
    /// Creates a type mismatch error for the given offending value.
    pub fn type_mismatch(found: impl Into<String>) -> Self {
        TokenError::TypeMismatch {
            found: found.into(),
        }
    }

    /// Stable code discriminant for the wire.
    pub fn code(&self) -> ErrorCode {
        match self {
            TokenError::Expired => ErrorCode::TokenExpired,
            TokenError::InvalidSignature => ErrorCode::TokenSignatureInvalid,
            TokenError::UnknownKey(_) => ErrorCode::TokenSignatureInvalid,
            TokenError::Malformed => ErrorCode::TokenMalformed,
            TokenError::TypeMismatch { .. } => ErrorCode::TokenTypeMismatch,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_stable() {
        assert_eq!(TokenError::Expired.code(), ErrorCode::TokenExpired);
        assert_eq!(
            TokenError::InvalidSignature.code(),
            ErrorCode::TokenSignatureInvalid
        );
        assert_eq!(
            TokenError::UnknownKey("k1".into()).code(),
            ErrorCode::TokenSignatureInvalid
        );
        assert_eq!(TokenError::Malformed.code(), ErrorCode::TokenMalformed);
        assert_eq!(
            TokenError::type_mismatch("access").code(),
            ErrorCode::TokenTypeMismatch
        );
    }

    #[test]
    fn type_mismatch_displays_offending_value() {
        let err = TokenError::type_mismatch("access");
        assert_eq!(format!("{}", err), "Token type mismatch: got 'access'");
    }
}
