//! Signing key provider port.
//!
//! Supplies the signing key material used by the token issuer. Key
//! rotation itself happens outside this crate; tokens are tagged with a
//! key identifier so verification can resolve the key that signed them
//! even after the current key has moved on.

use secrecy::SecretString;

/// A named signing key.
///
/// The secret never appears in `Debug` output; `secrecy` redacts it.
#[derive(Debug, Clone)]
pub struct SigningKey {
    /// Key identifier stamped into token headers (`kid`).
    pub id: String,

    /// Raw HMAC secret.
    pub secret: SecretString,
}

impl SigningKey {
    pub fn new(id: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            secret: SecretString::new(secret.into()),
        }
    }
}

/// Supplies current and historical signing keys.
pub trait SigningKeyProvider: Send + Sync {
    /// The key new tokens are signed with.
    fn current(&self) -> SigningKey;

    /// Resolve a key by identifier; `None` once a key is unpublished,
    /// at which point tokens signed by it stop verifying.
    fn find(&self, kid: &str) -> Option<SigningKey>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signing_key_provider_is_object_safe() {
        fn _accepts_dyn(_keys: &dyn SigningKeyProvider) {}
    }

    #[test]
    fn signing_key_debug_redacts_secret() {
        let key = SigningKey::new("primary", "super-secret-material");
        let debug = format!("{:?}", key);
        assert!(!debug.contains("super-secret-material"));
    }
}
