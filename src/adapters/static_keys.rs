//! Static signing-key provider.
//!
//! Holds a current key plus any still-published previous keys. Rotation
//! of key material is driven from outside; this adapter just re-points
//! `current` and keeps old keys resolvable until they are unpublished.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::ports::{SigningKey, SigningKeyProvider};

/// Key provider over an in-process key map.
#[derive(Debug)]
pub struct StaticKeyProvider {
    current: RwLock<SigningKey>,
    published: RwLock<HashMap<String, SigningKey>>,
}

impl StaticKeyProvider {
    /// Creates a provider with a single current key.
    pub fn new(key: SigningKey) -> Self {
        let mut published = HashMap::new();
        published.insert(key.id.clone(), key.clone());
        Self {
            current: RwLock::new(key),
            published: RwLock::new(published),
        }
    }

    /// Publishes an additional (non-current) key, e.g. a previous key
    /// whose tokens must keep verifying.
    pub fn with_key(self, key: SigningKey) -> Self {
        self.published
            .write()
            .unwrap()
            .insert(key.id.clone(), key.clone());
        self
    }

    /// Makes `key` the current signing key; the previous current key
    /// stays published.
    pub fn rotate_to(&self, key: SigningKey) {
        self.published
            .write()
            .unwrap()
            .insert(key.id.clone(), key.clone());
        *self.current.write().unwrap() = key;
    }

    /// Stops publishing a key. Tokens signed by it no longer verify.
    /// Unpublishing the current key is ignored.
    pub fn unpublish(&self, kid: &str) {
        if self.current.read().unwrap().id == kid {
            return;
        }
        self.published.write().unwrap().remove(kid);
    }
}

impl SigningKeyProvider for StaticKeyProvider {
    fn current(&self) -> SigningKey {
        self.current.read().unwrap().clone()
    }

    fn find(&self, kid: &str) -> Option<SigningKey> {
        self.published.read().unwrap().get(kid).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(id: &str) -> SigningKey {
        SigningKey::new(id, format!("{}-secret-material-32-bytes-long!", id))
    }

    #[test]
    fn current_key_is_always_findable() {
        let provider = StaticKeyProvider::new(key("k1"));
        assert_eq!(provider.current().id, "k1");
        assert!(provider.find("k1").is_some());
    }

    #[test]
    fn rotation_keeps_previous_key_published() {
        let provider = StaticKeyProvider::new(key("k1"));
        provider.rotate_to(key("k2"));

        assert_eq!(provider.current().id, "k2");
        assert!(provider.find("k1").is_some());
        assert!(provider.find("k2").is_some());
    }

    #[test]
    fn unpublish_removes_old_key() {
        let provider = StaticKeyProvider::new(key("k1"));
        provider.rotate_to(key("k2"));
        provider.unpublish("k1");

        assert!(provider.find("k1").is_none());
    }

    #[test]
    fn unpublishing_current_key_is_ignored() {
        let provider = StaticKeyProvider::new(key("k1"));
        provider.unpublish("k1");
        assert!(provider.find("k1").is_some());
    }

    #[test]
    fn with_key_publishes_extra_keys() {
        let provider = StaticKeyProvider::new(key("k2")).with_key(key("k1"));
        assert_eq!(provider.current().id, "k2");
        assert!(provider.find("k1").is_some());
    }

    #[test]
    fn unknown_kid_resolves_to_none() {
        let provider = StaticKeyProvider::new(key("k1"));
        assert!(provider.find("nope").is_none());
    }
}
