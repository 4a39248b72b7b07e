//! Strongly-typed identifier value objects.
//!
//! Identifiers of different brands are never comparable or assignable;
//! the brand is enforced at compile time, not at runtime.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::str::FromStr;
use uuid::Uuid;

use super::ValidationError;

/// Unique identifier for an authentication session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Creates a new random SessionId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a SessionId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SessionId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|e| ValidationError::invalid_format("session_id", e.to_string()))
    }
}

/// User identifier (typically from the tenant's directory).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Creates a new UserId, returning error if empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ValidationError::empty_field("user_id"));
        }
        Ok(Self(id))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Numeric identifier tagged with a phantom brand.
///
/// `NumberId<A>` and `NumberId<B>` are distinct types even though both
/// wrap an `i64`, so passing one where the other is expected is a compile
/// error. Construction goes through the validated [`NumberId::new`] only.
pub struct NumberId<B> {
    value: i64,
    _brand: PhantomData<fn() -> B>,
}

impl<B> NumberId<B> {
    /// Creates a branded id, rejecting non-positive values.
    pub fn new(value: i64) -> Result<Self, ValidationError> {
        if value <= 0 {
            return Err(ValidationError::not_positive("id", value));
        }
        Ok(Self {
            value,
            _brand: PhantomData,
        })
    }

    /// Returns the inner value.
    pub fn value(&self) -> i64 {
        self.value
    }
}

// Manual impls: derives would bound on `B`, which is only a marker.

impl<B> Clone for NumberId<B> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<B> Copy for NumberId<B> {}

impl<B> PartialEq for NumberId<B> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<B> Eq for NumberId<B> {}

impl<B> Hash for NumberId<B> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<B> fmt::Debug for NumberId<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NumberId").field(&self.value).finish()
    }
}

impl<B> fmt::Display for NumberId<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<B> Serialize for NumberId<B> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.value)
    }
}

impl<'de, B> Deserialize<'de> for NumberId<B> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = i64::deserialize(deserializer)?;
        NumberId::new(value).map_err(serde::de::Error::custom)
    }
}

/// Brand marker for stored file identifiers. Uninhabited on purpose.
#[derive(Debug, Clone, Copy)]
pub enum FileBrand {}

/// Unique identifier for a stored file.
pub type FileId = NumberId<FileBrand>;
