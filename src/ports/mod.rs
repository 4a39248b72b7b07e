//! Ports - boundary contracts consumed by the application layer.
//!
//! Implementations live in `adapters` (in-memory/static) or in downstream
//! crates (relational store, KMS-backed key provider).

mod session_store;
mod signing_keys;

pub use session_store::{SessionStore, StoreError};
pub use signing_keys::{SigningKey, SigningKeyProvider};
