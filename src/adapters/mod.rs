//! Adapters - concrete implementations of the ports.
//!
//! Only in-process implementations live here; relational and KMS-backed
//! adapters belong to downstream crates.

mod in_memory_store;
mod static_keys;

pub use in_memory_store::InMemorySessionStore;
pub use static_keys::StaticKeyProvider;
