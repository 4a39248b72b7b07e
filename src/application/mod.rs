//! Application layer.
//!
//! Command handlers that orchestrate the session lifecycle over the
//! ports, and the facade that is the crate's public surface.

pub mod handlers;

pub use handlers::{
    LoginCommand, LoginHandler, LoginResult, RefreshHandler, RefreshResult, RevokeHandler,
    SessionLifecycleManager, ValidateAccessHandler,
};
