//! Command handlers for the session lifecycle.

mod login;
mod manager;
mod refresh;
mod revoke;
mod validate_access;

pub use login::{LoginCommand, LoginHandler, LoginResult};
pub use manager::SessionLifecycleManager;
pub use refresh::{RefreshHandler, RefreshResult};
pub use revoke::RevokeHandler;
pub use validate_access::ValidateAccessHandler;
