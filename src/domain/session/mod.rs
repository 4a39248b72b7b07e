//! Session module - the session aggregate and its lifecycle rules.

mod aggregate;
mod errors;
mod status;

pub use aggregate::Session;
pub use errors::SessionError;
pub use status::SessionStatus;
