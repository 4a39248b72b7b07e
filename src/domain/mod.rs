//! Domain layer.
//!
//! Pure business logic with no infrastructure dependencies.

pub mod foundation;
pub mod session;
pub mod token;
