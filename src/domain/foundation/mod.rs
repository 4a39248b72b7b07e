//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, the clock capability, and error
//! types that form the vocabulary of the Gatehouse domain.

mod clock;
mod errors;
mod ids;
mod role;
mod state_machine;
mod timestamp;

pub use clock::{Clock, ManualClock, SystemClock};
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{FileBrand, FileId, NumberId, SessionId, UserId};
pub use role::Role;
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
