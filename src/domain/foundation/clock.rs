//! Clock capability for time-dependent logic.
//!
//! Every operation that reads "now" takes an injected [`Clock`] so expiry
//! math is deterministic under test. Nothing in the crate reads a global
//! time source, including token expiry verification.

use std::sync::RwLock;

use super::Timestamp;

/// Supplies the current time.
pub trait Clock: Send + Sync {
    /// Returns the current moment.
    fn now(&self) -> Timestamp;
}

/// Production clock backed by the system UTC time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::now()
    }
}

/// Programmatically-advanced clock for deterministic tests.
///
/// Compiled unconditionally so integration tests and downstream crates can
/// use it, mirroring how mock adapters ship alongside the real ones.
#[derive(Debug)]
pub struct ManualClock {
    current: RwLock<Timestamp>,
}

impl ManualClock {
    /// Creates a clock frozen at the given instant.
    pub fn at(start: Timestamp) -> Self {
        Self {
            current: RwLock::new(start),
        }
    }

    /// Creates a clock frozen at the given Unix time.
    pub fn at_unix_secs(secs: u64) -> Self {
        Self::at(Timestamp::from_unix_secs(secs))
    }

    /// Moves the clock to an absolute instant.
    pub fn set(&self, instant: Timestamp) {
        *self.current.write().unwrap() = instant;
    }

    /// Advances the clock by the given number of seconds.
    pub fn advance_secs(&self, secs: u64) {
        let mut current = self.current.write().unwrap();
        *current = current.plus_secs(secs);
    }

    /// Advances the clock by the given number of minutes.
    pub fn advance_minutes(&self, minutes: u64) {
        let mut current = self.current.write().unwrap();
        *current = current.plus_minutes(minutes);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        *self.current.read().unwrap()
    }
}
