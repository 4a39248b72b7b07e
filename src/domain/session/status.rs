//! SessionStatus enum for the stored part of the session lifecycle.
//!
//! Only Active and Revoked are stored; an expired session is derived
//! lazily from the clock and is never written back as a status.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// Stored lifecycle status of an authentication session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    #[default]
    Active,
    Revoked,
}

impl SessionStatus {
    /// Returns true if the session has not been revoked.
    pub fn is_active(&self) -> bool {
        matches!(self, SessionStatus::Active)
    }
}

impl StateMachine for SessionStatus {
    /// Valid transitions:
    /// - Active -> Revoked
    ///
    /// Revoked is terminal; no transition resurrects a session.
    fn can_transition_to(&self, target: &SessionStatus) -> bool {
        use SessionStatus::*;
        matches!((self, target), (Active, Revoked))
    }

    fn valid_transitions(&self) -> Vec<Self> {
        match self {
            SessionStatus::Active => vec![SessionStatus::Revoked],
            SessionStatus::Revoked => vec![],
        }
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SessionStatus::Active => "Active",
            SessionStatus::Revoked => "Revoked",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_active() {
        assert_eq!(SessionStatus::default(), SessionStatus::Active);
    }

    #[test]
    fn is_active_works_correctly() {
        assert!(SessionStatus::Active.is_active());
        assert!(!SessionStatus::Revoked.is_active());
    }

    #[test]
    fn active_can_transition_to_revoked() {
        assert!(SessionStatus::Active.can_transition_to(&SessionStatus::Revoked));
    }

    #[test]
    fn revoked_is_terminal() {
        assert!(SessionStatus::Revoked.is_terminal());
        assert!(!SessionStatus::Revoked.can_transition_to(&SessionStatus::Active));
        assert!(!SessionStatus::Revoked.can_transition_to(&SessionStatus::Revoked));
    }

    #[test]
    fn serializes_as_snake_case() {
        assert_eq!(
            serde_json::to_string(&SessionStatus::Revoked).unwrap(),
            "\"revoked\""
        );
    }

    #[test]
    fn display_works_correctly() {
        assert_eq!(format!("{}", SessionStatus::Active), "Active");
        assert_eq!(format!("{}", SessionStatus::Revoked), "Revoked");
    }
}
