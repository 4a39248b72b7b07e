//! Role granted to an authenticated principal.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Authorization role embedded in access-token claims.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[default]
    Member,
    Admin,
    Service,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Role::Member => "member",
            Role::Admin => "admin",
            Role::Service => "service",
        };
        write!(f, "{}", s)
    }
}
