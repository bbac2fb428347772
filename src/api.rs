//! Public API surface for the study planner.
//!
//! This file consolidates the identifier newtypes and re-exports the domain
//! model so callers have a single import surface. All types derive
//! Serialize/Deserialize for JSON serialization.

pub use crate::models::busy::BusyInterval;
pub use crate::models::schedule::{Schedule, Session, SessionKind};
pub use crate::models::slots::FreeSlot;
pub use crate::models::task::{PreferredHours, Task};

use serde::{Deserialize, Serialize};

/// User identifier (storage key for saved schedules).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub String);

impl UserId {
    pub fn new(value: impl Into<String>) -> Self {
        UserId(value.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for UserId {
    fn from(value: &str) -> Self {
        UserId(value.to_string())
    }
}

impl From<String> for UserId {
    fn from(value: String) -> Self {
        UserId(value)
    }
}
