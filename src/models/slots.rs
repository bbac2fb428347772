//! Free slots discovered within the preferred-hours window.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// A time range within a day's preferred-hours window not covered by any
/// busy interval.
///
/// Mutable during allocation only: a slot's `start` advances as sessions
/// consume it, or the slot is removed outright. A slot is never split into
/// two usable pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreeSlot {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl FreeSlot {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }
}
