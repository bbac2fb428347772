//! Busy intervals reported by the external calendar.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A time range during which the calendar reports the user as committed.
///
/// Intervals arrive from the provider unsorted and possibly overlapping;
/// the free-slot sweep tolerates overlap but requires a sort by `start`
/// before use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusyInterval {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl BusyInterval {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Whether this interval overlaps the half-open window `[start, end)`.
    pub fn overlaps(&self, window_start: DateTime<Utc>, window_end: DateTime<Utc>) -> bool {
        self.start < window_end && self.end > window_start
    }
}
