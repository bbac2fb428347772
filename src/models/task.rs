//! Tasks and the daily preferred-hours window.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A task the user wants study time for, ordered by due date.
///
/// Immutable once loaded for a planning run. Ties on `due_date` keep the
/// caller's original input order (the allocator sorts stably).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Task title, also the key used to match sessions back to tasks.
    pub title: String,
    /// Calendar date the task is due.
    pub due_date: NaiveDate,
}

impl Task {
    pub fn new(title: impl Into<String>, due_date: NaiveDate) -> Self {
        Self {
            title: title.into(),
            due_date,
        }
    }
}

/// The daily clock-time window within which sessions may be placed.
///
/// Hours are whole UTC hours: a window of `{9, 17}` means 09:00–17:00 on
/// every day of the horizon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferredHours {
    pub start_hour: u32,
    pub end_hour: u32,
}

impl PreferredHours {
    pub fn new(start_hour: u32, end_hour: u32) -> Self {
        Self {
            start_hour,
            end_hour,
        }
    }

    /// Validate the window: hours in range and `start_hour < end_hour`.
    ///
    /// # Returns
    /// * `Ok(())` if the window is usable
    /// * `Err(String)` with a human-readable reason otherwise
    pub fn validate(&self) -> Result<(), String> {
        if self.start_hour >= 24 {
            return Err(format!(
                "start_hour must be in [0, 24), got {}",
                self.start_hour
            ));
        }
        if self.end_hour > 24 {
            return Err(format!(
                "end_hour must be in [0, 24], got {}",
                self.end_hour
            ));
        }
        if self.start_hour >= self.end_hour {
            return Err(format!(
                "start_hour ({}) must precede end_hour ({})",
                self.start_hour, self.end_hour
            ));
        }
        Ok(())
    }
}
