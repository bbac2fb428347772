//! In-memory busy-period provider for local development and tests.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use std::collections::HashMap;

use super::provider::{BusyPeriodProvider, ProviderError, ProviderResult};
use crate::api::{BusyInterval, UserId};

/// Provider backed by a fixed per-user interval map.
///
/// Users with no registered intervals are treated as having empty
/// calendars. A user can be marked as failing to simulate an unavailable
/// upstream.
#[derive(Default)]
pub struct StaticBusyProvider {
    intervals: RwLock<HashMap<UserId, Vec<BusyInterval>>>,
    failing: RwLock<HashMap<UserId, String>>,
}

impl StaticBusyProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register busy intervals for a user, replacing any previous set.
    pub fn set_busy(&self, user: UserId, intervals: Vec<BusyInterval>) {
        self.intervals.write().insert(user, intervals);
    }

    /// Append a single busy interval for a user.
    pub fn add_busy(&self, user: UserId, interval: BusyInterval) {
        self.intervals.write().entry(user).or_default().push(interval);
    }

    /// Make every lookup for this user fail with the given message.
    pub fn fail_for(&self, user: UserId, message: impl Into<String>) {
        self.failing.write().insert(user, message.into());
    }
}

#[async_trait]
impl BusyPeriodProvider for StaticBusyProvider {
    async fn busy_periods(
        &self,
        user: &UserId,
        window_start: DateTime<Utc>,
        window_end: DateTime<Utc>,
    ) -> ProviderResult<Vec<BusyInterval>> {
        if let Some(message) = self.failing.read().get(user) {
            return Err(ProviderError::Unavailable(message.clone()));
        }

        let intervals = self.intervals.read();
        let Some(all) = intervals.get(user) else {
            return Ok(Vec::new());
        };

        Ok(all
            .iter()
            .filter(|interval| interval.overlaps(window_start, window_end))
            .copied()
            .collect())
    }
}
