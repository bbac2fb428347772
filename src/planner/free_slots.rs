//! Free-slot discovery within the daily preferred-hours window.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use std::time::Duration as StdDuration;
use tracing::warn;

use crate::api::{BusyInterval, FreeSlot, PreferredHours, UserId};
use crate::calendar::{BusyPeriodProvider, ProviderError};

/// Computes free time slots from calendar busy-interval data.
///
/// One provider call is issued per calendar day in the range (not
/// batched). Each call is bounded by `timeout`; on error or timeout the
/// day is treated as fully free (fail-open) so a flaky calendar never
/// aborts a planning request.
pub struct FreeSlotCalculator<'a> {
    provider: &'a dyn BusyPeriodProvider,
    timeout: StdDuration,
}

impl<'a> FreeSlotCalculator<'a> {
    pub fn new(provider: &'a dyn BusyPeriodProvider, timeout: StdDuration) -> Self {
        Self { provider, timeout }
    }

    /// Compute free slots for every day in `[start_date, end_date]`.
    ///
    /// Produces one candidate window per day,
    /// `[day 00:00 + start_hour, day 00:00 + end_hour]` in UTC, then
    /// subtracts that day's busy intervals with a cursor sweep. Output is
    /// concatenated in day order, so the returned slots are chronological
    /// and pairwise non-overlapping.
    ///
    /// `preferred_hours` must have been validated by the caller.
    pub async fn compute_free_slots(
        &self,
        user: &UserId,
        start_date: NaiveDate,
        end_date: NaiveDate,
        preferred_hours: &PreferredHours,
    ) -> Vec<FreeSlot> {
        let mut free_slots = Vec::new();
        let mut current_date = start_date;

        while current_date <= end_date {
            let day_start = current_date.and_time(NaiveTime::MIN).and_utc();
            let window_start = day_start + Duration::hours(preferred_hours.start_hour as i64);
            let window_end = day_start + Duration::hours(preferred_hours.end_hour as i64);

            let busy = self.busy_periods_for_day(user, window_start, window_end).await;
            sweep_day(window_start, window_end, busy, &mut free_slots);

            current_date = current_date + Duration::days(1);
        }

        free_slots
    }

    /// Fetch busy intervals for one day window, failing open.
    ///
    /// A lookup error or timeout yields an empty interval set and a
    /// warning, so operators can distinguish "no conflicts" from
    /// "couldn't check for conflicts".
    async fn busy_periods_for_day(
        &self,
        user: &UserId,
        window_start: DateTime<Utc>,
        window_end: DateTime<Utc>,
    ) -> Vec<BusyInterval> {
        let lookup = self
            .provider
            .busy_periods(user, window_start, window_end);

        match tokio::time::timeout(self.timeout, lookup).await {
            Ok(Ok(intervals)) => intervals,
            Ok(Err(e)) => {
                warn!(
                    user = %user,
                    day = %window_start.date_naive(),
                    error = %e,
                    "busy-period lookup failed; treating day as free"
                );
                Vec::new()
            }
            Err(_) => {
                let e = ProviderError::Timeout(self.timeout);
                warn!(
                    user = %user,
                    day = %window_start.date_naive(),
                    error = %e,
                    "busy-period lookup timed out; treating day as free"
                );
                Vec::new()
            }
        }
    }
}

/// Sweep one day's window, appending the gaps between busy intervals.
///
/// Intervals are sorted by `start` first (provider order is not trusted).
/// Overlapping intervals are not coalesced; the cursor tracks the maximum
/// end seen so far, which makes overlap harmless.
fn sweep_day(
    window_start: DateTime<Utc>,
    window_end: DateTime<Utc>,
    mut busy: Vec<BusyInterval>,
    free_slots: &mut Vec<FreeSlot>,
) {
    busy.sort_by_key(|interval| interval.start);

    let mut cursor = window_start;
    for interval in busy {
        if cursor < interval.start {
            free_slots.push(FreeSlot::new(cursor, interval.start));
        }
        cursor = cursor.max(interval.end);
    }

    if cursor < window_end {
        free_slots.push(FreeSlot::new(cursor, window_end));
    }
}
