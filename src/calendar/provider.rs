//! Provider trait for calendar busy periods.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::api::{BusyInterval, UserId};

/// Result type for provider operations.
pub type ProviderResult<T> = Result<T, ProviderError>;

/// Error type for busy-period lookups.
///
/// These errors never fail a planning request: the free-slot calculator
/// recovers by treating the affected day as fully free (fail-open) and
/// logs the recovery so operators can distinguish "no conflicts" from
/// "couldn't check for conflicts".
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// The upstream calendar could not be reached or returned an error.
    #[error("Calendar unavailable: {0}")]
    Unavailable(String),

    /// The lookup exceeded the caller-supplied timeout.
    #[error("Calendar lookup timed out after {0:?}")]
    Timeout(std::time::Duration),
}

/// Source of busy intervals for a calendar identity.
///
/// The provider may return zero, one, or many intervals overlapping the
/// window, unsorted and possibly overlapping each other. Callers are
/// responsible for sorting before any sweep.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait BusyPeriodProvider: Send + Sync {
    /// Fetch busy intervals overlapping `[window_start, window_end)`.
    ///
    /// # Arguments
    /// * `user` - Calendar identity to query
    /// * `window_start` - Inclusive window start
    /// * `window_end` - Exclusive window end
    ///
    /// # Returns
    /// * `Ok(Vec<BusyInterval>)` - Intervals overlapping the window
    /// * `Err(ProviderError)` - If the lookup fails
    async fn busy_periods(
        &self,
        user: &UserId,
        window_start: DateTime<Utc>,
        window_end: DateTime<Utc>,
    ) -> ProviderResult<Vec<BusyInterval>>;
}
