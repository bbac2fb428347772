//! Repository trait for schedule persistence.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::api::{Schedule, UserId};

/// Repository trait for schedule storage.
///
/// The store is an opaque key-value mapping from user identity to one
/// schedule. Saves overwrite wholesale; there is no partial update, merge,
/// or versioning.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait ScheduleRepository: Send + Sync {
    /// Persist `schedule` for `user`, replacing any previous schedule.
    ///
    /// # Arguments
    /// * `user` - Owner of the schedule
    /// * `schedule` - The schedule to store
    ///
    /// # Returns
    /// * `Ok(())` on success
    /// * `Err(RepositoryError)` if the operation fails
    async fn save_schedule(&self, user: &UserId, schedule: &Schedule) -> RepositoryResult<()>;

    /// Load the saved schedule for `user`.
    ///
    /// # Arguments
    /// * `user` - Owner of the schedule
    ///
    /// # Returns
    /// * `Ok(Schedule)` - The saved schedule, or an empty schedule if the
    ///   user has never saved one (not an error)
    /// * `Err(RepositoryError)` if the operation fails
    async fn load_schedule(&self, user: &UserId) -> RepositoryResult<Schedule>;

    /// Check that the backend is reachable.
    async fn health_check(&self) -> RepositoryResult<bool>;
}
