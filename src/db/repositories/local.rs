//! In-memory repository implementation.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;

use crate::api::{Schedule, UserId};
use crate::db::error::RepositoryResult;
use crate::db::repository::ScheduleRepository;

/// In-memory schedule store for unit testing and local development.
///
/// Schedules are stored in their serialized form and re-parsed on load,
/// so round-trip behavior matches a real persistence backend.
#[derive(Default)]
pub struct LocalRepository {
    schedules: RwLock<HashMap<UserId, String>>,
}

impl LocalRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of users with a saved schedule.
    pub fn user_count(&self) -> usize {
        self.schedules.read().len()
    }
}

#[async_trait]
impl ScheduleRepository for LocalRepository {
    async fn save_schedule(&self, user: &UserId, schedule: &Schedule) -> RepositoryResult<()> {
        let serialized = serde_json::to_string(schedule)
            .map_err(|e| crate::db::RepositoryError::from(e).with_operation("save_schedule"))?;
        self.schedules.write().insert(user.clone(), serialized);
        Ok(())
    }

    async fn load_schedule(&self, user: &UserId) -> RepositoryResult<Schedule> {
        let schedules = self.schedules.read();
        match schedules.get(user) {
            Some(serialized) => serde_json::from_str(serialized).map_err(|e| {
                crate::db::RepositoryError::from(e)
                    .with_operation("load_schedule")
                    .with_user(user)
            }),
            None => Ok(Schedule::empty()),
        }
    }

    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Session, SessionKind};
    use chrono::{TimeZone, Utc};

    fn sample_schedule() -> Schedule {
        Schedule::new(vec![Session {
            kind: SessionKind::Study,
            task_title: "Math homework".to_string(),
            start: Utc.with_ymd_and_hms(2024, 3, 10, 9, 0, 0).unwrap(),
            end: Utc.with_ymd_and_hms(2024, 3, 10, 10, 0, 0).unwrap(),
        }])
    }

    #[tokio::test]
    async fn test_save_then_load_round_trip() {
        let repo = LocalRepository::new();
        let user = UserId::new("alice");
        let schedule = sample_schedule();

        repo.save_schedule(&user, &schedule).await.unwrap();
        let loaded = repo.load_schedule(&user).await.unwrap();

        assert_eq!(loaded, schedule);
    }

    #[tokio::test]
    async fn test_load_unknown_user_is_empty_not_error() {
        let repo = LocalRepository::new();
        let loaded = repo.load_schedule(&UserId::new("nobody")).await.unwrap();
        assert!(loaded.is_empty());
    }

    #[tokio::test]
    async fn test_save_overwrites_wholesale() {
        let repo = LocalRepository::new();
        let user = UserId::new("alice");

        repo.save_schedule(&user, &sample_schedule()).await.unwrap();
        repo.save_schedule(&user, &Schedule::empty()).await.unwrap();

        let loaded = repo.load_schedule(&user).await.unwrap();
        assert!(loaded.is_empty());
        assert_eq!(repo.user_count(), 1);
    }

    #[tokio::test]
    async fn test_users_are_isolated() {
        let repo = LocalRepository::new();
        repo.save_schedule(&UserId::new("alice"), &sample_schedule())
            .await
            .unwrap();

        let other = repo.load_schedule(&UserId::new("bob")).await.unwrap();
        assert!(other.is_empty());
    }

    #[tokio::test]
    async fn test_health_check() {
        let repo = LocalRepository::new();
        assert!(repo.health_check().await.unwrap());
    }
}
