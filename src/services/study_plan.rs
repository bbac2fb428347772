//! Study-plan orchestration: validate, compute, allocate, persist.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::api::{PreferredHours, Schedule, Task, UserId};
use crate::calendar::BusyPeriodProvider;
use crate::config::PlannerConfig;
use crate::db::ScheduleRepository;
use crate::planner::{allocate, FreeSlotCalculator};

/// Planning request as accepted from the caller.
///
/// Task due dates arrive as strings and are validated here, so the
/// validation policy lives in one place regardless of transport.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanRequest {
    pub tasks: Vec<TaskInput>,
    pub preferred_hours: PreferredHours,
}

/// One task as supplied by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskInput {
    pub title: String,
    /// Due date in ISO-8601 calendar-date form (`YYYY-MM-DD`).
    pub due_date: String,
}

/// A task rejected during validation, with the reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvalidTask {
    pub title: String,
    pub error: String,
}

/// Hard failures of a planning request.
///
/// Validation is the only hard failure: upstream calendar problems are
/// recovered fail-open inside the free-slot calculator, and persistence
/// failures are carried on the outcome instead of discarding the computed
/// schedule.
#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    /// Malformed input, attributed to the offending field.
    #[error("Validation failed for {field}: {message}")]
    Validation { field: String, message: String },
}

impl PlanError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// The field the error is attributed to.
    pub fn field(&self) -> &str {
        match self {
            Self::Validation { field, .. } => field,
        }
    }
}

/// Result of a planning run.
#[derive(Debug)]
pub struct StudyPlanOutcome {
    /// The computed schedule, in session creation order.
    pub schedule: Schedule,
    /// Titles of valid tasks that got no study session (insufficient free
    /// time before their deadline).
    pub unscheduled: Vec<String>,
    /// Tasks rejected during validation; the rest of the run proceeded
    /// without them.
    pub invalid_tasks: Vec<InvalidTask>,
    /// Persistence failure, if any. The schedule above is still the
    /// computed result; the caller is not forced to recompute.
    pub persistence_error: Option<crate::db::RepositoryError>,
}

impl StudyPlanOutcome {
    pub fn persisted(&self) -> bool {
        self.persistence_error.is_none()
    }
}

/// Create a study plan for `user` and persist it.
///
/// Validation policy: an invalid `preferred_hours` window rejects the
/// whole request (nothing can be placed without a valid window); a task
/// with a malformed `due_date` is rejected individually, reported in
/// [`StudyPlanOutcome::invalid_tasks`], and the remaining tasks are
/// scheduled.
///
/// The horizon is `[today, today + horizon_days]` inclusive. Persistence
/// failure does not fail the call; the computed schedule is returned
/// alongside the error.
pub async fn create_study_plan(
    provider: &dyn BusyPeriodProvider,
    repository: &dyn ScheduleRepository,
    config: &PlannerConfig,
    user: &UserId,
    request: &PlanRequest,
    today: NaiveDate,
) -> Result<StudyPlanOutcome, PlanError> {
    request
        .preferred_hours
        .validate()
        .map_err(|message| PlanError::validation("preferred_hours", message))?;

    let (tasks, invalid_tasks) = parse_tasks(&request.tasks);

    let end_date = today + Duration::days(config.horizon_days as i64);
    let calculator = FreeSlotCalculator::new(provider, config.provider_timeout());
    let mut free_slots = calculator
        .compute_free_slots(user, today, end_date, &request.preferred_hours)
        .await;

    let allocation = allocate(&tasks, &mut free_slots);
    let schedule = Schedule::new(allocation.sessions);

    info!(
        user = %user,
        sessions = schedule.len(),
        unscheduled = allocation.unscheduled.len(),
        "study plan computed"
    );

    let persistence_error = match repository.save_schedule(user, &schedule).await {
        Ok(()) => None,
        Err(e) => {
            error!(user = %user, error = %e, "failed to persist study plan");
            Some(e)
        }
    };

    Ok(StudyPlanOutcome {
        schedule,
        unscheduled: allocation.unscheduled,
        invalid_tasks,
        persistence_error,
    })
}

/// Load the saved schedule for `user` (empty if never saved).
pub async fn saved_schedule(
    repository: &dyn ScheduleRepository,
    user: &UserId,
) -> crate::db::RepositoryResult<Schedule> {
    repository.load_schedule(user).await
}

/// Parse task inputs, splitting valid tasks from rejected ones.
fn parse_tasks(inputs: &[TaskInput]) -> (Vec<Task>, Vec<InvalidTask>) {
    let mut tasks = Vec::with_capacity(inputs.len());
    let mut invalid = Vec::new();

    for input in inputs {
        match input.due_date.parse::<NaiveDate>() {
            Ok(due_date) => tasks.push(Task::new(input.title.clone(), due_date)),
            Err(e) => invalid.push(InvalidTask {
                title: input.title.clone(),
                error: format!("invalid due_date '{}': {}", input.due_date, e),
            }),
        }
    }

    (tasks, invalid)
}
