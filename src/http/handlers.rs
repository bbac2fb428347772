//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer for business logic. User identity is always an explicit
//! path parameter flowing into every core call; nothing is recovered from
//! ambient state.

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;

use super::dto::{HealthResponse, PlanRequest, PlanResponse, ScheduleResponse};
use super::error::AppError;
use super::state::AppState;
use crate::api::UserId;
use crate::services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// GET /health
///
/// Health check endpoint to verify the service is running and the
/// repository is accessible.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let repo_status = match state.repository.health_check().await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        repository: repo_status,
    }))
}

/// POST /v1/users/{user_id}/schedule
///
/// Compute a study plan from tasks and preferred hours, persist it, and
/// return the allocated sessions. A persistence failure does not discard
/// the computed sessions; it is reported via `persisted: false`.
pub async fn create_plan(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(request): Json<PlanRequest>,
) -> HandlerResult<PlanResponse> {
    let user = UserId::new(user_id);
    let today = Utc::now().date_naive();

    let outcome = services::create_study_plan(
        state.provider.as_ref(),
        state.repository.as_ref(),
        &state.config,
        &user,
        &request,
        today,
    )
    .await?;

    let persisted = outcome.persisted();
    Ok(Json(PlanResponse {
        sessions: outcome.schedule.sessions,
        unscheduled: outcome.unscheduled,
        invalid_tasks: outcome.invalid_tasks,
        persisted,
    }))
}

/// GET /v1/users/{user_id}/schedule
///
/// Return the saved schedule for a user. A user with no prior save gets
/// an empty session list, not an error.
pub async fn get_schedule(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> HandlerResult<ScheduleResponse> {
    let user = UserId::new(user_id);
    let schedule = services::saved_schedule(state.repository.as_ref(), &user).await?;

    let total = schedule.len();
    Ok(Json(ScheduleResponse {
        sessions: schedule.sessions,
        total,
    }))
}
