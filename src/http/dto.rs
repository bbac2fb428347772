//! Data Transfer Objects for the HTTP API.
//!
//! These DTOs are used for request/response serialization in the REST API.
//! The planning request/response bodies reuse the service-layer types,
//! which already derive Serialize/Deserialize.

use serde::{Deserialize, Serialize};

pub use crate::api::{Session, SessionKind};
pub use crate::services::{InvalidTask, PlanRequest, TaskInput};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Repository backend status
    pub repository: String,
}

/// Response for a planning request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanResponse {
    /// Allocated sessions in creation order
    pub sessions: Vec<Session>,
    /// Valid tasks that could not be scheduled before their deadline
    pub unscheduled: Vec<String>,
    /// Tasks rejected during validation
    pub invalid_tasks: Vec<InvalidTask>,
    /// Whether the schedule was persisted successfully
    pub persisted: bool,
}

/// Saved-schedule response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleResponse {
    /// Saved sessions (empty when the user has never saved a plan)
    pub sessions: Vec<Session>,
    /// Total count
    pub total: usize,
}
