//! Service layer for business logic and orchestration.
//!
//! Services sit between the HTTP handlers and the planning core /
//! repository: they validate caller input, run the planner, persist the
//! result, and shape the outcome for the caller.

pub mod study_plan;

pub use study_plan::{
    create_study_plan, saved_schedule, InvalidTask, PlanError, PlanRequest, StudyPlanOutcome,
    TaskInput,
};
