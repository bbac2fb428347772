//! Application state for the HTTP server.

use std::sync::Arc;

use crate::calendar::BusyPeriodProvider;
use crate::config::PlannerConfig;
use crate::db::ScheduleRepository;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Repository instance for schedule persistence
    pub repository: Arc<dyn ScheduleRepository>,
    /// Calendar busy-period source
    pub provider: Arc<dyn BusyPeriodProvider>,
    /// Planner configuration (horizon, provider timeout)
    pub config: PlannerConfig,
}

impl AppState {
    /// Create a new application state.
    pub fn new(
        repository: Arc<dyn ScheduleRepository>,
        provider: Arc<dyn BusyPeriodProvider>,
        config: PlannerConfig,
    ) -> Self {
        Self {
            repository,
            provider,
            config,
        }
    }
}
