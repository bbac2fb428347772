//! Planner configuration file support.
//!
//! This module provides utilities for reading planner configuration from
//! TOML configuration files, with environment-variable overrides.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::db::RepositoryError;

/// Planner configuration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Number of days ahead of "today" to search for free time.
    #[serde(default = "default_horizon_days")]
    pub horizon_days: u32,
    /// Upper bound in seconds for each busy-period lookup.
    #[serde(default = "default_provider_timeout_secs")]
    pub provider_timeout_secs: u64,
}

fn default_horizon_days() -> u32 {
    7
}

fn default_provider_timeout_secs() -> u64 {
    5
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            horizon_days: default_horizon_days(),
            provider_timeout_secs: default_provider_timeout_secs(),
        }
    }
}

impl PlannerConfig {
    /// Provider timeout as a `Duration`.
    pub fn provider_timeout(&self) -> Duration {
        Duration::from_secs(self.provider_timeout_secs)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(PlannerConfig)` if successful
    /// * `Err(RepositoryError)` if the file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, RepositoryError> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            RepositoryError::configuration(format!("Failed to read config file: {}", e))
        })?;

        let config: PlannerConfig = toml::from_str(&content).map_err(|e| {
            RepositoryError::configuration(format!("Failed to parse config file: {}", e))
        })?;

        Ok(config)
    }

    /// Load configuration from the default locations, falling back to the
    /// built-in defaults when no file is found, then apply environment
    /// overrides.
    ///
    /// Searches for `studyplan.toml` in the current directory and the
    /// parent directory. Environment variables `STUDYPLAN_HORIZON_DAYS`
    /// and `STUDYPLAN_PROVIDER_TIMEOUT_SECS` take precedence over file
    /// values.
    pub fn load() -> Self {
        let search_paths = [
            PathBuf::from("studyplan.toml"),
            PathBuf::from("../studyplan.toml"),
        ];

        let mut config = search_paths
            .iter()
            .find(|path| path.exists())
            .and_then(|path| Self::from_file(path).ok())
            .unwrap_or_default();

        if let Some(days) = env_parse("STUDYPLAN_HORIZON_DAYS") {
            config.horizon_days = days;
        }
        if let Some(secs) = env_parse("STUDYPLAN_PROVIDER_TIMEOUT_SECS") {
            config.provider_timeout_secs = secs;
        }

        config
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PlannerConfig::default();
        assert_eq!(config.horizon_days, 7);
        assert_eq!(config.provider_timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_parse_toml() {
        let config: PlannerConfig =
            toml::from_str("horizon_days = 14\nprovider_timeout_secs = 2\n").unwrap();
        assert_eq!(config.horizon_days, 14);
        assert_eq!(config.provider_timeout_secs, 2);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: PlannerConfig = toml::from_str("horizon_days = 3\n").unwrap();
        assert_eq!(config.horizon_days, 3);
        assert_eq!(config.provider_timeout_secs, 5);
    }

    #[test]
    fn test_missing_file_is_error() {
        assert!(PlannerConfig::from_file("/nonexistent/studyplan.toml").is_err());
    }
}
