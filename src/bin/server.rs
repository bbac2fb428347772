//! Study Planner HTTP Server Binary
//!
//! This is the main entry point for the study-plan REST API server.
//! It initializes the repository and calendar provider, sets up the HTTP
//! router, and starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin studyplan-server --features "local-repo,http-server"
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `REPOSITORY_TYPE`: Storage backend (default: local)
//! - `STUDYPLAN_HORIZON_DAYS` / `STUDYPLAN_PROVIDER_TIMEOUT_SECS`: planner
//!   configuration overrides
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use studyplan::calendar::StaticBusyProvider;
use studyplan::config::PlannerConfig;
use studyplan::db::{RepositoryFactory, RepositoryType};
use studyplan::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting study planner HTTP server");

    let repository = RepositoryFactory::create(RepositoryType::from_env())
        .map_err(|e| anyhow::anyhow!(e.to_string()))?;
    info!("Repository initialized successfully");

    // The in-memory provider stands in until a real calendar integration
    // is wired up; unknown users simply have empty calendars.
    let provider = Arc::new(StaticBusyProvider::new());

    let config = PlannerConfig::load();
    info!(
        horizon_days = config.horizon_days,
        provider_timeout_secs = config.provider_timeout_secs,
        "Planner configuration loaded"
    );

    let state = AppState::new(repository, provider, config);
    let app = create_router(state);

    // Determine bind address
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8080);
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
