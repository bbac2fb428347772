//! # Study Planner
//!
//! Study-session planning engine.
//!
//! This crate computes study schedules from tasks with deadlines, a user's
//! preferred daily study window, and a calendar's existing commitments. It
//! discovers unoccupied time and greedily allocates study and review
//! sessions into it, persisting the result per user. The planner is
//! exposed as a REST API via Axum.
//!
//! ## Features
//!
//! - **Free-time discovery**: per-day busy-interval sweep within the
//!   preferred-hours window, fail-open when the calendar is unavailable
//! - **Greedy allocation**: due-date-ordered study sessions (≤ 1 hour)
//!   with exact-day review sessions (≤ 30 minutes) two days later
//! - **Persistence**: schedules stored per user behind a repository trait
//! - **HTTP API**: RESTful endpoints for planning and retrieval
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Identifier newtypes and the public DTO surface
//! - [`models`]: Domain data model (tasks, slots, sessions, schedules)
//! - [`planner`]: The planning core (free-slot calculator + allocator)
//! - [`calendar`]: Busy-period provider trait and in-memory implementation
//! - [`db`]: Repository pattern and persistence layer
//! - [`services`]: High-level orchestration (validate, plan, persist)
//! - [`http`]: Axum-based HTTP server and request handlers
//!
//! ## Concurrency model
//!
//! Planning is a pure, synchronous computation per request: one request,
//! one sequential pass, one provider call per calendar day. User identity
//! is an explicit parameter on every core call, so requests for different
//! users can run concurrently within one process without shared mutable
//! state beyond the repository.

pub mod api;

pub mod calendar;
pub mod config;
pub mod db;
pub mod models;
pub mod planner;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
