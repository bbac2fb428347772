//! The planning core: free-time discovery and greedy session allocation.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  Service Layer (services::study_plan)                     │
//! │  - Request validation, horizon selection, persistence     │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  FreeSlotCalculator (free_slots.rs)                       │
//! │  - One provider call per day, fail-open on errors         │
//! │  - Cursor sweep over sorted busy intervals                │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  SessionScheduler (allocator.rs)                          │
//! │  - Greedy due-date-ordered study allocation               │
//! │  - Exact-day review pass two days after each study block  │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! The allocator is deliberately greedy and non-backtracking: it never
//! revisits an earlier decision to better accommodate a later task, and it
//! does not balance load across days.

pub mod allocator;
pub mod free_slots;

pub use allocator::{allocate, AllocationOutcome};
pub use free_slots::FreeSlotCalculator;

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
