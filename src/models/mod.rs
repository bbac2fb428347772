//! Domain data model for the study planner.
//!
//! Tasks and preferred hours arrive from the caller per request, busy
//! intervals come from the calendar provider, free slots exist only during
//! allocation, and the schedule is the single entity that outlives a
//! request (persisted per user).

pub mod busy;
pub mod schedule;
pub mod slots;
pub mod task;

pub use busy::BusyInterval;
pub use schedule::{Schedule, Session, SessionKind};
pub use slots::FreeSlot;
pub use task::{PreferredHours, Task};
