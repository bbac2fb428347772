//! Busy-period lookup against the user's calendar.
//!
//! The planner never talks to a concrete calendar API directly; it goes
//! through the [`BusyPeriodProvider`] trait so the backend can be swapped.
//! [`StaticBusyProvider`] is the in-memory implementation used for local
//! development and tests.

mod provider;
mod static_provider;

pub use provider::{BusyPeriodProvider, ProviderError, ProviderResult};
pub use static_provider::StaticBusyProvider;
