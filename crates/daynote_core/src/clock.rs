//! Clock seam for the "today" boundary.
//!
//! # Responsibility
//! - Supply the invocation-time local day behind a trait, so range and
//!   forward-guard logic stay testable without real time.
//!
//! # Invariants
//! - `today` is re-read on every lookup; it advances as real time passes.

use crate::model::day::DateKey;
use chrono::Local;

/// Source of the current local calendar day.
pub trait Clock {
    fn today(&self) -> DateKey;
}

/// Production clock backed by the local system time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> DateKey {
        DateKey::from_date(Local::now().date_naive())
    }
}

/// Clock pinned to one day.
///
/// Used by tests and by embedding layers that replay a fixed session.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateKey);

impl Clock for FixedClock {
    fn today(&self) -> DateKey {
        self.0
    }
}
