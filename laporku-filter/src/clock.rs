//! Wall-clock sources for default and fallback values.

use chrono::{Local, NaiveDate};

/// Supplies "today" to the filter.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// The host's local wall clock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock frozen at one date. Used by tests and static previews.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
