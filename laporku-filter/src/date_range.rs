use crate::dates::format_date;
use crate::year_month::{YearMonth, MAX_YEAR, MIN_YEAR};
use chrono::{NaiveDate, TimeDelta};
use std::fmt;
use std::mem::replace;

/// Separator between the bounds in a range label.
pub const LABEL_SEPARATOR: &str = " \u{2014} ";

/// An inclusive `[from, to]` calendar interval.
///
/// Month and year ranges are always ordered. Custom ranges are stored as given,
/// so `from > to` is representable; such a range has no days.
#[derive(Clone, Eq, PartialEq, Copy, Debug, Hash)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self { from, to }
    }

    /// First through last day of `month`.
    pub fn month(month: YearMonth) -> Self {
        Self::new(month.first_day(), month.last_day())
    }

    /// January 1 through December 31, with `year` clamped to four digits.
    pub fn year(year: i32) -> Self {
        let year = year.clamp(MIN_YEAR, MAX_YEAR);
        let from = NaiveDate::from_ymd_opt(year, 1, 1).unwrap_or(NaiveDate::MIN);
        let to = NaiveDate::from_ymd_opt(year, 12, 31).unwrap_or(NaiveDate::MAX);
        Self::new(from, to)
    }

    pub fn is_ordered(&self) -> bool {
        self.from <= self.to
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from <= date && date <= self.to
    }

    /// Number of days in the range, counting both ends. Zero when inverted.
    pub fn num_days(&self) -> usize {
        if self.is_ordered() {
            (self.to - self.from).num_days() as usize + 1
        } else {
            0
        }
    }

    /// Iterate every date from `from` through `to`.
    pub fn days(&self) -> Days {
        Days(self.from, self.to)
    }

    /// `"YYYY-MM-DD — YYYY-MM-DD"`.
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            format_date(&self.from),
            LABEL_SEPARATOR,
            format_date(&self.to)
        )
    }
}

/// A date iterator that yields each date from the start date
/// through the end date (inclusive).
#[derive(Clone, Eq, PartialEq, Copy, Debug)]
pub struct Days(NaiveDate, NaiveDate);

impl Iterator for Days {
    type Item = NaiveDate;
    fn next(&mut self) -> Option<Self::Item> {
        if self.0 <= self.1 {
            // Stop after the last representable date instead of overflowing.
            let next = match self.0.checked_add_signed(TimeDelta::days(1)) {
                Some(next) => next,
                None => {
                    self.1 = NaiveDate::MIN;
                    return Some(self.0);
                }
            };
            Some(replace(&mut self.0, next))
        } else {
            None
        }
    }
}
