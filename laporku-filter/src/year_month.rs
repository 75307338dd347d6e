//! Calendar month in `YYYY-MM` form.

use crate::error::FilterError;
use chrono::{Datelike, NaiveDate};
use std::fmt;
use std::str::FromStr;

/// Smallest year a filter will produce.
pub const MIN_YEAR: i32 = 1;
/// Largest year a filter will produce; keeps every rendered year at 4 digits.
pub const MAX_YEAR: i32 = 9999;

/// A year and month, always within `MIN_YEAR..=MAX_YEAR` and `1..=12`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// Returns `None` when either component is out of range.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        if (MIN_YEAR..=MAX_YEAR).contains(&year) && (1..=12).contains(&month) {
            Some(Self { year, month })
        } else {
            None
        }
    }

    /// The month containing `date`, with the year clamped into range.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year().clamp(MIN_YEAR, MAX_YEAR),
            month: date.month(),
        }
    }

    /// Parse `YYYY-MM` without ever failing.
    ///
    /// Each component that is missing, non-numeric or out of range is replaced
    /// by the matching component of `today`.
    pub fn parse_lenient(text: &str, today: NaiveDate) -> Self {
        let fallback = Self::from_date(today);
        let mut parts = text.trim().splitn(3, '-');

        let year = parts
            .next()
            .and_then(|s| s.trim().parse::<i32>().ok())
            .filter(|y| (MIN_YEAR..=MAX_YEAR).contains(y));
        let month = parts
            .next()
            .and_then(|s| s.trim().parse::<u32>().ok())
            .filter(|m| (1..=12).contains(m));

        if year.is_none() || month.is_none() {
            log::warn!("month {text:?} is incomplete, filling from {fallback}");
        }

        Self {
            year: year.unwrap_or(fallback.year),
            month: month.unwrap_or(fallback.month),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn first_day(&self) -> NaiveDate {
        // Components are range-checked on construction.
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    /// Last calendar day: the day before the first of the following month.
    pub fn last_day(&self) -> NaiveDate {
        let (year, month) = if self.month == 12 {
            (self.year + 1, 1)
        } else {
            (self.year, self.month + 1)
        };
        NaiveDate::from_ymd_opt(year, month, 1)
            .and_then(|next| next.pred_opt())
            .unwrap_or(NaiveDate::MAX)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = FilterError;

    /// Strict `YYYY-MM` parse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || FilterError::InvalidMonth(s.to_string());
        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        if year.len() != 4 || month.len() != 2 {
            return Err(invalid());
        }
        let year = year.parse::<i32>().map_err(|_| invalid())?;
        let month = month.parse::<u32>().map_err(|_| invalid())?;
        YearMonth::new(year, month).ok_or_else(invalid)
    }
}
