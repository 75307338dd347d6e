//! Report-period date filter for the Laporku dashboard.
//!
//! The filter holds a [`FilterMode`] plus the inputs for that mode and derives
//! an inclusive [`DateRange`]:
//! - `Month`: first through last day of the selected month
//! - `Year`: January 1 through December 31 of the selected year
//! - `Custom`: caller-supplied bounds, taken as-is
//!
//! ```rust
//! use chrono::NaiveDate;
//! use laporku_filter::{DateFilter, FilterMode, FilterOptions, FixedClock};
//!
//! let today = NaiveDate::from_ymd_opt(2025, 7, 15).unwrap();
//! let mut filter = DateFilter::with_clock(FilterOptions::default(), FixedClock(today));
//! assert_eq!(filter.label(), "2025-07-01 \u{2014} 2025-07-31");
//!
//! filter.set_mode(FilterMode::Year);
//! filter.set_selected_year(2023);
//! filter.apply();
//! assert_eq!(filter.from_date_string(), "2023-01-01");
//! assert_eq!(filter.to_date_string(), "2023-12-31");
//! ```

pub mod clock;
pub mod date_range;
pub mod error;
pub mod filter;
pub mod mode;
pub mod options;
pub mod year_month;

pub use clock::{Clock, FixedClock, SystemClock};
pub use date_range::DateRange;
pub use error::FilterError;
pub use filter::DateFilter;
pub use mode::FilterMode;
pub use options::FilterOptions;
pub use year_month::YearMonth;

/// Date formatting shared by the filter and its consumers.
pub mod dates {
    use crate::error::FilterError;
    use chrono::NaiveDate;

    /// Format a NaiveDate as "YYYY-MM-DD"
    pub fn format_date(date: &NaiveDate) -> String {
        date.format("%Y-%m-%d").to_string()
    }

    /// Parse a date string in "YYYY-MM-DD" format
    pub fn parse_date(s: &str) -> Result<NaiveDate, FilterError> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map_err(|_| FilterError::InvalidDate(s.to_string()))
    }

}
