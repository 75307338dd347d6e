//! The report-period filter state and its lifecycle operations.

use crate::clock::{Clock, SystemClock};
use crate::date_range::DateRange;
use crate::dates::{format_date, parse_date};
use crate::error::FilterError;
use crate::mode::FilterMode;
use crate::options::FilterOptions;
use crate::year_month::YearMonth;
use chrono::{Datelike, NaiveDate};
use std::future::Future;

/// Month/year/custom date filter deriving an inclusive [`DateRange`].
///
/// Consumers write the mode and its inputs through the setters, then call
/// [`apply`](Self::apply) (or [`apply_with`](Self::apply_with) to run a
/// follow-up such as reloading a report).
#[derive(Debug, Clone, PartialEq)]
pub struct DateFilter<C: Clock = SystemClock> {
    clock: C,
    mode: FilterMode,
    selected_month: YearMonth,
    selected_year: i32,
    range: DateRange,
    default_mode: FilterMode,
    default_month: YearMonth,
}

impl DateFilter<SystemClock> {
    /// Create a filter reading "now" from the local wall clock.
    pub fn new(options: FilterOptions) -> Self {
        Self::with_clock(options, SystemClock)
    }
}

impl Default for DateFilter<SystemClock> {
    fn default() -> Self {
        Self::new(FilterOptions::default())
    }
}

impl<C: Clock> DateFilter<C> {
    /// Create a filter and derive the default month's range immediately.
    pub fn with_clock(options: FilterOptions, clock: C) -> Self {
        let today = clock.today();
        let default_mode = options.default_mode.unwrap_or_default();
        let default_month = match options.default_month.as_deref() {
            Some(text) if !text.trim().is_empty() => YearMonth::parse_lenient(text, today),
            _ => YearMonth::from_date(today),
        };

        let mut filter = Self {
            clock,
            mode: default_mode,
            selected_month: default_month,
            selected_year: today.year(),
            range: DateRange::new(today, today),
            default_mode,
            default_month,
        };
        filter.derive_month_range();
        filter
    }

    pub fn mode(&self) -> FilterMode {
        self.mode
    }

    pub fn selected_month(&self) -> YearMonth {
        self.selected_month
    }

    pub fn selected_year(&self) -> i32 {
        self.selected_year
    }

    pub fn default_mode(&self) -> FilterMode {
        self.default_mode
    }

    pub fn default_month(&self) -> YearMonth {
        self.default_month
    }

    pub fn range(&self) -> DateRange {
        self.range
    }

    pub fn from_date(&self) -> NaiveDate {
        self.range.from
    }

    pub fn to_date(&self) -> NaiveDate {
        self.range.to
    }

    /// Lower bound as `YYYY-MM-DD`.
    pub fn from_date_string(&self) -> String {
        format_date(&self.range.from)
    }

    /// Upper bound as `YYYY-MM-DD`.
    pub fn to_date_string(&self) -> String {
        format_date(&self.range.to)
    }

    /// Human-readable range, rebuilt from the current bounds on every call.
    pub fn label(&self) -> String {
        self.range.label()
    }

    pub fn set_mode(&mut self, mode: FilterMode) {
        self.mode = mode;
    }

    /// Select a month from `YYYY-MM` text.
    ///
    /// Empty text selects the default month. Missing or invalid components
    /// fall back to the current year/month; this never fails.
    pub fn set_selected_month(&mut self, text: &str) {
        self.selected_month = if text.trim().is_empty() {
            self.default_month
        } else {
            YearMonth::parse_lenient(text, self.clock.today())
        };
    }

    pub fn set_selected_year(&mut self, year: i32) {
        self.selected_year = year;
    }

    /// Set the lower bound directly. Only the format is checked.
    pub fn set_from_date(&mut self, text: &str) -> Result<(), FilterError> {
        let from = parse_date(text).inspect_err(|e| log::warn!("{e}"))?;
        self.range.from = from;
        Ok(())
    }

    /// Set the upper bound directly. Only the format is checked.
    pub fn set_to_date(&mut self, text: &str) -> Result<(), FilterError> {
        let to = parse_date(text).inspect_err(|e| log::warn!("{e}"))?;
        self.range.to = to;
        Ok(())
    }

    /// Set both bounds. Nothing changes unless both parse; order is not checked.
    pub fn set_custom_range(&mut self, from: &str, to: &str) -> Result<(), FilterError> {
        let range = DateRange::new(parse_date(from)?, parse_date(to)?);
        if !range.is_ordered() {
            log::debug!("custom range {range} ends before it starts");
        }
        self.range = range;
        Ok(())
    }

    /// Set the bounds to the first and last day of the selected month.
    pub fn derive_month_range(&mut self) {
        self.range = DateRange::month(self.selected_month);
        log::debug!("month {} -> {}", self.selected_month, self.range);
    }

    /// Set the bounds to January 1 and December 31.
    ///
    /// Uses `year`, else the selected year, else the current year. Zero counts
    /// as unset at each step. Does not change the selected year.
    pub fn set_year_range(&mut self, year: Option<i32>) {
        let year = match year.filter(|y| *y != 0).unwrap_or(self.selected_year) {
            0 => self.clock.today().year(),
            year => year,
        };
        self.range = DateRange::year(year);
        log::debug!("year {year} -> {}", self.range);
    }

    /// Recompute the range for the active mode. Custom bounds are left alone.
    pub fn apply(&mut self) {
        match self.mode {
            FilterMode::Month => self.derive_month_range(),
            FilterMode::Year => self.set_year_range(Some(self.selected_year)),
            FilterMode::Custom => {}
        }
        log::info!("applied {} filter: {}", self.mode, self.range);
    }

    /// [`apply`](Self::apply), then await `on_applied`.
    ///
    /// An error from `on_applied` is returned as-is; the recomputed range stays.
    pub async fn apply_with<F, Fut, E>(&mut self, on_applied: F) -> Result<(), E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<(), E>>,
    {
        self.apply();
        on_applied().await
    }

    /// Restore the defaults and derive the default month's range.
    ///
    /// The month range is derived even when the default mode is `Year`.
    pub fn reset(&mut self) {
        self.mode = self.default_mode;
        self.selected_month = self.default_month;
        self.selected_year = self.clock.today().year();
        self.derive_month_range();
        log::info!("reset filter to {} {}", self.mode, self.selected_month);
    }

    /// [`reset`](Self::reset), then await `on_applied`, returning its error as-is.
    pub async fn reset_with<F, Fut, E>(&mut self, on_applied: F) -> Result<(), E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<(), E>>,
    {
        self.reset();
        on_applied().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use std::cell::Cell;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn filter_on(y: i32, m: u32, d: u32) -> DateFilter<FixedClock> {
        DateFilter::with_clock(FilterOptions::default(), FixedClock(date(y, m, d)))
    }

    #[test]
    fn test_defaults_from_clock() {
        let filter = filter_on(2025, 7, 15);
        assert_eq!(filter.mode(), FilterMode::Month);
        assert_eq!(filter.default_mode(), FilterMode::Month);
        assert_eq!(filter.default_month().to_string(), "2025-07");
        assert_eq!(filter.selected_month().to_string(), "2025-07");
        assert_eq!(filter.selected_year(), 2025);
        assert_eq!(filter.from_date_string(), "2025-07-01");
        assert_eq!(filter.to_date_string(), "2025-07-31");
    }

    #[test]
    fn test_construction_derives_default_month_not_today() {
        let options = FilterOptions::default().default_month("2023-11");
        let filter = DateFilter::with_clock(options, FixedClock(date(2025, 7, 15)));
        assert_eq!(filter.range(), DateRange::new(date(2023, 11, 1), date(2023, 11, 30)));
    }

    #[test]
    fn test_defaults_from_options() {
        let options = FilterOptions::default()
            .default_mode(FilterMode::Year)
            .default_month("2024-02");
        let filter = DateFilter::with_clock(options, FixedClock(date(2025, 7, 15)));
        assert_eq!(filter.mode(), FilterMode::Year);
        assert_eq!(filter.selected_month().to_string(), "2024-02");
        // Construction always derives the month range.
        assert_eq!(filter.range(), DateRange::new(date(2024, 2, 1), date(2024, 2, 29)));
    }

    #[test]
    fn test_empty_default_month_uses_clock() {
        let options = FilterOptions::default().default_month("");
        let filter = DateFilter::with_clock(options, FixedClock(date(2025, 7, 15)));
        assert_eq!(filter.default_month().to_string(), "2025-07");
    }

    #[test]
    fn test_month_range_ends_on_last_day() {
        let mut filter = filter_on(2025, 7, 15);
        for (month, last) in [("2024-02", 29), ("2023-02", 28), ("2024-04", 30), ("2024-12", 31)] {
            filter.set_selected_month(month);
            filter.derive_month_range();
            assert_eq!(filter.from_date_string(), format!("{month}-01"));
            assert_eq!(filter.to_date_string(), format!("{month}-{last}"));
        }
    }

    #[test]
    fn test_derive_month_range_is_idempotent() {
        let mut filter = filter_on(2025, 7, 15);
        filter.set_selected_month("2024-11");
        filter.derive_month_range();
        let first = filter.range();
        filter.derive_month_range();
        assert_eq!(filter.range(), first);
    }

    #[test]
    fn test_selected_month_falls_back() {
        let mut filter = filter_on(2025, 7, 15);
        filter.set_selected_month("2024");
        assert_eq!(filter.selected_month().to_string(), "2024-07");
        filter.set_selected_month("2023-05");
        filter.set_selected_month("");
        assert_eq!(filter.selected_month(), filter.default_month());
    }

    #[test]
    fn test_set_year_range() {
        let mut filter = filter_on(2025, 7, 15);
        for year in [1999, 2023, 2024] {
            filter.set_year_range(Some(year));
            assert_eq!(filter.from_date_string(), format!("{year}-01-01"));
            assert_eq!(filter.to_date_string(), format!("{year}-12-31"));
        }
        assert_eq!(filter.selected_year(), 2025);
    }

    #[test]
    fn test_set_year_range_fallbacks() {
        let mut filter = filter_on(2025, 7, 15);
        filter.set_selected_year(2020);
        filter.set_year_range(None);
        assert_eq!(filter.from_date_string(), "2020-01-01");

        filter.set_selected_year(0);
        filter.set_year_range(None);
        assert_eq!(filter.from_date_string(), "2025-01-01");

        filter.set_year_range(Some(0));
        assert_eq!(filter.to_date_string(), "2025-12-31");
    }

    #[test]
    fn test_set_year_range_zero_uses_selected_year_first() {
        let mut filter = filter_on(2025, 7, 15);
        filter.set_selected_year(2020);
        filter.set_year_range(Some(0));
        assert_eq!(filter.from_date_string(), "2020-01-01");
        assert_eq!(filter.to_date_string(), "2020-12-31");
    }

    #[test]
    fn test_set_year_range_clamps_odd_years() {
        let mut filter = filter_on(2025, 7, 15);
        filter.set_year_range(Some(-44));
        assert_eq!(filter.from_date_string(), "0001-01-01");
        filter.set_year_range(Some(20_000));
        assert_eq!(filter.to_date_string(), "9999-12-31");
        filter.set_year_range(Some(800));
        assert_eq!(filter.from_date_string(), "0800-01-01");
    }

    #[test]
    fn test_apply_month() {
        let mut filter = filter_on(2025, 7, 15);
        filter.set_selected_month("2024-02");
        filter.apply();
        assert_eq!(filter.from_date_string(), "2024-02-01");
        assert_eq!(filter.to_date_string(), "2024-02-29");
    }

    #[test]
    fn test_apply_year() {
        let mut filter = filter_on(2025, 7, 15);
        filter.set_mode(FilterMode::Year);
        filter.set_selected_year(2023);
        filter.apply();
        assert_eq!(filter.from_date_string(), "2023-01-01");
        assert_eq!(filter.to_date_string(), "2023-12-31");
    }

    #[test]
    fn test_apply_custom_keeps_bounds() {
        let mut filter = filter_on(2025, 7, 15);
        filter.set_mode(FilterMode::Custom);
        filter.set_custom_range("2025-01-10", "2025-01-20").unwrap();
        filter.set_selected_month("2020-01");
        filter.set_selected_year(2019);
        filter.apply();
        assert_eq!(filter.from_date_string(), "2025-01-10");
        assert_eq!(filter.to_date_string(), "2025-01-20");
    }

    #[test]
    fn test_custom_range_is_not_reordered() {
        let mut filter = filter_on(2025, 7, 15);
        filter.set_mode(FilterMode::Custom);
        filter.set_custom_range("2025-03-01", "2025-02-01").unwrap();
        filter.apply();
        assert_eq!(filter.range(), DateRange::new(date(2025, 3, 1), date(2025, 2, 1)));
    }

    #[test]
    fn test_bound_setters_reject_bad_format() {
        let mut filter = filter_on(2025, 7, 15);
        let before = filter.range();
        assert_eq!(
            filter.set_from_date("10/01/2025"),
            Err(FilterError::InvalidDate("10/01/2025".to_string()))
        );
        assert!(filter.set_to_date("2025-13-01").is_err());
        assert!(filter.set_custom_range("2025-01-10", "nope").is_err());
        assert_eq!(filter.range(), before);

        filter.set_from_date("2025-07-04").unwrap();
        filter.set_to_date("2025-07-09").unwrap();
        assert_eq!(filter.range(), DateRange::new(date(2025, 7, 4), date(2025, 7, 9)));
    }

    #[test]
    fn test_label_follows_bounds() {
        let mut filter = filter_on(2025, 7, 15);
        assert_eq!(filter.label(), "2025-07-01 \u{2014} 2025-07-31");
        filter.set_from_date("2025-07-10").unwrap();
        assert_eq!(filter.label(), "2025-07-10 \u{2014} 2025-07-31");
        filter.set_year_range(Some(2021));
        assert_eq!(filter.label(), "2021-01-01 \u{2014} 2021-12-31");
    }

    #[test]
    fn test_reset_restores_defaults() {
        let options = FilterOptions::default().default_month("2024-02");
        let mut filter = DateFilter::with_clock(options, FixedClock(date(2025, 7, 15)));
        filter.set_mode(FilterMode::Custom);
        filter.set_selected_month("2021-09");
        filter.set_selected_year(1999);
        filter.set_custom_range("2020-01-01", "2020-01-02").unwrap();

        filter.reset();
        assert_eq!(filter.mode(), FilterMode::Month);
        assert_eq!(filter.selected_month().to_string(), "2024-02");
        assert_eq!(filter.selected_year(), 2025);
        assert_eq!(filter.from_date_string(), "2024-02-01");
        assert_eq!(filter.to_date_string(), "2024-02-29");
    }

    #[test]
    fn test_reset_derives_month_even_in_year_mode() {
        // Reset keeps the year default mode but still lands on a month range.
        let options = FilterOptions::default().default_mode(FilterMode::Year);
        let mut filter = DateFilter::with_clock(options, FixedClock(date(2025, 7, 15)));
        filter.set_selected_year(2022);
        filter.apply();
        assert_eq!(filter.from_date_string(), "2022-01-01");

        filter.reset();
        assert_eq!(filter.mode(), FilterMode::Year);
        assert_eq!(filter.from_date_string(), "2025-07-01");
        assert_eq!(filter.to_date_string(), "2025-07-31");
    }

    #[tokio::test]
    async fn test_apply_with_runs_follow_up_after_recompute() {
        let mut filter = filter_on(2025, 7, 15);
        filter.set_selected_month("2024-02");
        let calls = Cell::new(0);
        filter
            .apply_with(|| async {
                calls.set(calls.get() + 1);
                Ok::<(), anyhow::Error>(())
            })
            .await
            .unwrap();
        assert_eq!(calls.get(), 1);
        assert_eq!(filter.to_date_string(), "2024-02-29");
    }

    #[derive(Debug, PartialEq)]
    struct RefreshFailed(&'static str);

    #[tokio::test]
    async fn test_apply_with_propagates_error_verbatim() {
        let mut filter = filter_on(2025, 7, 15);
        filter.set_mode(FilterMode::Year);
        filter.set_selected_year(2022);
        let result = filter
            .apply_with(|| async { Err(RefreshFailed("network down")) })
            .await;
        assert_eq!(result, Err(RefreshFailed("network down")));
        // Not rolled back.
        assert_eq!(filter.from_date_string(), "2022-01-01");
    }

    #[tokio::test]
    async fn test_reset_with_propagates_error_after_restore() {
        let mut filter = filter_on(2025, 7, 15);
        filter.set_mode(FilterMode::Custom);
        filter.set_custom_range("2020-01-01", "2020-12-31").unwrap();
        let result = filter
            .reset_with(|| async { Err(RefreshFailed("timeout")) })
            .await;
        assert_eq!(result, Err(RefreshFailed("timeout")));
        assert_eq!(filter.mode(), FilterMode::Month);
        assert_eq!(filter.from_date_string(), "2025-07-01");
    }

    #[tokio::test]
    async fn test_reset_with_awaits_suspending_follow_up() {
        let mut filter = filter_on(2025, 7, 15);
        let done = Cell::new(false);
        filter
            .reset_with(|| async {
                tokio::task::yield_now().await;
                done.set(true);
                Ok::<(), anyhow::Error>(())
            })
            .await
            .unwrap();
        assert!(done.get());
    }
}
