//! Reactive handle around [`DateFilter`].
//!
//! The filter lives in a `Signal`, so any component reading it re-renders when
//! it changes. The label is a `Memo` that only recomputes when the bounds move.

use dioxus::prelude::*;
use laporku_filter::{DateFilter, DateRange, FilterError, FilterMode, FilterOptions, YearMonth};
use std::future::Future;

/// Copyable handle returned by [`use_date_filter`].
#[derive(Clone, Copy, PartialEq)]
pub struct UseDateFilter {
    filter: Signal<DateFilter>,
    label: Memo<String>,
}

/// Create a date filter owned by the calling component.
///
/// `options` runs once, on the first render.
pub fn use_date_filter(options: impl FnOnce() -> FilterOptions) -> UseDateFilter {
    let filter = use_signal(|| DateFilter::new(options()));
    let label = use_memo(move || filter.read().label());
    UseDateFilter { filter, label }
}

impl UseDateFilter {
    /// The underlying signal, for reads not covered below.
    pub fn signal(&self) -> Signal<DateFilter> {
        self.filter
    }

    pub fn mode(&self) -> FilterMode {
        self.filter.read().mode()
    }

    pub fn selected_month(&self) -> YearMonth {
        self.filter.read().selected_month()
    }

    pub fn selected_year(&self) -> i32 {
        self.filter.read().selected_year()
    }

    pub fn range(&self) -> DateRange {
        self.filter.read().range()
    }

    pub fn from_date_string(&self) -> String {
        self.filter.read().from_date_string()
    }

    pub fn to_date_string(&self) -> String {
        self.filter.read().to_date_string()
    }

    /// Memoized `"from — to"` label.
    pub fn label(&self) -> String {
        self.label.read().clone()
    }

    pub fn set_mode(&mut self, mode: FilterMode) {
        self.filter.write().set_mode(mode);
    }

    pub fn set_selected_month(&mut self, text: &str) {
        self.filter.write().set_selected_month(text);
    }

    pub fn set_selected_year(&mut self, year: i32) {
        self.filter.write().set_selected_year(year);
    }

    pub fn set_from_date(&mut self, text: &str) -> Result<(), FilterError> {
        self.filter.write().set_from_date(text)
    }

    pub fn set_to_date(&mut self, text: &str) -> Result<(), FilterError> {
        self.filter.write().set_to_date(text)
    }

    pub fn apply(&mut self) {
        self.filter.write().apply();
    }

    pub fn reset(&mut self) {
        self.filter.write().reset();
    }

    /// Apply, then await `on_applied`. Its error is returned unchanged.
    ///
    /// The write guard is released before awaiting, so `on_applied` may read
    /// the filter.
    pub async fn apply_with<F, Fut, E>(mut self, on_applied: F) -> Result<(), E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<(), E>>,
    {
        self.apply();
        on_applied().await
    }

    /// Reset, then await `on_applied`. Its error is returned unchanged.
    pub async fn reset_with<F, Fut, E>(mut self, on_applied: F) -> Result<(), E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<(), E>>,
    {
        self.reset();
        on_applied().await
    }
}
