//! Period summary rebuilt by the filter's follow-up action.

use laporku_filter::dates::format_date;
use laporku_filter::{DateRange, FilterMode};
use serde::Serialize;

/// What the report page shows for the active period.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportSummary {
    pub mode: FilterMode,
    /// `"from — to"` label of the period
    pub period: String,
    pub from: String,
    pub to: String,
    /// Days covered, both ends included
    pub days: usize,
}

impl ReportSummary {
    /// Summarise `range`. Fails when a custom range ends before it starts.
    pub fn build(mode: FilterMode, range: DateRange) -> anyhow::Result<Self> {
        if !range.is_ordered() {
            anyhow::bail!(
                "The selected period ends on {} before it starts on {}.",
                format_date(&range.to),
                format_date(&range.from)
            );
        }

        Ok(Self {
            mode,
            period: range.label(),
            from: format_date(&range.from),
            to: format_date(&range.to),
            days: range.num_days(),
        })
    }
}
