//! Construction options for [`DateFilter`](crate::DateFilter).

use crate::mode::FilterMode;
use serde::Deserialize;

/// Defaults restored by `reset`.
///
/// Deserializes from `{ "defaultMode": "year", "defaultMonth": "2024-02" }`;
/// both keys are optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterOptions {
    /// Mode restored on reset. `Month` when unset.
    pub default_mode: Option<FilterMode>,
    /// `YYYY-MM` restored on reset. The current month when unset or empty.
    pub default_month: Option<String>,
}

impl FilterOptions {
    pub fn default_mode(mut self, mode: FilterMode) -> Self {
        self.default_mode = Some(mode);
        self
    }

    pub fn default_month(mut self, month: impl Into<String>) -> Self {
        self.default_month = Some(month.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json() {
        let options: FilterOptions =
            serde_json::from_str(r#"{ "defaultMode": "year", "defaultMonth": "2024-02" }"#).unwrap();
        assert_eq!(
            options,
            FilterOptions::default()
                .default_mode(FilterMode::Year)
                .default_month("2024-02")
        );
    }

    #[test]
    fn test_from_empty_json() {
        let options: FilterOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, FilterOptions::default());
    }

    #[test]
    fn test_rejects_unknown_mode() {
        assert!(serde_json::from_str::<FilterOptions>(r#"{ "defaultMode": "week" }"#).is_err());
    }
}
