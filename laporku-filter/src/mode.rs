use crate::error::FilterError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which strategy produces the active date range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    /// First through last day of the selected month.
    #[default]
    Month,
    /// January 1 through December 31 of the selected year.
    Year,
    /// Caller-supplied bounds.
    Custom,
}

impl FilterMode {
    pub const ALL: [FilterMode; 3] = [FilterMode::Month, FilterMode::Year, FilterMode::Custom];

    pub fn as_str(&self) -> &'static str {
        match self {
            FilterMode::Month => "month",
            FilterMode::Year => "year",
            FilterMode::Custom => "custom",
        }
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterMode {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "month" => Ok(FilterMode::Month),
            "year" => Ok(FilterMode::Year),
            "custom" => Ok(FilterMode::Custom),
            other => Err(FilterError::UnknownMode(other.to_string())),
        }
    }
}
