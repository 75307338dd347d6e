use std::fmt;

/// Errors raised by the strict parsers and the custom-bound setters.
///
/// Month and year selection never fail; they fall back to the clock instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    /// Text that is not a `YYYY-MM-DD` calendar date.
    InvalidDate(String),
    /// Text that is not a `YYYY-MM` month.
    InvalidMonth(String),
    /// Text that names no [`FilterMode`](crate::FilterMode).
    UnknownMode(String),
}

impl fmt::Display for FilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterError::InvalidDate(s) => write!(f, "Invalid date (expected YYYY-MM-DD): {s:?}"),
            FilterError::InvalidMonth(s) => write!(f, "Invalid month (expected YYYY-MM): {s:?}"),
            FilterError::UnknownMode(s) => write!(f, "Unknown filter mode: {s:?}"),
        }
    }
}

impl std::error::Error for FilterError {}
