//! Reusable Dioxus RSX components for Laporku pages.

mod date_filter_picker;
mod error_banner;
mod filter_label;

pub use date_filter_picker::DateFilterPicker;
pub use error_banner::ErrorBanner;
pub use filter_label::FilterLabel;
