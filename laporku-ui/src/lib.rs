//! Shared Dioxus layer for the Laporku report-period filter.
//!
//! This crate provides:
//! - `hooks`: `use_date_filter`, a reactive handle around `laporku_filter::DateFilter`
//! - `state`: `AppState` with Dioxus Signals for error display
//! - `components`: Reusable RSX components (picker, label, error banner)

pub mod components;
pub mod hooks;
pub mod state;
