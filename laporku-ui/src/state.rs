//! Application state managed via Dioxus context.
//!
//! `AppState` bundles the app-wide signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;

/// Shared application state for Laporku pages.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            error_msg: Signal::new(None),
        }
    }

    /// Show `err` in the error banner.
    pub fn report_error(&mut self, err: impl std::fmt::Display) {
        log::error!("{err}");
        self.error_msg.set(Some(err.to_string()));
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
