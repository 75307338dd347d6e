//! Dismissable error banner.

use crate::state::AppState;
use dioxus::prelude::*;

/// Displays `AppState::error_msg` in a styled box until dismissed.
#[component]
pub fn ErrorBanner() -> Element {
    let mut state = use_context::<AppState>();
    let Some(message) = state.error_msg.read().clone() else {
        return rsx! {};
    };

    rsx! {
        div {
            style: "display: flex; justify-content: space-between; align-items: center; padding: 12px 16px; margin: 8px 0; background: #FFEBEE; color: #C62828; border-radius: 4px; border: 1px solid #EF9A9A;",
            span {
                strong { "Error: " }
                "{message}"
            }
            button {
                style: "border: none; background: transparent; color: #C62828; cursor: pointer; font-size: 16px;",
                title: "Dismiss",
                onclick: move |_| state.error_msg.set(None),
                "\u{00D7}"
            }
        }
    }
}
