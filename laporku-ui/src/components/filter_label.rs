//! Active period label.

use crate::hooks::UseDateFilter;
use dioxus::prelude::*;

/// Shows the filter's `"from — to"` label. Re-renders only when the bounds change.
#[component]
pub fn FilterLabel(filter: UseDateFilter) -> Element {
    let label = filter.label();
    rsx! {
        p {
            style: "margin: 0; font-size: 13px; color: #444;",
            "Showing: "
            strong { "{label}" }
        }
    }
}
