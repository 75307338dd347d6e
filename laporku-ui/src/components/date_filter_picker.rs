//! Report-period picker: mode selector, per-mode inputs, apply and reset.

use crate::hooks::UseDateFilter;
use crate::state::AppState;
use dioxus::prelude::*;
use laporku_filter::FilterMode;

const ROW_STYLE: &str = "margin: 8px 0; display: flex; gap: 12px; align-items: center; flex-wrap: wrap;";
const BUTTON_STYLE: &str = "padding: 6px 14px; border: 1px solid #ddd; border-radius: 4px; background: #fff; cursor: pointer;";

/// Display name for a mode in the selector.
fn mode_title(mode: FilterMode) -> &'static str {
    match mode {
        FilterMode::Month => "Monthly",
        FilterMode::Year => "Yearly",
        FilterMode::Custom => "Custom range",
    }
}

/// Year typed into the number input. Empty or invalid text reads as 0, which
/// the filter replaces with the current year.
fn parse_year_input(text: &str) -> i32 {
    text.trim().parse::<i32>().unwrap_or(0)
}

/// Picker for the report period.
///
/// Edits go straight into `filter`; the range is only recomputed when the user
/// presses Apply, which hands over to `on_apply`. Reset hands over to `on_reset`.
#[component]
pub fn DateFilterPicker(
    filter: UseDateFilter,
    on_apply: EventHandler<()>,
    on_reset: EventHandler<()>,
) -> Element {
    let mut state = use_context::<AppState>();
    let mut filter = filter;
    let mode = filter.mode();
    let month = filter.selected_month().to_string();
    let year = filter.selected_year();
    let from = filter.from_date_string();
    let to = filter.to_date_string();
    let mode_options = FilterMode::ALL.map(|m| (m, mode_title(m)));

    let on_mode_change = move |evt: Event<FormData>| match evt.value().parse::<FilterMode>() {
        Ok(mode) => filter.set_mode(mode),
        Err(err) => state.report_error(err),
    };

    let on_month_change = move |evt: Event<FormData>| {
        filter.set_selected_month(&evt.value());
    };

    let on_year_change = move |evt: Event<FormData>| {
        filter.set_selected_year(parse_year_input(&evt.value()));
    };

    let on_from_change = move |evt: Event<FormData>| {
        if let Err(err) = filter.set_from_date(&evt.value()) {
            state.report_error(err);
        }
    };

    let on_to_change = move |evt: Event<FormData>| {
        if let Err(err) = filter.set_to_date(&evt.value()) {
            state.report_error(err);
        }
    };

    rsx! {
        div {
            style: "{ROW_STYLE}",
            label {
                style: "font-weight: bold;",
                "Period: "
                select {
                    onchange: on_mode_change,
                    for (option_mode, title) in mode_options {
                        option {
                            key: "{option_mode}",
                            value: option_mode.as_str(),
                            selected: option_mode == mode,
                            "{title}"
                        }
                    }
                }
            }

            if mode == FilterMode::Month {
                label {
                    style: "font-weight: bold;",
                    "Month: "
                    input {
                        r#type: "month",
                        value: "{month}",
                        onchange: on_month_change,
                    }
                }
            }

            if mode == FilterMode::Year {
                label {
                    style: "font-weight: bold;",
                    "Year: "
                    input {
                        r#type: "number",
                        value: "{year}",
                        min: "1",
                        max: "9999",
                        style: "width: 80px;",
                        onchange: on_year_change,
                    }
                }
            }

            if mode == FilterMode::Custom {
                label {
                    style: "font-weight: bold;",
                    "From: "
                    input {
                        r#type: "date",
                        value: "{from}",
                        onchange: on_from_change,
                    }
                }
                label {
                    style: "font-weight: bold;",
                    "To: "
                    input {
                        r#type: "date",
                        value: "{to}",
                        onchange: on_to_change,
                    }
                }
            }
        }
        div {
            style: "{ROW_STYLE}",
            button {
                style: "{BUTTON_STYLE}",
                onclick: move |_| on_apply.call(()),
                "Apply"
            }
            button {
                style: "{BUTTON_STYLE}",
                onclick: move |_| on_reset.call(()),
                "Reset"
            }
        }
    }
}
