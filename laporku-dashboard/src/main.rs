//! Laporku dashboard
//!
//! Bookkeeping dashboard page with a report-period filter. The period is a
//! month, a year, or a custom range; applying or resetting the filter runs a
//! follow-up that rebuilds the period summary.
//!
//! Data flow:
//! 1. `use_date_filter` derives the current month's range on mount.
//! 2. A one-time hook builds the initial summary.
//! 3. Apply/Reset recompute the range, then await `refresh_report`.
//! 4. A failed refresh surfaces in the error banner; the new range is kept.

mod report;

use dioxus::prelude::*;
use laporku_filter::FilterOptions;
use laporku_ui::components::{DateFilterPicker, ErrorBanner, FilterLabel};
use laporku_ui::hooks::{use_date_filter, UseDateFilter};
use laporku_ui::state::AppState;
use report::ReportSummary;

/// DOM id the app mounts into.
const ROOT_ELEMENT_ID: &str = "laporku-root";
const SITE_NAME: &str = "Laporku";
/// Document language of the page.
const DOCUMENT_LANG: &str = "id";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname(ROOT_ELEMENT_ID))
        .launch(App);
}

/// Follow-up action for the filter: rebuild the summary for the current range.
async fn refresh_report(
    mut state: AppState,
    filter: UseDateFilter,
    mut summary: Signal<Option<ReportSummary>>,
) -> anyhow::Result<()> {
    state.error_msg.set(None);

    match ReportSummary::build(filter.mode(), filter.range()) {
        Ok(report) => {
            log::info!("report summary {}", serde_json::to_string(&report)?);
            summary.set(Some(report));
            Ok(())
        }
        Err(err) => {
            summary.set(None);
            Err(err)
        }
    }
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);
    let filter = use_date_filter(FilterOptions::default);
    let summary: Signal<Option<ReportSummary>> = use_signal(|| None);

    // ─── Initial summary, once on mount ───
    use_hook(move || {
        spawn(async move {
            if let Err(err) = refresh_report(state, filter, summary).await {
                state.report_error(err);
            }
        });
    });

    let on_apply = move |_: ()| {
        spawn(async move {
            let result = filter
                .apply_with(|| refresh_report(state, filter, summary))
                .await;
            if let Err(err) = result {
                state.report_error(err);
            }
        });
    };

    let on_reset = move |_: ()| {
        spawn(async move {
            let result = filter
                .reset_with(|| refresh_report(state, filter, summary))
                .await;
            if let Err(err) = result {
                state.report_error(err);
            }
        });
    };

    // ─── Render ───
    rsx! {
        document::Title { "{SITE_NAME}" }
        div {
            lang: DOCUMENT_LANG,
            style: "max-width: 900px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            h2 {
                style: "margin: 0 0 8px 0;",
                "{SITE_NAME} \u{00B7} Report"
            }

            ErrorBanner {}

            DateFilterPicker { filter, on_apply, on_reset }

            div {
                style: "margin-top: 12px; padding-top: 8px; border-top: 1px solid #e0e0e0;",
                FilterLabel { filter }
                if let Some(report) = summary.read().as_ref() {
                    SummaryCard { summary: report.clone() }
                }
            }
        }
    }
}

/// Totals for the active period.
#[component]
fn SummaryCard(summary: ReportSummary) -> Element {
    rsx! {
        div {
            style: "margin-top: 8px; padding: 12px 16px; background: #F5F9FF; border: 1px solid #BBDEFB; border-radius: 4px;",
            p {
                style: "margin: 0 0 4px 0; font-size: 12px; color: #666;",
                "{summary.mode} report"
            }
            p {
                style: "margin: 0; font-size: 14px;",
                "{summary.from} to {summary.to}: {summary.days} days"
            }
        }
    }
}
