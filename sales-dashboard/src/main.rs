//! Sales Analytics Dashboard
//!
//! Single-page dashboard over a static sales table: three dropdown filters,
//! five D3 charts and headline summary cards. Clicking a category slice or a
//! region bar cross-filters every other chart; clicking it again clears that
//! part of the selection.
//!
//! Data flow:
//! 1. `build.rs` copies `sales.csv` into `OUT_DIR`.
//! 2. `include_str!` embeds the CSV into the WASM binary.
//! 3. On mount, the CSV is parsed into the immutable record table.
//! 4. Any change to the filters or the selection rebuilds the whole
//!    `DashboardView` and redraws the charts.
//! 5. Chart clicks come back from JS through `js_bridge`, are queued on a
//!    coroutine channel, and toggle the selection signal.

mod charts;

use charts::{
    CLICKABLE_CHARTS, PERFORMANCE_CHART, REGIONAL_CHART, REVENUE_CHART, SALES_TREND_CHART,
    YOY_CHART,
};
use dioxus::prelude::*;
use futures_util::StreamExt;
use sdb_chart_ui::components::{
    ActiveSelections, CategoryList, ChartContainer, ChartHeader, DashboardFilters, ErrorDisplay,
    LoadingSpinner, RegionOverviewCards, StatTile, SummaryCards,
};
use sdb_chart_ui::js_bridge;
use sdb_chart_ui::palette;
use sdb_chart_ui::state::AppState;
use sdb_core::record::load_records;
use sdb_engine::aggregate::TOP_CATEGORY_LIST;
use sdb_engine::selection::ChartClick;
use sdb_engine::filter::FilterState;
use sdb_engine::view::{build_view, DashboardView};
use sdb_utils::format::{currency_thousands, millions, signed_percent, thousands};

/// The sales record table.
const SALES_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/sales.csv"));

const D3_SRC: &str = "https://cdn.jsdelivr.net/npm/d3@7";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("sales-dashboard-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    web_sys::console::log_1(&"[SDB] sales-dashboard App component mounted".into());

    let mut state = use_context_provider(AppState::new);

    // Parse the record table once on mount
    use_effect(move || {
        if SALES_CSV.trim().is_empty() {
            state
                .error_msg
                .set(Some("No sales data was bundled with this build".to_string()));
            state.loading.set(false);
            return;
        }
        match load_records(SALES_CSV) {
            Ok(records) => state.records.set(records),
            Err(e) => {
                log::error!("[SDB] app: failed to load sales records: {:#}", e);
                state.error_msg.set(Some(format!("{:#}", e)));
            }
        }
        state.loading.set(false);
    });

    // Chart clicks arrive from JS callbacks; apply them inside the runtime.
    let clicks = use_coroutine(move |mut rx: UnboundedReceiver<ChartClick>| async move {
        let mut state = state;
        while let Some(click) = rx.next().await {
            state.apply_click(&click);
        }
    });

    use_hook(move || {
        for id in CLICKABLE_CHARTS {
            js_bridge::register_click_handler(id, move |click| clicks.send(click));
        }
    });

    let view = use_memo(move || {
        build_view(
            &state.records.read(),
            &state.filters.read(),
            &state.selection.read(),
        )
    });

    // Redraw every chart whenever the view changes
    use_effect(move || {
        if (state.loading)() || (state.error_msg)().is_some() {
            return;
        }
        let view = view.read();
        let selection = (state.selection)();
        js_bridge::init_charts();
        charts::render_all(&view, &selection);
    });

    let selection = (state.selection)();
    let filters = (state.filters)();

    rsx! {
        document::Script { src: D3_SRC }
        div {
            style: "min-height: 100vh; background: #f9fafb; padding: 24px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",
            div {
                style: "max-width: 1280px; margin: 0 auto;",

                div {
                    style: "display: flex; justify-content: space-between; align-items: flex-start; flex-wrap: wrap; gap: 12px;",
                    div {
                        h1 {
                            style: "margin: 0; font-size: 30px; font-weight: 700; color: #111827;",
                            "Sales Analytics Dashboard"
                        }
                        p {
                            style: "margin: 4px 0 0; color: #4b5563;",
                            "Monitor performance across categories, regions, and time periods"
                        }
                    }
                    if selection.is_active() {
                        button {
                            style: "padding: 8px 14px; border: 1px solid #d1d5db; border-radius: 6px; background: white; cursor: pointer; font-size: 14px;",
                            onclick: move |_| state.clear_selection(),
                            "Clear Selections"
                        }
                    }
                }

                DashboardFilters {
                    filters,
                    on_change: move |next: FilterState| state.filters.set(next),
                }

                if let Some(err) = (state.error_msg)() {
                    ErrorDisplay { message: err }
                } else if (state.loading)() {
                    LoadingSpinner {}
                } else {
                    Dashboard { view: view() }
                }
            }
        }
    }
}

/// Summary cards, the five chart cards and the regional overview.
#[component]
fn Dashboard(view: DashboardView) -> Element {
    let mut state = use_context::<AppState>();
    let selection = (state.selection)();
    let trend = &view.sales_trend;
    let breakdown = &view.revenue_breakdown;
    let yoy = &view.yoy_growth;
    let performance = &view.performance;
    let regional = &view.regional;
    let top_categories = breakdown.top(TOP_CATEGORY_LIST).to_vec();

    rsx! {
        SummaryCards { metrics: view.summary.clone() }

        ActiveSelections {
            selection,
            on_clear: move |_| state.clear_selection(),
        }

        div {
            style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(480px, 1fr)); gap: 24px; margin-bottom: 24px;",

            ChartContainer {
                id: SALES_TREND_CHART.to_string(),
                min_height: 300,
                ChartHeader {
                    title: "Sales Trend".to_string(),
                    value: millions(trend.total_sales),
                    change: trend.growth,
                }
            }

            ChartContainer {
                id: REVENUE_CHART.to_string(),
                min_height: 220,
                ChartHeader {
                    title: "Revenue by Category".to_string(),
                    value: millions(breakdown.total_revenue),
                    caption: "Total Revenue".to_string(),
                }
                CategoryList {
                    slices: top_categories,
                    selected: selection.category,
                    on_click: move |click: ChartClick| state.apply_click(&click),
                }
            }

            ChartContainer {
                id: YOY_CHART.to_string(),
                min_height: 300,
                ChartHeader {
                    title: "Year-over-Year Growth".to_string(),
                    value: signed_percent(yoy.average_growth),
                    caption: "Average".to_string(),
                }
            }

            ChartContainer {
                id: PERFORMANCE_CHART.to_string(),
                min_height: 220,
                ChartHeader {
                    title: "Customer & Units Performance".to_string(),
                    value: thousands(performance.latest_customers),
                    change: performance.customer_growth,
                }
                div {
                    style: "display: grid; grid-template-columns: repeat(3, 1fr); gap: 12px; margin-bottom: 12px;",
                    StatTile {
                        value: thousands(performance.latest_customers),
                        label: "Customers".to_string(),
                        color: palette::CUSTOMERS.to_string(),
                    }
                    StatTile {
                        value: thousands(performance.latest_units),
                        label: "Units Sold".to_string(),
                        color: palette::UNITS.to_string(),
                    }
                    StatTile {
                        value: format!("${:.0}", performance.latest_avg_order_value),
                        label: "Avg Order Value".to_string(),
                    }
                }
            }
        }

        div {
            style: "display: grid; grid-template-columns: 2fr 1fr; gap: 24px;",
            ChartContainer {
                id: REGIONAL_CHART.to_string(),
                min_height: 320,
                ChartHeader {
                    title: "Regional Sales by State".to_string(),
                    value: millions(regional.total_sales),
                    caption: format!("{} stores, +{} new", regional.total_stores, regional.total_new_stores),
                }
                div {
                    style: "display: grid; grid-template-columns: repeat(3, 1fr); gap: 12px; margin-bottom: 12px;",
                    StatTile {
                        value: currency_thousands(regional.total_sales / regional.states.len().max(1) as f64),
                        label: "Avg per State".to_string(),
                    }
                    StatTile {
                        value: regional.total_stores.to_string(),
                        label: "Stores".to_string(),
                    }
                    StatTile {
                        value: signed_percent(regional.average_variance),
                        label: "Avg Variance".to_string(),
                        color: palette::change_color(regional.average_variance).to_string(),
                    }
                }
            }
            RegionOverviewCards {
                overview: regional.overview.clone(),
                on_click: move |click: ChartClick| state.apply_click(&click),
            }
        }
    }
}
