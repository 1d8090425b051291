//! Ranked category list next to the revenue donut.

use crate::palette::chart_color;
use dioxus::prelude::*;
use sdb_core::Category;
use sdb_engine::models::CategoryRevenue;
use sdb_engine::selection::ChartClick;
use sdb_utils::format::currency_thousands;

/// Top categories by revenue. Clicking a row toggles that category, the
/// same as clicking its donut slice.
#[component]
pub fn CategoryList(
    slices: Vec<CategoryRevenue>,
    #[props(!optional)] selected: Option<Category>,
    on_click: EventHandler<ChartClick>,
) -> Element {
    rsx! {
        ul {
            style: "list-style: none; margin: 0; padding: 0; display: flex; flex-direction: column; gap: 6px;",
            for (i, slice) in slices.into_iter().enumerate() {
                li {
                    key: "{slice.category}",
                    style: if selected == Some(slice.category) {
                        "display: flex; align-items: center; gap: 8px; padding: 4px 8px; border-radius: 6px; cursor: pointer; background: #eff6ff;"
                    } else {
                        "display: flex; align-items: center; gap: 8px; padding: 4px 8px; border-radius: 6px; cursor: pointer;"
                    },
                    onclick: move |_| on_click.call(ChartClick::category(slice.category)),
                    span {
                        style: "display: inline-block; width: 10px; height: 10px; border-radius: 50%; background: {chart_color(i)};",
                    }
                    span {
                        style: "flex: 1; font-size: 14px; color: #374151;",
                        "{slice.category}"
                    }
                    span {
                        style: "font-size: 14px; font-weight: 600; color: #111827;",
                        "{currency_thousands(slice.revenue)}"
                    }
                    span {
                        style: "font-size: 12px; color: #6b7280; width: 48px; text-align: right;",
                        "{slice.percentage}%"
                    }
                }
            }
        }
    }
}
