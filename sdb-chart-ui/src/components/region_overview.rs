//! Region roll-up cards beside the regional sales chart.

use dioxus::prelude::*;
use sdb_engine::models::RegionOverview;
use sdb_engine::selection::ChartClick;
use sdb_utils::format::millions;

#[component]
pub fn RegionOverviewCards(
    overview: Vec<RegionOverview>,
    on_click: EventHandler<ChartClick>,
) -> Element {
    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 8px;",
            for item in overview.into_iter() {
                div {
                    key: "{item.region}",
                    style: if item.selected {
                        "padding: 10px 12px; border-radius: 8px; cursor: pointer; border: 2px solid #2563eb; background: #eff6ff;"
                    } else {
                        "padding: 10px 12px; border-radius: 8px; cursor: pointer; border: 1px solid #e5e7eb; background: white;"
                    },
                    onclick: move |_| on_click.call(ChartClick::region(item.region.label())),
                    div {
                        style: "display: flex; align-items: center; gap: 8px;",
                        span {
                            style: "display: inline-block; width: 10px; height: 10px; border-radius: 2px; background: {item.color};",
                        }
                        span {
                            style: "font-weight: 600; color: #111827;",
                            "{item.region}"
                        }
                        span {
                            style: "margin-left: auto; font-weight: 600; color: #111827;",
                            "{millions(item.sales)}"
                        }
                    }
                    div {
                        style: "font-size: 12px; color: #6b7280; margin-top: 2px;",
                        "{item.description}"
                    }
                    div {
                        style: "font-size: 12px; color: #4b5563; margin-top: 2px;",
                        "{item.stores} stores, +{item.new_stores} new"
                    }
                }
            }
        }
    }
}
