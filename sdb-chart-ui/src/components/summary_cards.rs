//! Headline metric cards.

use crate::palette::change_color;
use dioxus::prelude::*;
use sdb_engine::models::SummaryMetrics;
use sdb_utils::format::{millions, signed_percent, thousands};

#[derive(Props, Clone, PartialEq)]
pub struct SummaryCardsProps {
    pub metrics: SummaryMetrics,
}

/// Four cards: revenue with growth, sales, customers and units.
#[component]
pub fn SummaryCards(props: SummaryCardsProps) -> Element {
    let m = &props.metrics;
    let growth_style = format!("font-size: 13px; color: {};", change_color(m.revenue_growth));

    rsx! {
        div {
            style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); gap: 16px; margin-bottom: 24px;",
            MetricCard {
                title: "Total Revenue".to_string(),
                value: millions(m.total_revenue),
                div {
                    style: "{growth_style}",
                    "{signed_percent(m.revenue_growth)} YoY"
                }
            }
            MetricCard {
                title: "Total Sales".to_string(),
                value: millions(m.total_sales),
            }
            MetricCard {
                title: "Customers".to_string(),
                value: thousands(m.total_customers),
            }
            MetricCard {
                title: "Units Sold".to_string(),
                value: thousands(m.total_units),
            }
        }
    }
}

#[component]
fn MetricCard(title: String, value: String, children: Element) -> Element {
    rsx! {
        div {
            style: "border: 1px solid #e5e7eb; border-radius: 8px; background: white; padding: 16px;",
            div {
                style: "font-size: 13px; color: #6b7280; margin-bottom: 4px;",
                "{title}"
            }
            div {
                style: "font-size: 24px; font-weight: 700; color: #111827;",
                "{value}"
            }
            {children}
        }
    }
}
