//! Chart header with title and headline figures.

use crate::palette::change_color;
use dioxus::prelude::*;
use sdb_utils::format::signed_percent;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    /// Chart title
    pub title: String,
    /// Headline figure shown on the right (e.g. "$4.2M")
    #[props(default = String::new())]
    pub value: String,
    /// Signed percent change shown under the headline figure
    pub change: Option<f64>,
    /// Small caption under the headline figure (e.g. "Average")
    #[props(default = String::new())]
    pub caption: String,
}

/// Header for chart cards: title on the left, figures on the right.
#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: space-between; align-items: center; padding-bottom: 12px; margin-bottom: 12px; border-bottom: 1px solid #f3f4f6;",
            h3 {
                style: "margin: 0; font-size: 18px; font-weight: 600; color: #111827;",
                "{props.title}"
            }
            div {
                style: "text-align: right;",
                if !props.value.is_empty() {
                    div {
                        style: "font-size: 20px; font-weight: 600; color: #111827;",
                        "{props.value}"
                    }
                }
                if let Some(change) = props.change {
                    div {
                        style: "font-size: 14px; color: {change_color(change)};",
                        "{signed_percent(change)}"
                    }
                }
                if !props.caption.is_empty() {
                    div {
                        style: "font-size: 14px; color: #6b7280;",
                        "{props.caption}"
                    }
                }
            }
        }
    }
}
