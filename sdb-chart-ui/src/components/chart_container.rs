//! Chart card with a header slot and a D3 render target.

use dioxus::prelude::*;

/// Props for ChartContainer
#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// The DOM id for the chart target (D3 will render into this)
    pub id: String,
    /// Minimum height of the render target in pixels
    #[props(default = 280)]
    pub min_height: u32,
    /// Header, legends and side lists around the chart
    pub children: Element,
}

/// A bordered card holding a D3.js chart.
///
/// `children` render above the chart target; the target div itself is left
/// empty for the chart scripts.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let target_style = format!("min-height: {}px; width: 100%;", props.min_height);

    rsx! {
        div {
            style: "border: 1px solid #e5e7eb; border-radius: 8px; background: white; box-shadow: 0 1px 2px rgb(0 0 0 / 0.05); padding: 16px 24px;",
            {props.children}
            div {
                id: "{props.id}",
                style: "{target_style}",
            }
        }
    }
}
