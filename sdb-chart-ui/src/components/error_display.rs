//! Error display component.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
}

/// Displays a load failure in a styled box.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            style: "padding: 12px 16px; margin: 8px 0; background: #FEF2F2; color: #B91C1C; border-radius: 8px; border: 1px solid #FECACA;",
            strong { "Could not load sales data: " }
            "{props.message}"
        }
    }
}
