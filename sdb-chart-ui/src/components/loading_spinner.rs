//! Placeholder shown while the sales table loads.

use dioxus::prelude::*;

/// Placeholder shown while the record table is parsed.
#[component]
pub fn LoadingSpinner(#[props(default = "Loading sales data...".to_string())] message: String) -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: center; align-items: center; padding: 40px; color: #6b7280;",
            "{message}"
        }
    }
}
