//! Single-figure tile used under chart headers.

use dioxus::prelude::*;

/// Small centred figure with a label underneath.
#[component]
pub fn StatTile(
    value: String,
    label: String,
    #[props(default = "#111827".to_string())] color: String,
) -> Element {
    rsx! {
        div {
            style: "text-align: center; padding: 12px; background: #f9fafb; border-radius: 8px; border: 1px solid #e5e7eb;",
            div {
                style: "font-size: 20px; font-weight: 600; color: {color};",
                "{value}"
            }
            div {
                style: "font-size: 13px; color: #4b5563;",
                "{label}"
            }
        }
    }
}
