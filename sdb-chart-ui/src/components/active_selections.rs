//! Chips for the current cross-filter selection.

use dioxus::prelude::*;
use sdb_engine::selection::Selection;

/// Shows the selected category and region with a clear button.
/// Renders nothing when no selection is active.
#[component]
pub fn ActiveSelections(selection: Selection, on_clear: EventHandler<()>) -> Element {
    if !selection.is_active() {
        return rsx! {};
    }

    let chip = "display: inline-block; padding: 2px 10px; border-radius: 9999px; font-size: 13px;";

    rsx! {
        div {
            style: "display: flex; align-items: center; gap: 8px; padding: 8px 12px; margin-bottom: 16px; background: #eff6ff; border: 1px solid #bfdbfe; border-radius: 8px;",
            span {
                style: "font-size: 13px; font-weight: 600; color: #1e40af;",
                "Active selections:"
            }
            if let Some(category) = selection.category {
                span {
                    style: "{chip} background: #dbeafe; color: #1e40af;",
                    "Category: {category}"
                }
            }
            if let Some(region) = selection.region {
                span {
                    style: "{chip} background: #dcfce7; color: #166534;",
                    "Region: {region}"
                }
            }
            button {
                style: "margin-left: auto; padding: 2px 10px; font-size: 13px; border: none; background: transparent; color: #2563eb; cursor: pointer;",
                onclick: move |_| on_clear.call(()),
                "Clear"
            }
        }
    }
}
