//! Shared Dioxus components and D3.js bridge for the sales dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for D3.js chart functions via `js_sys::eval()`,
//!   plus the click callback that feeds cross-filter selections back to Rust
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (filters, cards, containers, etc.)
//! - `palette`: chart colours shared by the D3 charts and the RSX legends

pub mod components;
pub mod js_bridge;
pub mod palette;
pub mod state;
