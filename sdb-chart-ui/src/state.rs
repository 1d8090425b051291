//! Application state managed via Dioxus context.
//!
//! `AppState` bundles the dashboard's reactive signals into a single struct
//! provided by the root component via `use_context_provider`. The root owns
//! every write: children get plain values as props and report changes through
//! `EventHandler` callbacks.

use dioxus::prelude::*;
use sdb_core::SalesRecord;
use sdb_engine::filter::FilterState;
use sdb_engine::selection::{ChartClick, Selection};

/// Shared application state for the dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// The immutable record table (empty until loaded)
    pub records: Signal<Vec<SalesRecord>>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Dropdown filters
    pub filters: Signal<FilterState>,
    /// Cross-filter selection set by chart clicks
    pub selection: Signal<Selection>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            records: Signal::new(Vec::new()),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            filters: Signal::new(FilterState::default()),
            selection: Signal::new(Selection::default()),
        }
    }

    /// Toggle the selection from a chart click.
    pub fn apply_click(&mut self, click: &ChartClick) {
        self.selection.write().apply_click(click);
    }

    pub fn clear_selection(&mut self) {
        self.selection.write().clear();
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
