//! Filtering, cross-filter selection and aggregation for the sales dashboard.
//!
//! The engine is a set of pure functions over an immutable record table:
//!
//! ```text
//! records --(FilterState, Selection)--> filtered --> chart series + summary
//! ```
//!
//! - [`filter`]: dropdown filters and the record filter
//! - [`selection`]: click-to-toggle cross-filter state
//! - [`aggregate`]: one grouping per chart
//! - [`summary`]: headline totals
//! - [`view`]: all of the above for one render
//!
//! # Usage
//!
//! ```rust
//! use sdb_engine::filter::FilterState;
//! use sdb_engine::selection::{ChartClick, Selection};
//! use sdb_engine::view::build_view;
//!
//! let mut selection = Selection::default();
//! selection.apply_click(&ChartClick::region("Texas"));
//! assert!(selection.is_active());
//!
//! let view = build_view(&[], &FilterState::from_labels("all", "all", "2024"), &selection);
//! assert_eq!(view.filtered_count, 0);
//! assert!(view.regional.states.iter().any(|s| s.highlighted));
//! ```

pub mod aggregate;
pub mod filter;
pub mod models;
pub mod selection;
pub mod summary;
pub mod view;
