//! Reusable Dioxus RSX components for the sales dashboard.

mod active_selections;
mod category_list;
mod chart_container;
mod chart_header;
mod dashboard_filters;
mod error_display;
mod loading_spinner;
mod region_overview;
mod stat_tile;
mod summary_cards;

pub use active_selections::ActiveSelections;
pub use category_list::CategoryList;
pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use dashboard_filters::DashboardFilters;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use region_overview::RegionOverviewCards;
pub use stat_tile::StatTile;
pub use summary_cards::SummaryCards;
