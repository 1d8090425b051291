//! Category, region and time period dropdowns.

use dioxus::prelude::*;
use sdb_core::{Category, Region};
use sdb_engine::filter::{DimensionFilter, FilterState, TimePeriod, ALL_LABEL};

/// Display text for a time period option value.
fn period_text(value: &str) -> String {
    match value {
        ALL_LABEL => "All Time".to_string(),
        "Q1" | "Q2" | "Q3" | "Q4" => format!("{} 2024", value),
        year => year.to_string(),
    }
}

/// The three global filter dropdowns.
///
/// Holds no state of its own: the current filters come in as a prop and every
/// change is reported as a whole new `FilterState`.
#[component]
pub fn DashboardFilters(filters: FilterState, on_change: EventHandler<FilterState>) -> Element {
    let category = filters.category.label();
    let region = filters.region.label();
    let period = filters.time_period.label();

    let on_category = {
        let filters = filters.clone();
        move |evt: Event<FormData>| {
            let mut next = filters.clone();
            next.category = DimensionFilter::parse(&evt.value());
            on_change.call(next);
        }
    };
    let on_region = {
        let filters = filters.clone();
        move |evt: Event<FormData>| {
            let mut next = filters.clone();
            next.region = DimensionFilter::parse(&evt.value());
            on_change.call(next);
        }
    };
    let on_period = move |evt: Event<FormData>| {
        let mut next = filters.clone();
        next.time_period = TimePeriod::parse(&evt.value());
        on_change.call(next);
    };

    let select_style = "padding: 6px 10px; border: 1px solid #d1d5db; border-radius: 6px; background: white; font-size: 14px;";

    rsx! {
        div {
            style: "display: flex; flex-wrap: wrap; gap: 12px; align-items: center; margin: 16px 0;",
            select {
                id: "category-filter",
                style: "{select_style}",
                onchange: on_category,
                option { value: ALL_LABEL, selected: category == ALL_LABEL, "All Categories" }
                for c in Category::ALL {
                    option {
                        value: "{c.label()}",
                        selected: category == c.label(),
                        "{c.label()}"
                    }
                }
            }
            select {
                id: "region-filter",
                style: "{select_style}",
                onchange: on_region,
                option { value: ALL_LABEL, selected: region == ALL_LABEL, "All Regions" }
                for r in Region::ALL {
                    option {
                        value: "{r.label()}",
                        selected: region == r.label(),
                        "{r.label()}"
                    }
                }
            }
            select {
                id: "period-filter",
                style: "{select_style}",
                onchange: on_period,
                for value in TimePeriod::OPTIONS {
                    option {
                        value: "{value}",
                        selected: period == value,
                        "{period_text(value)}"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn period_option_text() {
        assert_eq!(period_text("all"), "All Time");
        assert_eq!(period_text("Q3"), "Q3 2024");
        assert_eq!(period_text("2023"), "2023");
    }
}
