//! Global dropdown filters and the record filter engine.
//!
//! Every predicate is conjunctive. Unknown dropdown values are kept as
//! `Unmatched` and select nothing, so the charts fall back to their empty
//! state instead of failing.

use crate::selection::Selection;
use sdb_core::{Category, Quarter, Region, SalesRecord, CURRENT_YEAR, PREVIOUS_YEAR};
use std::fmt;
use std::str::FromStr;

/// Dropdown value meaning "no restriction".
pub const ALL_LABEL: &str = "all";

/// Filter over one dimension (category or region).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DimensionFilter<T> {
    All,
    Only(T),
    /// A label outside the option set. Matches no record.
    Unmatched(String),
}

impl<T> Default for DimensionFilter<T> {
    fn default() -> Self {
        DimensionFilter::All
    }
}

impl<T> DimensionFilter<T>
where
    T: FromStr + PartialEq + fmt::Display,
{
    /// Parse a dropdown value: `"all"`, a known label, or anything else.
    pub fn parse(label: &str) -> Self {
        if label == ALL_LABEL {
            return DimensionFilter::All;
        }
        match label.parse::<T>() {
            Ok(value) => DimensionFilter::Only(value),
            Err(_) => DimensionFilter::Unmatched(label.to_string()),
        }
    }

    /// The dropdown value this filter was parsed from.
    pub fn label(&self) -> String {
        match self {
            DimensionFilter::All => ALL_LABEL.to_string(),
            DimensionFilter::Only(value) => value.to_string(),
            DimensionFilter::Unmatched(label) => label.clone(),
        }
    }

    pub fn matches(&self, value: &T) -> bool {
        match self {
            DimensionFilter::All => true,
            DimensionFilter::Only(wanted) => wanted == value,
            DimensionFilter::Unmatched(_) => false,
        }
    }
}

/// Time period dropdown value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TimePeriod {
    #[default]
    All,
    Year(i32),
    /// A quarter of [`CURRENT_YEAR`]; quarters of other years are not selectable.
    Quarter(Quarter),
    Unmatched(String),
}

impl TimePeriod {
    /// Dropdown option values, in display order.
    pub const OPTIONS: [&'static str; 7] = [ALL_LABEL, "2024", "2023", "Q1", "Q2", "Q3", "Q4"];

    pub fn parse(label: &str) -> Self {
        if label == ALL_LABEL {
            return TimePeriod::All;
        }
        if let Ok(quarter) = label.parse::<Quarter>() {
            return TimePeriod::Quarter(quarter);
        }
        match [CURRENT_YEAR, PREVIOUS_YEAR]
            .into_iter()
            .find(|year| year.to_string() == label)
        {
            Some(year) => TimePeriod::Year(year),
            None => TimePeriod::Unmatched(label.to_string()),
        }
    }

    pub fn label(&self) -> String {
        match self {
            TimePeriod::All => ALL_LABEL.to_string(),
            TimePeriod::Year(year) => year.to_string(),
            TimePeriod::Quarter(quarter) => quarter.to_string(),
            TimePeriod::Unmatched(label) => label.clone(),
        }
    }

    pub fn matches(&self, record: &SalesRecord) -> bool {
        match self {
            TimePeriod::All => true,
            TimePeriod::Year(year) => record.year == *year,
            TimePeriod::Quarter(quarter) => record.quarter == *quarter && record.year == CURRENT_YEAR,
            TimePeriod::Unmatched(_) => false,
        }
    }
}

/// The three global dropdown selections.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    pub category: DimensionFilter<Category>,
    pub region: DimensionFilter<Region>,
    pub time_period: TimePeriod,
}

impl FilterState {
    /// Build from raw dropdown values.
    pub fn from_labels(category: &str, region: &str, time_period: &str) -> Self {
        Self {
            category: DimensionFilter::parse(category),
            region: DimensionFilter::parse(region),
            time_period: TimePeriod::parse(time_period),
        }
    }

    pub fn matches(&self, record: &SalesRecord) -> bool {
        self.category.matches(&record.category)
            && self.region.matches(&record.region)
            && self.time_period.matches(record)
    }
}

/// Select the records that pass the dropdown filters and the chart selection.
///
/// Relative order of the input is preserved. An empty result is valid.
///
/// # Example
///
/// ```rust
/// use sdb_engine::filter::{filter_records, FilterState};
/// use sdb_engine::selection::Selection;
///
/// let filters = FilterState::from_labels("all", "all", "Q2");
/// let kept = filter_records(&[], &filters, &Selection::default());
/// assert!(kept.is_empty());
/// ```
pub fn filter_records(
    records: &[SalesRecord],
    filters: &FilterState,
    selection: &Selection,
) -> Vec<SalesRecord> {
    let kept: Vec<SalesRecord> = records
        .iter()
        .filter(|r| filters.matches(r) && selection.matches(r))
        .cloned()
        .collect();
    log::debug!(
        "[SDB] engine: filter kept {} of {} records",
        kept.len(),
        records.len()
    );
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::record;

    fn sample() -> Vec<SalesRecord> {
        vec![
            record(2023, 2, Category::Electronics, Region::NorthAmerica, 100.0),
            record(2023, 5, Category::Books, Region::Europe, 80.0),
            record(2024, 2, Category::Electronics, Region::Europe, 120.0),
            record(2024, 5, Category::Books, Region::NorthAmerica, 90.0),
            record(2024, 11, Category::Sports, Region::Africa, 70.0),
        ]
    }

    #[test]
    fn all_filters_keep_everything_in_order() {
        let records = sample();
        let kept = filter_records(&records, &FilterState::default(), &Selection::default());
        assert_eq!(kept, records);
    }

    #[test]
    fn category_and_region_are_conjunctive() {
        let records = sample();
        let filters = FilterState::from_labels("Electronics", "Europe", "all");
        let kept = filter_records(&records, &filters, &Selection::default());
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].year, 2024);
    }

    #[test]
    fn year_filter() {
        let records = sample();
        let filters = FilterState::from_labels("all", "all", "2023");
        let kept = filter_records(&records, &filters, &Selection::default());
        assert_eq!(kept.len(), 2);
        assert!(kept.iter().all(|r| r.year == 2023));
    }

    #[test]
    fn quarter_filter_only_selects_current_year() {
        let records = sample();
        let filters = FilterState::from_labels("all", "all", "Q2");
        let kept = filter_records(&records, &filters, &Selection::default());
        assert_eq!(kept.len(), 1, "the 2023 Q2 row must not survive");
        assert_eq!(kept[0].quarter, Quarter::Q2);
        assert_eq!(kept[0].year, 2024);
    }

    #[test]
    fn selection_narrows_after_dropdowns() {
        let records = sample();
        let selection = Selection {
            category: Some(Category::Books),
            region: None,
        };
        let filters = FilterState::from_labels("all", "North America", "all");
        let kept = filter_records(&records, &filters, &selection);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].category, Category::Books);
        assert_eq!(kept[0].region, Region::NorthAmerica);
    }

    #[test]
    fn unknown_values_match_nothing() {
        let records = sample();
        for filters in [
            FilterState::from_labels("Toys", "all", "all"),
            FilterState::from_labels("all", "Antarctica", "all"),
            FilterState::from_labels("all", "all", "last-week"),
            FilterState::from_labels("all", "all", "Q5"),
            FilterState::from_labels("all", "all", "2022"),
            FilterState::from_labels("all", "all", "+2024"),
        ] {
            let kept = filter_records(&records, &filters, &Selection::default());
            assert!(kept.is_empty(), "{:?} should match nothing", filters);
        }
    }

    #[test]
    fn only_reporting_years_parse_as_years() {
        assert_eq!(TimePeriod::parse("2024"), TimePeriod::Year(2024));
        assert_eq!(TimePeriod::parse("2023"), TimePeriod::Year(2023));
        assert_eq!(
            TimePeriod::parse("+2024"),
            TimePeriod::Unmatched("+2024".to_string())
        );
        let period = TimePeriod::parse("2022");
        assert_eq!(period.label(), "2022");
        let old = record(2022, 5, Category::Books, Region::Europe, 10.0);
        assert!(!period.matches(&old), "2022 is not a selectable period");
    }

    #[test]
    fn filtering_is_idempotent() {
        let records = sample();
        let selection = Selection {
            category: None,
            region: Some(Region::NorthAmerica),
        };
        for period in TimePeriod::OPTIONS {
            let filters = FilterState::from_labels("all", "all", period);
            let once = filter_records(&records, &filters, &selection);
            let twice = filter_records(&once, &filters, &selection);
            assert_eq!(once, twice, "period {}", period);
        }
    }

    #[test]
    fn labels_round_trip() {
        for period in TimePeriod::OPTIONS {
            assert_eq!(TimePeriod::parse(period).label(), period);
        }
        let filters = FilterState::from_labels("Home & Garden", "Asia Pacific", "Q4");
        assert_eq!(filters.category.label(), "Home & Garden");
        assert_eq!(filters.region.label(), "Asia Pacific");
        assert_eq!(filters.time_period, TimePeriod::Quarter(Quarter::Q4));
    }
}
