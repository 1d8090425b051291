//! Cross-filter selection set by clicking chart elements.
//!
//! Clicking a category or region toggles it: a second click on the same
//! value clears it. The two dimensions toggle independently.

use sdb_core::region::region_label_for;
use sdb_core::{Category, Region, SalesRecord};
use serde::{Deserialize, Serialize};

/// Click payload emitted by a chart.
///
/// Each chart fills in the dimensions it is drawn over: the category
/// breakdown sends `category`, the region charts send `region`, and the
/// time-series charts send neither.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartClick {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
}

impl ChartClick {
    pub fn category(category: Category) -> Self {
        Self {
            category: Some(category.label().to_string()),
            region: None,
        }
    }

    /// Click on a region-dimensioned element. State labels resolve to their
    /// parent region.
    pub fn region(label: &str) -> Self {
        Self {
            category: None,
            region: Some(region_label_for(label).to_string()),
        }
    }

    /// Decode the JSON payload sent by the chart scripts.
    pub fn from_json(payload: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(payload)?)
    }
}

/// Chart-driven selection, `None` meaning no selection on that dimension.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Selection {
    pub category: Option<Category>,
    pub region: Option<Region>,
}

impl Selection {
    pub fn is_active(&self) -> bool {
        self.category.is_some() || self.region.is_some()
    }

    pub fn clear(&mut self) {
        self.category = None;
        self.region = None;
    }

    pub fn toggle_category(&mut self, category: Category) {
        self.category = if self.category == Some(category) {
            None
        } else {
            Some(category)
        };
    }

    pub fn toggle_region(&mut self, region: Region) {
        self.region = if self.region == Some(region) {
            None
        } else {
            Some(region)
        };
    }

    /// Apply a chart click. Both dimensions toggle in the same update when
    /// both are present; blank or unknown labels are ignored.
    pub fn apply_click(&mut self, click: &ChartClick) {
        if let Some(label) = click.category.as_deref().filter(|l| !l.is_empty()) {
            match label.parse::<Category>() {
                Ok(category) => self.toggle_category(category),
                Err(e) => log::warn!("[SDB] selection: ignoring click: {}", e),
            }
        }
        if let Some(label) = click.region.as_deref().filter(|l| !l.is_empty()) {
            match label.parse::<Region>() {
                Ok(region) => self.toggle_region(region),
                Err(e) => log::warn!("[SDB] selection: ignoring click: {}", e),
            }
        }
    }

    pub fn matches(&self, record: &SalesRecord) -> bool {
        self.category.map_or(true, |c| record.category == c)
            && self.region.map_or(true, |r| record.region == r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clicking_twice_clears() {
        let mut selection = Selection::default();
        let click = ChartClick::category(Category::Sports);
        selection.apply_click(&click);
        assert_eq!(selection.category, Some(Category::Sports));
        selection.apply_click(&click);
        assert_eq!(selection.category, None);
        assert!(!selection.is_active());
    }

    #[test]
    fn clicking_another_value_replaces() {
        let mut selection = Selection::default();
        selection.apply_click(&ChartClick::region("Europe"));
        selection.apply_click(&ChartClick::region("Africa"));
        assert_eq!(selection.region, Some(Region::Africa));
    }

    #[test]
    fn dimensions_toggle_independently() {
        let mut selection = Selection {
            category: Some(Category::Books),
            region: Some(Region::Europe),
        };
        let both = ChartClick {
            category: Some("Books".to_string()),
            region: Some("Asia Pacific".to_string()),
        };
        selection.apply_click(&both);
        assert_eq!(selection.category, None);
        assert_eq!(selection.region, Some(Region::AsiaPacific));
    }

    #[test]
    fn state_click_selects_parent_region() {
        let mut selection = Selection::default();
        selection.apply_click(&ChartClick::region("North Carolina"));
        assert_eq!(selection.region, Some(Region::AsiaPacific));
        // Clicking another state in the same region toggles it back off
        selection.apply_click(&ChartClick::region("Georgia"));
        assert_eq!(selection.region, None);
    }

    #[test]
    fn empty_and_unknown_payloads_are_ignored() {
        let mut selection = Selection {
            category: Some(Category::Clothing),
            region: None,
        };
        selection.apply_click(&ChartClick::default());
        selection.apply_click(&ChartClick {
            category: Some(String::new()),
            region: Some("Atlantis".to_string()),
        });
        assert_eq!(selection.category, Some(Category::Clothing));
        assert_eq!(selection.region, None);
    }

    #[test]
    fn clear_resets_both() {
        let mut selection = Selection {
            category: Some(Category::Clothing),
            region: Some(Region::Africa),
        };
        selection.clear();
        assert_eq!(selection, Selection::default());
    }

    #[test]
    fn decodes_chart_payloads() {
        let click = ChartClick::from_json(r#"{"region":"Europe"}"#).unwrap();
        assert_eq!(click, ChartClick::region("Europe"));
        let click = ChartClick::from_json("{}").unwrap();
        assert_eq!(click, ChartClick::default());
        assert!(ChartClick::from_json("not json").is_err());
    }
}
