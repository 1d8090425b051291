//! Sales regions and the state-to-region catalog.
//!
//! Region names are the dashboard's market labels; each one groups five
//! US states. The state lists drive the regional chart, which is reported
//! per state but cross-filters by region.

use sdb_utils::error::ParseLabelError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sales region of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Region {
    #[serde(rename = "North America")]
    NorthAmerica,
    Europe,
    #[serde(rename = "Asia Pacific")]
    AsiaPacific,
    #[serde(rename = "Latin America")]
    LatinAmerica,
    Africa,
}

/// Display metadata for a region in the regional overview.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionInfo {
    pub region: Region,
    pub description: &'static str,
    /// Hex colour used by the regional chart bars and overview swatch.
    pub color: &'static str,
    pub states: &'static [&'static str],
}

impl Region {
    /// Every region, in dropdown order.
    pub const ALL: [Region; 5] = [
        Region::NorthAmerica,
        Region::Europe,
        Region::AsiaPacific,
        Region::LatinAmerica,
        Region::Africa,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Region::NorthAmerica => "North America",
            Region::Europe => "Europe",
            Region::AsiaPacific => "Asia Pacific",
            Region::LatinAmerica => "Latin America",
            Region::Africa => "Africa",
        }
    }

    pub fn info(&self) -> RegionInfo {
        match self {
            Region::NorthAmerica => RegionInfo {
                region: *self,
                description: "West Coast & Major Markets",
                color: "#0ea5e9",
                states: &["California", "New York", "Texas", "Florida", "Illinois"],
            },
            Region::Europe => RegionInfo {
                region: *self,
                description: "Midwest & Industrial Centers",
                color: "#10b981",
                states: &["Ohio", "Pennsylvania", "Michigan", "Wisconsin", "Indiana"],
            },
            Region::AsiaPacific => RegionInfo {
                region: *self,
                description: "Southeast & Growth Markets",
                color: "#f59e0b",
                states: &["Georgia", "North Carolina", "Virginia", "Tennessee", "Kentucky"],
            },
            Region::LatinAmerica => RegionInfo {
                region: *self,
                description: "Southwest & Emerging Markets",
                color: "#ef4444",
                states: &["Arizona", "Nevada", "Colorado", "Utah", "New Mexico"],
            },
            Region::Africa => RegionInfo {
                region: *self,
                description: "Northeast & Premium Markets",
                color: "#8b5cf6",
                states: &["Maine", "Vermont", "New Hampshire", "Massachusetts", "Connecticut"],
            },
        }
    }

    /// Parent region of a US state name.
    pub fn for_state(state: &str) -> Option<Region> {
        Region::ALL
            .into_iter()
            .find(|r| r.contains_state(state))
    }

    pub fn contains_state(&self, state: &str) -> bool {
        self.info().states.contains(&state)
    }
}

/// Map a clicked chart label to the region label used for cross-filtering.
///
/// State names resolve to their parent region; any other label (including a
/// region name) is returned unchanged.
pub fn region_label_for(label: &str) -> &str {
    match Region::for_state(label) {
        Some(region) => region.label(),
        None => label,
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Region {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Region::ALL
            .into_iter()
            .find(|r| r.label() == s)
            .ok_or_else(|| ParseLabelError::new("region", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_state() {
        assert_eq!(Region::for_state("California"), Some(Region::NorthAmerica));
        assert_eq!(Region::for_state("Michigan"), Some(Region::Europe));
        assert_eq!(Region::for_state("Georgia"), Some(Region::AsiaPacific));
        assert_eq!(Region::for_state("Colorado"), Some(Region::LatinAmerica));
        assert_eq!(Region::for_state("Vermont"), Some(Region::Africa));
        assert_eq!(Region::for_state("Atlantis"), None);
    }

    #[test]
    fn test_region_label_for() {
        assert_eq!(region_label_for("Texas"), "North America");
        // Region names and unknown labels pass through
        assert_eq!(region_label_for("Europe"), "Europe");
        assert_eq!(region_label_for("Atlantis"), "Atlantis");
    }

    #[test]
    fn every_state_belongs_to_exactly_one_region() {
        let states: Vec<&str> = Region::ALL
            .iter()
            .flat_map(|r| r.info().states.iter().copied())
            .collect();
        assert_eq!(states.len(), 25);
        for state in &states {
            let owners = Region::ALL
                .iter()
                .filter(|r| r.contains_state(state))
                .count();
            assert_eq!(owners, 1, "{} should map to one region", state);
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!("Asia Pacific".parse::<Region>(), Ok(Region::AsiaPacific));
        assert!("Antarctica".parse::<Region>().is_err());
    }
}
