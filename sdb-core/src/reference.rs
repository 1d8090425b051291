//! Static state-level sales reference table.
//!
//! The regional chart reports these figures as-is. They are a separate data
//! source from the record table and do not react to filters.

use crate::Region;
use serde::Serialize;

/// Reference sales figures for one US state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StateSales {
    pub state: &'static str,
    pub sales: f64,
    pub stores: u32,
    pub new_stores: u32,
    /// Growth versus the prior period, percent.
    pub variance: f64,
}

impl StateSales {
    const fn new(state: &'static str, sales: f64, stores: u32, new_stores: u32, variance: f64) -> Self {
        Self {
            state,
            sales,
            stores,
            new_stores,
            variance,
        }
    }

    /// Region this state is grouped under, if it is in the catalog.
    pub fn region(&self) -> Option<Region> {
        Region::for_state(self.state)
    }
}

pub static STATE_SALES: [StateSales; 12] = [
    StateSales::new("California", 2_850_000.0, 24, 3, 12.5),
    StateSales::new("Texas", 2_650_000.0, 22, 2, 8.3),
    StateSales::new("New York", 2_400_000.0, 18, 1, -2.1),
    StateSales::new("Florida", 2_200_000.0, 20, 4, 15.7),
    StateSales::new("Illinois", 1_950_000.0, 16, 1, 5.2),
    StateSales::new("Ohio", 1_800_000.0, 15, 2, 9.8),
    StateSales::new("Pennsylvania", 1_650_000.0, 14, 1, 3.4),
    StateSales::new("Michigan", 1_500_000.0, 12, 0, -1.5),
    StateSales::new("Georgia", 1_750_000.0, 16, 3, 18.2),
    StateSales::new("North Carolina", 1_600_000.0, 14, 2, 11.9),
    StateSales::new("Arizona", 1_400_000.0, 11, 2, 14.6),
    StateSales::new("Colorado", 1_250_000.0, 10, 1, 7.8),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_reference_state_has_a_region() {
        for row in STATE_SALES.iter() {
            assert!(row.region().is_some(), "{} has no region", row.state);
        }
    }

    #[test]
    fn reference_totals() {
        let sales: f64 = STATE_SALES.iter().map(|s| s.sales).sum();
        let stores: u32 = STATE_SALES.iter().map(|s| s.stores).sum();
        assert_eq!(sales, 23_000_000.0);
        assert_eq!(stores, 192);
    }
}
