//! Reporting calendar: the two reporting years and fiscal quarters.

use sdb_utils::error::ParseLabelError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The year all headline figures report on. A quarter filter is always
/// a quarter of this year.
pub const CURRENT_YEAR: i32 = 2024;
/// Comparison baseline for year-over-year figures.
pub const PREVIOUS_YEAR: i32 = 2023;

/// Calendar quarter label `"Q1"`..`"Q4"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Quarter {
    Q1,
    Q2,
    Q3,
    Q4,
}

impl Quarter {
    pub const ALL: [Quarter; 4] = [Quarter::Q1, Quarter::Q2, Quarter::Q3, Quarter::Q4];

    /// Quarter number 1-4.
    pub fn number(&self) -> u32 {
        match self {
            Quarter::Q1 => 1,
            Quarter::Q2 => 2,
            Quarter::Q3 => 3,
            Quarter::Q4 => 4,
        }
    }

    /// Quarter containing a 1-based month.
    pub fn from_month(month: u32) -> Option<Quarter> {
        match month {
            1..=3 => Some(Quarter::Q1),
            4..=6 => Some(Quarter::Q2),
            7..=9 => Some(Quarter::Q3),
            10..=12 => Some(Quarter::Q4),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Quarter::Q1 => "Q1",
            Quarter::Q2 => "Q2",
            Quarter::Q3 => "Q3",
            Quarter::Q4 => "Q4",
        }
    }
}

impl fmt::Display for Quarter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Quarter {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Quarter::ALL
            .into_iter()
            .find(|q| q.label() == s)
            .ok_or_else(|| ParseLabelError::new("quarter", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_month() {
        assert_eq!(Quarter::from_month(1), Some(Quarter::Q1));
        assert_eq!(Quarter::from_month(6), Some(Quarter::Q2));
        assert_eq!(Quarter::from_month(7), Some(Quarter::Q3));
        assert_eq!(Quarter::from_month(12), Some(Quarter::Q4));
        assert_eq!(Quarter::from_month(13), None);
    }

    #[test]
    fn test_parse() {
        assert_eq!("Q3".parse::<Quarter>(), Ok(Quarter::Q3));
        assert!("Q5".parse::<Quarter>().is_err());
        assert_eq!(Quarter::Q4.number(), 4);
    }
}
