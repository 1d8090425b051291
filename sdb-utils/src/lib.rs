//! Shared utility functions for the sales dashboard crates.

/// Zero-safe arithmetic used by every derived figure.
///
/// A degenerate denominator never yields `NaN` or infinity; the result is `0`.
pub mod numbers {
    /// Divide, returning `0.0` when the denominator is zero or the result
    /// is not finite.
    pub fn safe_div(numerator: f64, denominator: f64) -> f64 {
        if denominator == 0.0 {
            return 0.0;
        }
        let q = numerator / denominator;
        if q.is_finite() {
            q
        } else {
            0.0
        }
    }

    /// Round to one decimal place (`12.345 -> 12.3`).
    pub fn round1(value: f64) -> f64 {
        (value * 10.0).round() / 10.0
    }

    /// Percentage change from `previous` to `current`, `0` when the baseline
    /// is not positive.
    pub fn growth_percent(current: f64, previous: f64) -> f64 {
        if previous > 0.0 {
            safe_div(current - previous, previous) * 100.0
        } else {
            0.0
        }
    }

    /// `part` as a percentage of `whole`, `0` when `whole` is zero.
    pub fn share_percent(part: f64, whole: f64) -> f64 {
        safe_div(part, whole) * 100.0
    }

    /// Arithmetic mean, `0` for an empty slice.
    pub fn mean(values: &[f64]) -> f64 {
        safe_div(values.iter().sum(), values.len() as f64)
    }

}

/// Display formatting for dashboard figures.
pub mod format {
    /// Format a currency amount in millions: `2_460_000 -> "$2.5M"`.
    pub fn millions(value: f64) -> String {
        format!("${:.1}M", value / 1_000_000.0)
    }

    /// Format a currency amount in whole thousands: `45_600 -> "$46K"`.
    pub fn currency_thousands(value: f64) -> String {
        format!("${:.0}K", value / 1000.0)
    }

    /// Format a count in thousands: `12_340 -> "12.3K"`.
    pub fn thousands(value: f64) -> String {
        format!("{:.1}K", value / 1000.0)
    }

    /// Format a percentage with an explicit sign for non-negative values.
    pub fn signed_percent(value: f64) -> String {
        if value >= 0.0 {
            format!("+{:.1}%", value)
        } else {
            format!("{:.1}%", value)
        }
    }

}

/// Date utility functions
pub mod dates {
    /// Short English month name for a 1-based month number ("Jan".."Dec").
    pub fn month_abbrev(month: u32) -> Option<&'static str> {
        const NAMES: [&str; 12] = [
            "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
        ];
        NAMES.get(month.checked_sub(1)? as usize).copied()
    }

}

/// Error types
pub mod error {
    use std::fmt;

    /// A dimension label (category, region, quarter) that is not in the
    /// fixed option set.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct ParseLabelError {
        pub kind: &'static str,
        pub label: String,
    }

    impl ParseLabelError {
        pub fn new(kind: &'static str, label: &str) -> Self {
            Self {
                kind,
                label: label.to_string(),
            }
        }
    }

    impl fmt::Display for ParseLabelError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "Unknown {}: {:?}", self.kind, self.label)
        }
    }

    impl std::error::Error for ParseLabelError {}
}
