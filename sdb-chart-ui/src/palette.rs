//! Chart colours.

/// Slice colours for the category donut and its side list, in slice order.
pub const CHART_COLORS: [&str; 8] = [
    "#0ea5e9", // Sky Blue
    "#10b981", // Emerald
    "#f59e0b", // Amber
    "#ef4444", // Red
    "#8b5cf6", // Violet
    "#06b6d4", // Cyan
    "#84cc16", // Lime
    "#f97316", // Orange
];

pub const POSITIVE: &str = "#10b981";
pub const NEGATIVE: &str = "#ef4444";
pub const SALES_BAR: &str = "#0ea5e9";
pub const CUSTOMERS: &str = "#8b5cf6";
pub const UNITS: &str = "#0ea5e9";

/// Colour for the slice at `index`, cycling through [`CHART_COLORS`].
pub fn chart_color(index: usize) -> &'static str {
    CHART_COLORS[index % CHART_COLORS.len()]
}

/// Text colour for a signed change.
pub fn change_color(value: f64) -> &'static str {
    if value >= 0.0 {
        "#16a34a"
    } else {
        "#dc2626"
    }
}
