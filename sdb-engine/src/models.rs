//! Chart-ready series and summary structs.
//!
//! All structs derive `Serialize` so they can be passed to D3.js as JSON
//! from the Dioxus WASM frontend, or printed by the CLI.

use chrono::NaiveDate;
use sdb_core::{Category, Quarter, Region};
use serde::Serialize;

/// One month of the sales trend bar chart.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MonthlySales {
    pub year: i32,
    /// Short month name, the chart's x-axis label.
    pub month: String,
    /// Date of the first record seen for this month.
    pub date: NaiveDate,
    pub sales: f64,
    pub revenue: f64,
    /// Number of records folded into this month.
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SalesTrend {
    /// At most the last 12 months, oldest first.
    pub months: Vec<MonthlySales>,
    /// Sales summed over the shown months.
    pub total_sales: f64,
    /// Percent change from the first to the last shown month.
    pub growth: f64,
}

/// One slice of the revenue-by-category donut.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CategoryRevenue {
    pub category: Category,
    pub revenue: f64,
    /// Share of total revenue, one decimal.
    pub percentage: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RevenueBreakdown {
    /// Highest revenue first.
    pub slices: Vec<CategoryRevenue>,
    pub total_revenue: f64,
}

impl RevenueBreakdown {
    /// The leading slices shown in the side list.
    pub fn top(&self, n: usize) -> &[CategoryRevenue] {
        &self.slices[..n.min(self.slices.len())]
    }
}

/// Year-over-year revenue change for one region.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RegionGrowth {
    pub region: Region,
    /// Current-year revenue.
    pub current: f64,
    /// Previous-year revenue.
    pub previous: f64,
    /// Percent change, one decimal; `0` without a previous-year baseline.
    pub growth: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct YoyGrowth {
    /// Highest growth first.
    pub regions: Vec<RegionGrowth>,
    pub average_growth: f64,
}

/// One quarter of the performance area chart.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct QuarterlyPerformance {
    pub year: i32,
    pub quarter: Quarter,
    /// Axis label, e.g. `"Q3 2024"`.
    pub period: String,
    pub customers: f64,
    pub units: f64,
    pub revenue: f64,
    /// Revenue per customer, `0` when there are no customers.
    pub avg_order_value: f64,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PerformanceMetrics {
    /// At most the last 8 quarters, oldest first.
    pub quarters: Vec<QuarterlyPerformance>,
    pub latest_customers: f64,
    pub latest_units: f64,
    pub latest_avg_order_value: f64,
    /// Percent change in customers from the first to the last shown quarter.
    pub customer_growth: f64,
}

/// One bar of the state-level regional chart.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StateSalesRow {
    pub state: String,
    pub region: Option<Region>,
    pub sales: f64,
    pub stores: u32,
    pub new_stores: u32,
    pub variance: f64,
    /// Share of the table's total sales, one decimal.
    pub percentage: f64,
    pub color: String,
    /// True when the state's parent region is the selected region.
    pub highlighted: bool,
}

/// Per-region roll-up card next to the regional chart.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RegionOverview {
    pub region: Region,
    pub description: String,
    pub color: String,
    pub sales: f64,
    pub stores: u32,
    pub new_stores: u32,
    pub selected: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RegionalSales {
    /// Highest sales first.
    pub states: Vec<StateSalesRow>,
    pub overview: Vec<RegionOverview>,
    pub total_sales: f64,
    pub total_stores: u32,
    pub total_new_stores: u32,
    pub average_variance: f64,
}

/// Headline figures for the summary cards.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct SummaryMetrics {
    /// Current-year revenue.
    pub total_revenue: f64,
    /// Current-year sales.
    pub total_sales: f64,
    pub total_customers: f64,
    pub total_units: f64,
    /// Percent change in revenue versus the previous year.
    pub revenue_growth: f64,
}
