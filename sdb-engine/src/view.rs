//! Everything one render of the dashboard needs, computed in a single pass
//! from the current record table, filters and selection.

use crate::aggregate::{
    performance_metrics, regional_sales, revenue_breakdown, sales_trend, yoy_growth,
};
use crate::filter::{filter_records, FilterState};
use crate::models::{
    PerformanceMetrics, RegionalSales, RevenueBreakdown, SalesTrend, SummaryMetrics, YoyGrowth,
};
use crate::selection::Selection;
use crate::summary::summary_metrics;
use sdb_core::SalesRecord;
use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DashboardView {
    pub record_count: usize,
    pub filtered_count: usize,
    pub summary: SummaryMetrics,
    pub sales_trend: SalesTrend,
    pub revenue_breakdown: RevenueBreakdown,
    pub yoy_growth: YoyGrowth,
    pub performance: PerformanceMetrics,
    pub regional: RegionalSales,
}

/// Filter the table and recompute every chart series and the summary.
///
/// Nothing is cached; the whole view is rebuilt on every state change.
pub fn build_view(
    records: &[SalesRecord],
    filters: &FilterState,
    selection: &Selection,
) -> DashboardView {
    let filtered = filter_records(records, filters, selection);
    log::info!(
        "[SDB] view: building dashboard from {} of {} records",
        filtered.len(),
        records.len()
    );
    DashboardView {
        record_count: records.len(),
        filtered_count: filtered.len(),
        summary: summary_metrics(&filtered),
        sales_trend: sales_trend(&filtered),
        revenue_breakdown: revenue_breakdown(&filtered),
        yoy_growth: yoy_growth(&filtered),
        performance: performance_metrics(&filtered),
        regional: regional_sales(selection.region),
    }
}
