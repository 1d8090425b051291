//! Headline totals for the summary cards.

use crate::models::SummaryMetrics;
use sdb_core::{SalesRecord, CURRENT_YEAR, PREVIOUS_YEAR};
use sdb_utils::numbers::growth_percent;

/// Current-year totals and revenue growth versus the previous year.
///
/// Totals only count current-year rows, so filtering to the previous year
/// leaves them at zero.
///
/// # Example
///
/// ```rust
/// let metrics = sdb_engine::summary::summary_metrics(&[]);
/// assert_eq!(metrics.total_revenue, 0.0);
/// assert_eq!(metrics.revenue_growth, 0.0);
/// ```
pub fn summary_metrics(records: &[SalesRecord]) -> SummaryMetrics {
    let mut metrics = SummaryMetrics::default();
    let mut previous_revenue = 0.0;
    for r in records {
        if r.year == CURRENT_YEAR {
            metrics.total_revenue += r.revenue;
            metrics.total_sales += r.sales;
            metrics.total_customers += r.customers;
            metrics.total_units += r.units;
        } else if r.year == PREVIOUS_YEAR {
            previous_revenue += r.revenue;
        }
    }
    metrics.revenue_growth = growth_percent(metrics.total_revenue, previous_revenue);
    metrics
}
