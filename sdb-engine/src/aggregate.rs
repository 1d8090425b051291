//! Per-chart aggregations over the filtered records.
//!
//! Each function groups records by a typed key, sums the measures, derives
//! the chart's figures, then sorts and truncates. Groups are collected in a
//! `BTreeMap`, so equal sort values fall back to key order.
//!
//! Every derived ratio goes through [`sdb_utils::numbers`], so an empty
//! group or a zero denominator yields `0`.

use crate::models::{
    CategoryRevenue, MonthlySales, PerformanceMetrics, QuarterlyPerformance, RegionGrowth,
    RegionOverview, RegionalSales, RevenueBreakdown, SalesTrend, StateSalesRow, YoyGrowth,
};
use sdb_core::reference::STATE_SALES;
use sdb_core::{Category, Region, SalesRecord, CURRENT_YEAR, PREVIOUS_YEAR};
use sdb_utils::numbers::{growth_percent, mean, round1, safe_div, share_percent};
use std::collections::BTreeMap;

/// Months shown by the sales trend chart.
pub const SALES_TREND_WINDOW: usize = 12;
/// Quarters shown by the performance chart.
pub const PERFORMANCE_WINDOW: usize = 8;
/// Categories listed beside the revenue donut.
pub const TOP_CATEGORY_LIST: usize = 5;

/// Keep only the last `window` items.
fn keep_last<T>(mut items: Vec<T>, window: usize) -> Vec<T> {
    let skip = items.len().saturating_sub(window);
    items.split_off(skip)
}

/// Monthly sales for the trend chart, oldest first, last 12 months.
pub fn sales_trend(records: &[SalesRecord]) -> SalesTrend {
    let mut by_month: BTreeMap<(i32, u32), MonthlySales> = BTreeMap::new();
    for r in records {
        let entry = by_month
            .entry((r.year, r.month_number()))
            .or_insert_with(|| MonthlySales {
                year: r.year,
                month: r.month.clone(),
                date: r.date,
                sales: 0.0,
                revenue: 0.0,
                count: 0,
            });
        entry.sales += r.sales;
        entry.revenue += r.revenue;
        entry.count += 1;
    }

    let mut months: Vec<MonthlySales> = by_month.into_values().collect();
    months.sort_by_key(|m| m.date);
    let months = keep_last(months, SALES_TREND_WINDOW);

    let total_sales: f64 = months.iter().map(|m| m.sales).sum();
    let growth = match (months.first(), months.last()) {
        (Some(first), Some(last)) if months.len() > 1 => growth_percent(last.sales, first.sales),
        _ => 0.0,
    };
    SalesTrend {
        months,
        total_sales,
        growth,
    }
}

/// Revenue by category with each category's share, highest revenue first.
pub fn revenue_breakdown(records: &[SalesRecord]) -> RevenueBreakdown {
    let mut by_category: BTreeMap<Category, f64> = BTreeMap::new();
    for r in records {
        *by_category.entry(r.category).or_insert(0.0) += r.revenue;
    }

    let total_revenue: f64 = by_category.values().sum();
    let mut slices: Vec<CategoryRevenue> = by_category
        .into_iter()
        .map(|(category, revenue)| CategoryRevenue {
            category,
            revenue,
            percentage: round1(share_percent(revenue, total_revenue)),
        })
        .collect();
    slices.sort_by(|a, b| b.revenue.total_cmp(&a.revenue));

    RevenueBreakdown {
        slices,
        total_revenue,
    }
}

/// Current- versus previous-year revenue per region, highest growth first.
///
/// Only regions with current-year rows are reported; previous-year revenue
/// is added to those regions only.
pub fn yoy_growth(records: &[SalesRecord]) -> YoyGrowth {
    let mut by_region: BTreeMap<Region, RegionGrowth> = BTreeMap::new();
    for r in records.iter().filter(|r| r.year == CURRENT_YEAR) {
        by_region
            .entry(r.region)
            .or_insert_with(|| RegionGrowth {
                region: r.region,
                current: 0.0,
                previous: 0.0,
                growth: 0.0,
            })
            .current += r.revenue;
    }
    for r in records.iter().filter(|r| r.year == PREVIOUS_YEAR) {
        if let Some(entry) = by_region.get_mut(&r.region) {
            entry.previous += r.revenue;
        }
    }

    let mut regions: Vec<RegionGrowth> = by_region
        .into_values()
        .map(|mut g| {
            g.growth = round1(growth_percent(g.current, g.previous));
            g
        })
        .collect();
    regions.sort_by(|a, b| b.growth.total_cmp(&a.growth));

    let growths: Vec<f64> = regions.iter().map(|g| g.growth).collect();
    YoyGrowth {
        average_growth: mean(&growths),
        regions,
    }
}

/// Quarterly customers, units and average order value, last 8 quarters.
pub fn performance_metrics(records: &[SalesRecord]) -> PerformanceMetrics {
    let mut by_quarter: BTreeMap<(i32, u32), QuarterlyPerformance> = BTreeMap::new();
    for r in records {
        let entry = by_quarter
            .entry((r.year, r.quarter.number()))
            .or_insert_with(|| QuarterlyPerformance {
                year: r.year,
                quarter: r.quarter,
                period: format!("{} {}", r.quarter, r.year),
                customers: 0.0,
                units: 0.0,
                revenue: 0.0,
                avg_order_value: 0.0,
                count: 0,
            });
        entry.customers += r.customers;
        entry.units += r.units;
        entry.revenue += r.revenue;
        entry.count += 1;
    }

    let quarters: Vec<QuarterlyPerformance> = by_quarter
        .into_values()
        .map(|mut q| {
            q.avg_order_value = safe_div(q.revenue, q.customers);
            q
        })
        .collect();
    let quarters = keep_last(quarters, PERFORMANCE_WINDOW);

    let (latest_customers, latest_units, latest_avg_order_value) = quarters
        .last()
        .map(|q| (q.customers, q.units, q.avg_order_value))
        .unwrap_or_default();
    let customer_growth = match (quarters.first(), quarters.last()) {
        (Some(first), Some(last)) if quarters.len() > 1 => {
            growth_percent(last.customers, first.customers)
        }
        _ => 0.0,
    };

    PerformanceMetrics {
        quarters,
        latest_customers,
        latest_units,
        latest_avg_order_value,
        customer_growth,
    }
}

/// State-level sales from the static reference table, highest sales first.
///
/// Does not depend on the filtered records. `selected` only drives the
/// highlight flags.
pub fn regional_sales(selected: Option<Region>) -> RegionalSales {
    let total_sales: f64 = STATE_SALES.iter().map(|s| s.sales).sum();

    let mut states: Vec<StateSalesRow> = STATE_SALES
        .iter()
        .map(|s| {
            let region = s.region();
            StateSalesRow {
                state: s.state.to_string(),
                region,
                sales: s.sales,
                stores: s.stores,
                new_stores: s.new_stores,
                variance: s.variance,
                percentage: round1(share_percent(s.sales, total_sales)),
                color: region
                    .map(|r| r.info().color.to_string())
                    .unwrap_or_else(|| "#9ca3af".to_string()),
                highlighted: selected.is_some() && region == selected,
            }
        })
        .collect();
    states.sort_by(|a, b| b.sales.total_cmp(&a.sales));

    let overview = Region::ALL
        .iter()
        .map(|region| {
            let info = region.info();
            let members = states.iter().filter(|s| s.region == Some(*region));
            let (sales, stores, new_stores) = members.fold((0.0, 0, 0), |acc, s| {
                (acc.0 + s.sales, acc.1 + s.stores, acc.2 + s.new_stores)
            });
            RegionOverview {
                region: *region,
                description: info.description.to_string(),
                color: info.color.to_string(),
                sales,
                stores,
                new_stores,
                selected: selected == Some(*region),
            }
        })
        .collect();

    let variances: Vec<f64> = states.iter().map(|s| s.variance).collect();
    RegionalSales {
        total_stores: states.iter().map(|s| s.stores).sum(),
        total_new_stores: states.iter().map(|s| s.new_stores).sum(),
        average_variance: mean(&variances),
        total_sales,
        states,
        overview,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{record, with_measures};

    #[test]
    fn sales_trend_groups_by_year_and_month() {
        let records = vec![
            with_measures(record(2024, 3, Category::Books, Region::Europe, 10.0), 5.0, 1.0, 1.0),
            with_measures(record(2023, 3, Category::Books, Region::Europe, 10.0), 7.0, 1.0, 1.0),
            with_measures(record(2024, 3, Category::Sports, Region::Africa, 10.0), 6.0, 1.0, 1.0),
        ];
        let trend = sales_trend(&records);
        assert_eq!(trend.months.len(), 2);
        assert_eq!(trend.months[0].year, 2023);
        assert_eq!(trend.months[1].year, 2024);
        assert_eq!(trend.months[1].sales, 11.0);
        assert_eq!(trend.months[1].count, 2);
        assert_eq!(trend.months[1].month, "Mar");
        assert_eq!(trend.total_sales, 18.0);
    }

    #[test]
    fn sales_trend_keeps_last_twelve_months() {
        let mut records = Vec::new();
        for year in [2023, 2024] {
            for month in 1..=12 {
                records.push(with_measures(
                    record(year, month, Category::Books, Region::Europe, 1.0),
                    month as f64,
                    1.0,
                    1.0,
                ));
            }
        }
        let trend = sales_trend(&records);
        assert_eq!(trend.months.len(), SALES_TREND_WINDOW);
        assert!(trend.months.iter().all(|m| m.year == 2024));
        assert_eq!(trend.months[0].month, "Jan");
        // 1 -> 12
        assert_eq!(trend.growth, 1100.0);
    }

    #[test]
    fn empty_input_gives_empty_charts() {
        let trend = sales_trend(&[]);
        assert!(trend.months.is_empty());
        assert_eq!(trend.growth, 0.0);

        let breakdown = revenue_breakdown(&[]);
        assert!(breakdown.slices.is_empty());
        assert_eq!(breakdown.total_revenue, 0.0);

        let yoy = yoy_growth(&[]);
        assert!(yoy.regions.is_empty());
        assert_eq!(yoy.average_growth, 0.0);

        let perf = performance_metrics(&[]);
        assert!(perf.quarters.is_empty());
        assert_eq!(perf.latest_avg_order_value, 0.0);
        assert_eq!(perf.customer_growth, 0.0);
    }

    #[test]
    fn revenue_breakdown_sorts_and_shares() {
        let records = vec![
            record(2024, 1, Category::Books, Region::Europe, 100.0),
            record(2024, 1, Category::Electronics, Region::Europe, 250.0),
            record(2024, 2, Category::Electronics, Region::Africa, 50.0),
            record(2024, 1, Category::Sports, Region::Europe, 200.0),
        ];
        let breakdown = revenue_breakdown(&records);
        let order: Vec<Category> = breakdown.slices.iter().map(|s| s.category).collect();
        assert_eq!(
            order,
            vec![Category::Electronics, Category::Sports, Category::Books]
        );
        assert_eq!(breakdown.total_revenue, 600.0);
        assert_eq!(breakdown.slices[0].percentage, 50.0);
        assert_eq!(breakdown.slices[1].percentage, 33.3);
        assert_eq!(breakdown.slices[2].percentage, 16.7);
        assert_eq!(breakdown.top(TOP_CATEGORY_LIST).len(), 3);
        assert_eq!(breakdown.top(1)[0].category, Category::Electronics);
    }

    #[test]
    fn revenue_percentages_sum_to_one_hundred() {
        let records: Vec<SalesRecord> = Category::ALL
            .iter()
            .enumerate()
            .map(|(i, c)| record(2024, 1, *c, Region::Europe, 1000.0 + 337.0 * i as f64))
            .collect();
        let breakdown = revenue_breakdown(&records);
        let sum: f64 = breakdown.slices.iter().map(|s| s.percentage).sum();
        // One decimal per slice, at most 0.05 drift each
        assert!((sum - 100.0).abs() <= 0.05 * breakdown.slices.len() as f64, "sum {}", sum);
    }

    #[test]
    fn yoy_growth_per_region() {
        let records = vec![
            record(2023, 1, Category::Books, Region::Europe, 100.0),
            record(2024, 1, Category::Books, Region::Europe, 150.0),
            record(2023, 1, Category::Books, Region::Africa, 200.0),
            record(2024, 1, Category::Books, Region::Africa, 150.0),
            // Only last year: not reported
            record(2023, 1, Category::Books, Region::LatinAmerica, 80.0),
        ];
        let yoy = yoy_growth(&records);
        assert_eq!(yoy.regions.len(), 2);
        assert_eq!(yoy.regions[0].region, Region::Europe);
        assert_eq!(yoy.regions[0].growth, 50.0);
        assert_eq!(yoy.regions[1].region, Region::Africa);
        assert_eq!(yoy.regions[1].growth, -25.0);
        assert_eq!(yoy.average_growth, 12.5);
    }

    #[test]
    fn yoy_growth_without_baseline_is_zero() {
        let records = vec![record(2024, 6, Category::Books, Region::Europe, 500.0)];
        let yoy = yoy_growth(&records);
        assert_eq!(yoy.regions.len(), 1);
        assert_eq!(yoy.regions[0].previous, 0.0);
        assert_eq!(yoy.regions[0].growth, 0.0);
        assert!(yoy.regions[0].growth.is_finite());
    }

    #[test]
    fn performance_orders_quarters_and_truncates() {
        let mut records = Vec::new();
        for year in [2022, 2023, 2024] {
            for month in [2, 5, 8, 11] {
                records.push(with_measures(
                    record(year, month, Category::Books, Region::Europe, 1000.0),
                    0.0,
                    40.0,
                    (year - 2021) as f64 * 10.0,
                ));
            }
        }
        let perf = performance_metrics(&records);
        assert_eq!(perf.quarters.len(), PERFORMANCE_WINDOW);
        assert_eq!(perf.quarters[0].period, "Q1 2023");
        assert_eq!(perf.quarters[7].period, "Q4 2024");
        assert_eq!(perf.latest_customers, 30.0);
        assert_eq!(perf.latest_units, 40.0);
        assert_eq!(perf.latest_avg_order_value, 1000.0 / 30.0);
        assert_eq!(perf.customer_growth, 50.0);
    }

    #[test]
    fn average_order_value_without_customers_is_zero() {
        let records = vec![with_measures(
            record(2024, 1, Category::Books, Region::Europe, 900.0),
            0.0,
            3.0,
            0.0,
        )];
        let perf = performance_metrics(&records);
        assert_eq!(perf.quarters[0].avg_order_value, 0.0);
    }

    #[test]
    fn regional_sales_is_static_and_sorted() {
        let regional = regional_sales(None);
        assert_eq!(regional.states.len(), STATE_SALES.len());
        assert_eq!(regional.states[0].state, "California");
        assert!(regional
            .states
            .windows(2)
            .all(|w| w[0].sales >= w[1].sales));
        assert_eq!(regional.total_sales, 23_000_000.0);
        assert_eq!(regional.total_stores, 192);
        assert_eq!(regional.total_new_stores, 22);
        assert!((regional.average_variance - 8.65).abs() < 1e-9);
        assert!(regional.states.iter().all(|s| !s.highlighted));
        assert_eq!(regional.overview.len(), Region::ALL.len());
    }

    #[test]
    fn regional_sales_highlights_selected_region() {
        let regional = regional_sales(Some(Region::Europe));
        let highlighted: Vec<&str> = regional
            .states
            .iter()
            .filter(|s| s.highlighted)
            .map(|s| s.state.as_str())
            .collect();
        assert_eq!(highlighted, vec!["Ohio", "Pennsylvania", "Michigan"]);

        let europe = regional
            .overview
            .iter()
            .find(|o| o.region == Region::Europe)
            .unwrap();
        assert!(europe.selected);
        assert_eq!(europe.sales, 4_950_000.0);
        assert_eq!(europe.stores, 41);
        assert_eq!(europe.new_stores, 3);

        // Africa has no states in the reference table
        let africa = regional
            .overview
            .iter()
            .find(|o| o.region == Region::Africa)
            .unwrap();
        assert_eq!(africa.sales, 0.0);
        assert!(!africa.selected);
    }
}
