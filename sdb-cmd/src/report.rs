//! Text and JSON rendering of a dashboard view.

use clap::ValueEnum;
use sdb_engine::view::DashboardView;
use sdb_utils::format::{millions, signed_percent, thousands};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ChartKind {
    SalesTrend,
    RevenueBreakdown,
    YoyGrowth,
    Performance,
    Regional,
}

/// The summary cards as plain lines.
pub fn summary_lines(view: &DashboardView) -> Vec<String> {
    let m = &view.summary;
    vec![
        format!("Records:        {} of {}", view.filtered_count, view.record_count),
        format!(
            "Total Revenue:  {} ({} YoY)",
            millions(m.total_revenue),
            signed_percent(m.revenue_growth)
        ),
        format!("Total Sales:    {}", millions(m.total_sales)),
        format!("Customers:      {}", thousands(m.total_customers)),
        format!("Units Sold:     {}", thousands(m.total_units)),
    ]
}

/// Pretty JSON for one chart's series.
pub fn chart_json(view: &DashboardView, chart: ChartKind) -> anyhow::Result<String> {
    let json = match chart {
        ChartKind::SalesTrend => serde_json::to_string_pretty(&view.sales_trend)?,
        ChartKind::RevenueBreakdown => serde_json::to_string_pretty(&view.revenue_breakdown)?,
        ChartKind::YoyGrowth => serde_json::to_string_pretty(&view.yoy_growth)?,
        ChartKind::Performance => serde_json::to_string_pretty(&view.performance)?,
        ChartKind::Regional => serde_json::to_string_pretty(&view.regional)?,
    };
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sdb_engine::filter::FilterState;
    use sdb_engine::selection::Selection;
    use sdb_engine::view::build_view;

    #[test]
    fn empty_view_summary() {
        let view = build_view(&[], &FilterState::default(), &Selection::default());
        let lines = summary_lines(&view);
        assert_eq!(lines[0], "Records:        0 of 0");
        assert!(lines[1].contains("$0.0M"), "{}", lines[1]);
        assert!(lines[1].contains("+0.0% YoY"), "{}", lines[1]);
    }

    #[test]
    fn chart_names_parse_from_kebab_case() {
        assert_eq!(ChartKind::from_str("yoy-growth", false), Ok(ChartKind::YoyGrowth));
        assert_eq!(ChartKind::from_str("sales-trend", false), Ok(ChartKind::SalesTrend));
    }

    #[test]
    fn regional_chart_json_is_populated_without_records() {
        let view = build_view(&[], &FilterState::default(), &Selection::default());
        let json: serde_json::Value =
            serde_json::from_str(&chart_json(&view, ChartKind::Regional).unwrap()).unwrap();
        assert_eq!(json["states"].as_array().map(|a| a.len()), Some(12));
    }
}
