//! Chart payloads: the rows and config JSON handed to each D3 chart.

use sdb_chart_ui::js_bridge::{self, chart_rows};
use sdb_chart_ui::palette::{self, CHART_COLORS};
use sdb_engine::models::{
    PerformanceMetrics, RegionalSales, RevenueBreakdown, SalesTrend, YoyGrowth,
};
use sdb_engine::selection::{ChartClick, Selection};
use sdb_engine::view::DashboardView;
use serde_json::json;

pub const SALES_TREND_CHART: &str = "sales-trend-chart";
pub const REVENUE_CHART: &str = "revenue-breakdown-chart";
pub const YOY_CHART: &str = "yoy-growth-chart";
pub const PERFORMANCE_CHART: &str = "performance-chart";
pub const REGIONAL_CHART: &str = "regional-sales-chart";

/// Charts whose elements carry a category or region and feed the selection.
pub const CLICKABLE_CHARTS: [&str; 3] = [REVENUE_CHART, YOY_CHART, REGIONAL_CHART];

/// Serialized rows and config for one chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPayload {
    pub data: String,
    pub config: String,
}

pub fn sales_trend_payload(trend: &SalesTrend) -> ChartPayload {
    ChartPayload {
        // Monthly bars are not dimensioned by category or region
        data: chart_rows(&trend.months, |_| ChartClick::default()),
        config: json!({
            "xKey": "month",
            "yKey": "sales",
            "height": 300,
            "color": palette::SALES_BAR,
            "yFormat": "currency_k",
            "tooltipFormat": "currency",
            "tooltipLabel": "Sales",
        })
        .to_string(),
    }
}

pub fn revenue_payload(breakdown: &RevenueBreakdown, selection: &Selection) -> ChartPayload {
    let rows: Vec<serde_json::Value> = breakdown
        .slices
        .iter()
        .map(|s| {
            json!({
                "category": s.category,
                "revenue": s.revenue,
                "percentage": s.percentage,
                "highlighted": selection.category == Some(s.category),
                "click": ChartClick::category(s.category),
            })
        })
        .collect();
    ChartPayload {
        data: serde_json::Value::Array(rows).to_string(),
        config: json!({
            "labelKey": "category",
            "valueKey": "revenue",
            "height": 220,
            "colors": CHART_COLORS,
            "tooltipFormat": "currency",
        })
        .to_string(),
    }
}

pub fn yoy_payload(growth: &YoyGrowth, selection: &Selection) -> ChartPayload {
    let rows: Vec<serde_json::Value> = growth
        .regions
        .iter()
        .map(|r| {
            json!({
                "region": r.region,
                "growth": r.growth,
                "current": r.current,
                "previous": r.previous,
                "highlighted": selection.region == Some(r.region),
                "click": ChartClick::region(r.region.label()),
            })
        })
        .collect();
    ChartPayload {
        data: serde_json::Value::Array(rows).to_string(),
        config: json!({
            "xKey": "region",
            "yKey": "growth",
            "height": 300,
            "positiveColor": palette::POSITIVE,
            "negativeColor": palette::NEGATIVE,
            "yFormat": "percent",
            "tooltipLabel": "Growth",
            "rotateLabels": true,
        })
        .to_string(),
    }
}

pub fn performance_payload(performance: &PerformanceMetrics) -> ChartPayload {
    ChartPayload {
        data: chart_rows(&performance.quarters, |_| ChartClick::default()),
        config: json!({
            "xKey": "period",
            "height": 220,
            "yFormat": "thousands",
            "series": [
                { "key": "customers", "label": "Customers", "color": palette::CUSTOMERS },
                { "key": "units", "label": "Units", "color": palette::UNITS },
            ],
        })
        .to_string(),
    }
}

pub fn regional_payload(regional: &RegionalSales) -> ChartPayload {
    ChartPayload {
        data: chart_rows(&regional.states, |s| ChartClick::region(&s.state)),
        config: json!({
            "xKey": "state",
            "yKey": "sales",
            "height": 320,
            "colorKey": "color",
            "yFormat": "currency_m",
            "tooltipFormat": "currency",
            "tooltipLabel": "Sales",
            "rotateLabels": true,
        })
        .to_string(),
    }
}

/// Redraw all five charts from the current view.
pub fn render_all(view: &DashboardView, selection: &Selection) {
    let trend = sales_trend_payload(&view.sales_trend);
    js_bridge::render_bar_chart(SALES_TREND_CHART, &trend.data, &trend.config);

    let revenue = revenue_payload(&view.revenue_breakdown, selection);
    js_bridge::render_donut_chart(REVENUE_CHART, &revenue.data, &revenue.config);

    let yoy = yoy_payload(&view.yoy_growth, selection);
    js_bridge::render_bar_chart(YOY_CHART, &yoy.data, &yoy.config);

    let performance = performance_payload(&view.performance);
    js_bridge::render_area_chart(PERFORMANCE_CHART, &performance.data, &performance.config);

    let regional = regional_payload(&view.regional);
    js_bridge::render_bar_chart(REGIONAL_CHART, &regional.data, &regional.config);
}
