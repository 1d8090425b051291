//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! D3.js chart functions live in `assets/js/*.js`, are embedded at compile
//! time and evaluated as globals (no ES modules) exposed via `window.*`.
//! This module serializes chart rows, calls those globals, and routes chart
//! clicks back into Rust as [`ChartClick`] values.

use sdb_engine::selection::ChartClick;
use serde::Serialize;
use wasm_bindgen::prelude::*;

// Embed all D3 chart JS files at compile time
static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static BAR_CHART_JS: &str = include_str!("../assets/js/bar-chart.js");
static DONUT_CHART_JS: &str = include_str!("../assets/js/donut-chart.js");
static AREA_CHART_JS: &str = include_str!("../assets/js/area-chart.js");

/// Global functions promoted to `window` once D3 has loaded.
const CHART_FUNCTIONS: [&str; 7] = [
    "renderBarChart",
    "renderDonutChart",
    "renderAreaChart",
    "showTooltip",
    "hideTooltip",
    "formatValue",
    "emitChartClick",
];

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('SDB JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Quote a string as a JS string literal.
fn js_string(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| "''".to_string())
}

/// Initialize chart scripts with a wait-for-D3 polling loop.
///
/// The scripts are evaluated at global scope via indirect `eval` once D3 is
/// ready, then each function is promoted to `window.*`. Safe to call on
/// every render; only the first call loads anything.
pub fn init_charts() {
    let all_js = [TOOLTIP_JS, BAR_CHART_JS, DONUT_CHART_JS, AREA_CHART_JS].join("\n");
    let promote = CHART_FUNCTIONS
        .iter()
        .map(|f| format!("if (typeof {f} !== 'undefined') window.{f} = {f};"))
        .collect::<Vec<_>>()
        .join("\n");

    let init_js = format!(
        r#"
        (function() {{
            if (window.__sdbChartsReady || window.__sdbChartsLoading) return;
            window.__sdbChartsLoading = true;
            window.__sdbChartScripts = {scripts};
            var waitForD3 = setInterval(function() {{
                if (typeof d3 !== 'undefined') {{
                    clearInterval(waitForD3);
                    (0, eval)(window.__sdbChartScripts);
                    delete window.__sdbChartScripts;
                    {promote}
                    window.__sdbChartsReady = true;
                    console.log('SDB charts initialized');
                }}
            }}, 100);
        }})();
        "#,
        scripts = js_string(&all_js),
    );
    let _ = js_sys::eval(&init_js);
}

/// Call `window.<function>(container_id, data, config)` once the chart
/// scripts are initialized and the container element exists.
fn render_when_ready(function: &str, container_id: &str, data_json: &str, config_json: &str) {
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__sdbChartsReady &&
                    typeof window.{function} !== 'undefined' &&
                    document.getElementById({id})) {{
                    clearInterval(poll);
                    try {{
                        window.{function}({id}, {data}, {config});
                    }} catch(e) {{ console.error('[SDB] {function} error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
        id = js_string(container_id),
        data = js_string(data_json),
        config = js_string(config_json),
    ));
}

/// Render a bar chart (sales trend, YoY growth, regional sales).
pub fn render_bar_chart(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderBarChart", container_id, data_json, config_json);
}

/// Render the revenue breakdown donut.
pub fn render_donut_chart(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderDonutChart", container_id, data_json, config_json);
}

/// Render the quarterly performance area chart.
pub fn render_area_chart(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderAreaChart", container_id, data_json, config_json);
}

/// Serialize chart rows, attaching to each the click payload the chart
/// script sends back when that element is clicked.
pub fn chart_rows<T, F>(rows: &[T], click_for: F) -> String
where
    T: Serialize,
    F: Fn(&T) -> ChartClick,
{
    let values: Vec<serde_json::Value> = rows
        .iter()
        .map(|row| {
            let mut value = serde_json::to_value(row).unwrap_or(serde_json::Value::Null);
            if let serde_json::Value::Object(map) = &mut value {
                let click = serde_json::to_value(click_for(row)).unwrap_or_default();
                map.insert("click".to_string(), click);
            }
            value
        })
        .collect();
    serde_json::to_string(&values).unwrap_or_else(|_| "[]".to_string())
}

/// Route clicks on the chart in `container_id` to `on_click`.
///
/// Registers `window.__sdbChartClick_<container_id>`, which the chart
/// scripts call with a JSON payload. The handler lives for the rest of the
/// session, so register once per container.
pub fn register_click_handler<F>(container_id: &str, mut on_click: F)
where
    F: FnMut(ChartClick) + 'static,
{
    let id = container_id.to_string();
    let handler = Closure::<dyn FnMut(String)>::new(move |payload: String| {
        match ChartClick::from_json(&payload) {
            Ok(click) => {
                log::debug!("[SDB] js_bridge: click on {}: {:?}", id, click);
                on_click(click);
            }
            Err(e) => log::warn!("[SDB] js_bridge: bad click payload from {}: {}", id, e),
        }
    });

    let key = JsValue::from_str(&format!("__sdbChartClick_{}", container_id));
    if let Err(e) = js_sys::Reflect::set(&js_sys::global(), &key, handler.as_ref()) {
        log::error!(
            "[SDB] js_bridge: failed to register click handler for {}: {:?}",
            container_id,
            e
        );
    }
    handler.forget();
}
