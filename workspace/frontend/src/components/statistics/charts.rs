use std::collections::BTreeMap;

use explorer::{classify, Status, GOOD_THRESHOLD, WARNING_THRESHOLD};
use wasm_bindgen::prelude::*;
use web_sys::Element;
use yew::prelude::*;

use crate::api_client::eai::{EaiScore, StatusDistribution};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly)]
    fn newPlot(div_id: &str, data: JsValue, layout: JsValue, config: JsValue);
}

fn plot(element: &Element, traces: &serde_json::Value, layout: &serde_json::Value) {
    let config = serde_json::json!({"responsive": true, "displayModeBar": false});
    let div_id = element.id();
    if !div_id.is_empty() {
        newPlot(
            &div_id,
            serde_wasm_bindgen::to_value(traces).unwrap(),
            serde_wasm_bindgen::to_value(layout).unwrap(),
            serde_wasm_bindgen::to_value(&config).unwrap(),
        );
    }
}

fn base_layout() -> serde_json::Value {
    serde_json::json!({
        "margin": {"t": 10, "r": 10, "l": 50, "b": 40},
        "paper_bgcolor": "rgba(0,0,0,0)",
        "plot_bgcolor": "rgba(0,0,0,0)",
    })
}

#[derive(Properties, PartialEq)]
pub struct ScoresProps {
    pub scores: Vec<EaiScore>,
}

/// EAI over time for the filtered samples, with the tier thresholds drawn
/// as guide lines. Shows the most recent 50 dated, scored samples.
#[function_component(TrendChart)]
pub fn trend_chart(props: &ScoresProps) -> Html {
    let chart_ref = use_node_ref();
    let scores = props.scores.clone();

    use_effect_with((chart_ref.clone(), scores), move |(chart_ref, scores)| {
        if let Some(element) = chart_ref.cast::<Element>() {
            let mut points: Vec<(String, f64)> = scores
                .iter()
                .filter_map(|s| match (&s.date, s.eai) {
                    (Some(date), Some(eai)) => Some((date.clone(), eai)),
                    _ => None,
                })
                .collect();
            points.sort_by(|a, b| a.0.cmp(&b.0));
            if points.len() > 50 {
                points.drain(..points.len() - 50);
            }

            let dates: Vec<String> = points.iter().map(|p| p.0.clone()).collect();
            let values: Vec<f64> = points.iter().map(|p| p.1).collect();

            let traces = serde_json::json!([
                {
                    "x": dates,
                    "y": values,
                    "type": "scatter",
                    "mode": "lines+markers",
                    "name": "EAI Score",
                    "line": {"color": "#3b82f6", "width": 2},
                },
                {
                    "x": [points.first().map(|p| p.0.clone()), points.last().map(|p| p.0.clone())],
                    "y": [GOOD_THRESHOLD, GOOD_THRESHOLD],
                    "type": "scatter",
                    "mode": "lines",
                    "name": "Good threshold",
                    "line": {"color": Status::Good.color(), "dash": "dash", "width": 1},
                },
                {
                    "x": [points.first().map(|p| p.0.clone()), points.last().map(|p| p.0.clone())],
                    "y": [WARNING_THRESHOLD, WARNING_THRESHOLD],
                    "type": "scatter",
                    "mode": "lines",
                    "name": "Warning threshold",
                    "line": {"color": Status::Warning.color(), "dash": "dash", "width": 1},
                },
            ]);
            let mut layout = base_layout();
            layout["yaxis"] = serde_json::json!({"range": [0, 100]});
            layout["legend"] = serde_json::json!({"orientation": "h", "y": -0.25});

            plot(&element, &traces, &layout);
        }
        || ()
    });

    html! {
        <div class="chart-card">
            <h3>{"EAI Trend Over Time"}</h3>
            <div ref={chart_ref} id="chart-eai-trend" class="chart-container" style="height: 300px;"></div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct DistributionProps {
    pub distribution: StatusDistribution,
}

#[function_component(StatusDistributionChart)]
pub fn status_distribution_chart(props: &DistributionProps) -> Html {
    let chart_ref = use_node_ref();
    let distribution = props.distribution.clone();

    use_effect_with(
        (chart_ref.clone(), distribution),
        move |(chart_ref, distribution)| {
            if let Some(element) = chart_ref.cast::<Element>() {
                let tiers = [Status::Good, Status::Warning, Status::Bad, Status::Unknown];
                let labels: Vec<String> = tiers
                    .iter()
                    .map(|t| format!("{} ({})", t.label_vi(), t.label_en()))
                    .collect();
                let colors: Vec<&str> = tiers.iter().map(|t| t.color()).collect();

                let traces = serde_json::json!([{
                    "values": [
                        distribution.good,
                        distribution.warning,
                        distribution.bad,
                        distribution.unknown,
                    ],
                    "labels": labels,
                    "type": "pie",
                    "hole": 0.5,
                    "marker": {"colors": colors},
                }]);
                let mut layout = base_layout();
                layout["legend"] = serde_json::json!({"orientation": "v"});

                plot(&element, &traces, &layout);
            }
            || ()
        },
    );

    html! {
        <div class="chart-card">
            <h3>{"Status Distribution"}</h3>
            <div ref={chart_ref} id="chart-status-distribution" class="chart-container" style="height: 300px;"></div>
        </div>
    }
}

/// Average EAI per region as a horizontal bar chart, each bar colored by
/// the tier its average falls in.
#[function_component(RegionComparisonChart)]
pub fn region_comparison_chart(props: &ScoresProps) -> Html {
    let chart_ref = use_node_ref();
    let scores = props.scores.clone();

    use_effect_with((chart_ref.clone(), scores), move |(chart_ref, scores)| {
        if let Some(element) = chart_ref.cast::<Element>() {
            let mut sums: BTreeMap<String, (f64, u32)> = BTreeMap::new();
            for score in scores {
                if let (Some(region), Some(eai)) = (&score.region, score.eai) {
                    let entry = sums.entry(region.clone()).or_insert((0.0, 0));
                    entry.0 += eai;
                    entry.1 += 1;
                }
            }

            let regions: Vec<String> = sums.keys().cloned().collect();
            let averages: Vec<f64> = sums.values().map(|(sum, n)| sum / f64::from(*n)).collect();
            let colors: Vec<&str> = averages.iter().map(|avg| classify(Some(*avg)).color()).collect();

            let traces = serde_json::json!([{
                "x": averages,
                "y": regions,
                "type": "bar",
                "orientation": "h",
                "marker": {"color": colors},
            }]);
            let mut layout = base_layout();
            layout["xaxis"] = serde_json::json!({"range": [0, 100]});
            layout["margin"] = serde_json::json!({"t": 10, "r": 10, "l": 140, "b": 40});

            plot(&element, &traces, &layout);
        }
        || ()
    });

    html! {
        <div class="chart-card">
            <h3>{"EAI by Region"}</h3>
            <div ref={chart_ref} id="chart-region-comparison" class="chart-container" style="height: 300px;"></div>
        </div>
    }
}
