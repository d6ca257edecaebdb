use chrono::NaiveDate;
use explorer::{ChartPoint, StitchedSeries, Status, GOOD_THRESHOLD, WARNING_THRESHOLD};
use wasm_bindgen::prelude::*;
use web_sys::Element;
use yew::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly)]
    fn newPlot(div_id: &str, data: JsValue, layout: JsValue, config: JsValue);
}

fn dates(points: &[ChartPoint]) -> Vec<String> {
    points.iter().map(|p| p.date.to_string()).collect()
}

fn values(points: &[ChartPoint]) -> Vec<Option<f64>> {
    points.iter().map(|p| p.eai).collect()
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub series: StitchedSeries,
}

/// Recorded history as a solid line and the forecast as a dashed line that
/// continues from the last recorded point, over a shared category axis.
#[function_component(PredictionChart)]
pub fn prediction_chart(props: &Props) -> Html {
    let chart_ref = use_node_ref();
    let series = props.series.clone();

    use_effect_with((chart_ref.clone(), series), move |(chart_ref, series)| {
        if let Some(element) = chart_ref.cast::<Element>() {
            let labels: Vec<String> = series.labels.iter().map(NaiveDate::to_string).collect();

            let traces = serde_json::json!([
                {
                    "x": dates(&series.historical),
                    "y": values(&series.historical),
                    "type": "scatter",
                    "mode": "lines+markers",
                    "name": "Recorded",
                    "line": {"color": "#3b82f6", "width": 2},
                },
                {
                    "x": dates(&series.forecast),
                    "y": values(&series.forecast),
                    "type": "scatter",
                    "mode": "lines+markers",
                    "name": "Forecast",
                    "line": {"color": "#f97316", "width": 2, "dash": "dash"},
                },
                {
                    "x": [labels.first(), labels.last()],
                    "y": [GOOD_THRESHOLD, GOOD_THRESHOLD],
                    "type": "scatter",
                    "mode": "lines",
                    "name": "Good threshold",
                    "line": {"color": Status::Good.color(), "dash": "dot", "width": 1},
                },
                {
                    "x": [labels.first(), labels.last()],
                    "y": [WARNING_THRESHOLD, WARNING_THRESHOLD],
                    "type": "scatter",
                    "mode": "lines",
                    "name": "Warning threshold",
                    "line": {"color": Status::Warning.color(), "dash": "dot", "width": 1},
                },
            ]);

            let layout = serde_json::json!({
                "margin": {"t": 10, "r": 10, "l": 50, "b": 60},
                "paper_bgcolor": "rgba(0,0,0,0)",
                "plot_bgcolor": "rgba(0,0,0,0)",
                "yaxis": {"range": [0, 100]},
                "xaxis": {
                    "type": "category",
                    "categoryorder": "array",
                    "categoryarray": labels,
                    "tickangle": 45,
                },
                "legend": {"orientation": "h", "y": -0.3},
            });
            let config = serde_json::json!({"responsive": true, "displayModeBar": false});

            let div_id = element.id();
            if !div_id.is_empty() {
                newPlot(
                    &div_id,
                    serde_wasm_bindgen::to_value(&traces).unwrap(),
                    serde_wasm_bindgen::to_value(&layout).unwrap(),
                    serde_wasm_bindgen::to_value(&config).unwrap(),
                );
            }
        }
        || ()
    });

    html! {
        <div class="chart-card">
            <h3>{"History and Forecast"}</h3>
            <div ref={chart_ref} id="chart-prediction" class="chart-container" style="height: 360px;"></div>
        </div>
    }
}
