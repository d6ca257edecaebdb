use std::collections::BTreeMap;

use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::api_client::calculator::{calculate_eai, CalculationResult};
use crate::common::toast::ToastContext;
use crate::hooks::FetchState;

struct ParamSpec {
    id: &'static str,
    label: &'static str,
    unit: &'static str,
    min: f64,
    max: f64,
    step: f64,
}

const WATER_QUALITY_PARAMS: &[ParamSpec] = &[
    ParamSpec { id: "ph", label: "pH", unit: "", min: 0.0, max: 14.0, step: 0.1 },
    ParamSpec { id: "do_man", label: "Salinity", unit: "ppt", min: 0.0, max: 40.0, step: 0.1 },
    ParamSpec { id: "nhiet_do_nuoc", label: "Water Temperature", unit: "°C", min: 0.0, max: 40.0, step: 0.1 },
    ParamSpec { id: "nh3", label: "Ammonia (NH3)", unit: "mg/L", min: 0.0, max: 10.0, step: 0.01 },
    ParamSpec { id: "tss", label: "TSS", unit: "mg/L", min: 0.0, max: 200.0, step: 1.0 },
    ParamSpec { id: "bod5", label: "BOD5", unit: "mg/L", min: 0.0, max: 20.0, step: 0.1 },
];

const SEDIMENT_PARAMS: &[ParamSpec] = &[
    ParamSpec { id: "as", label: "Arsenic (As)", unit: "mg/kg", min: 0.0, max: 50.0, step: 0.1 },
    ParamSpec { id: "cd", label: "Cadmium (Cd)", unit: "mg/kg", min: 0.0, max: 5.0, step: 0.01 },
    ParamSpec { id: "pb", label: "Lead (Pb)", unit: "mg/kg", min: 0.0, max: 100.0, step: 0.1 },
    ParamSpec { id: "cu", label: "Copper (Cu)", unit: "mg/kg", min: 0.0, max: 150.0, step: 0.1 },
    ParamSpec { id: "zn", label: "Zinc (Zn)", unit: "mg/kg", min: 0.0, max: 400.0, step: 1.0 },
];

#[function_component(Calculator)]
pub fn calculator() -> Html {
    let sample_type = use_state(|| "WATER_QUALITY".to_string());
    let values = use_state(BTreeMap::<String, f64>::new);
    let result = use_state(FetchState::<CalculationResult>::default);
    let toast = use_context::<ToastContext>().unwrap();

    let params: &[ParamSpec] = if *sample_type == "SEDIMENT" {
        SEDIMENT_PARAMS
    } else {
        WATER_QUALITY_PARAMS
    };

    let switch_type = |target: &'static str| {
        let sample_type = sample_type.clone();
        let values = values.clone();
        let result = result.clone();
        Callback::from(move |_| {
            sample_type.set(target.to_string());
            // Parameter sets do not overlap between the two sample types.
            values.set(BTreeMap::new());
            result.set(FetchState::NotStarted);
        })
    };

    let on_input = |id: &'static str| {
        let values = values.clone();
        Callback::from(move |e: Event| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                let mut next = (*values).clone();
                match input.value().parse::<f64>() {
                    Ok(value) => {
                        next.insert(id.to_string(), value);
                    }
                    Err(_) => {
                        next.remove(id);
                    }
                }
                values.set(next);
            }
        })
    };

    let on_calculate = {
        let sample_type = sample_type.clone();
        let values = values.clone();
        let result = result.clone();
        let toast = toast.clone();
        Callback::from(move |_| {
            let sample_type = (*sample_type).clone();
            let data = (*values).clone();
            let result = result.clone();
            let toast = toast.clone();
            result.set(FetchState::Loading);
            wasm_bindgen_futures::spawn_local(async move {
                match calculate_eai(&sample_type, &data).await {
                    Ok(calculation) => {
                        toast.show_success("EAI calculated".to_string());
                        result.set(FetchState::Success(calculation));
                    }
                    Err(err) => {
                        toast.show_error(err.message().to_string());
                        result.set(FetchState::Error(err.message().to_string()));
                    }
                }
            });
        })
    };

    html! {
        <div class="calculator-page">
            <div class="calculator-header">
                <h2>{"EAI Calculator"}</h2>
                <p>{"Enter environmental parameters to calculate the Environmental Alert Index for one sample."}</p>
            </div>

            <div class="sample-type-selector">
                <button
                    class={classes!("type-btn", (*sample_type == "WATER_QUALITY").then_some("active"))}
                    onclick={switch_type("WATER_QUALITY")}
                >
                    {"Water Quality"}
                </button>
                <button
                    class={classes!("type-btn", (*sample_type == "SEDIMENT").then_some("active"))}
                    onclick={switch_type("SEDIMENT")}
                >
                    {"Sediment"}
                </button>
            </div>

            <div class="input-section">
                <div class="param-grid">
                    { for params.iter().map(|param| {
                        let value = values
                            .get(param.id)
                            .map(|v| v.to_string())
                            .unwrap_or_default();
                        html! {
                            <div class="param-input" key={param.id}>
                                <label for={param.id}>
                                    {param.label}
                                    { if param.unit.is_empty() {
                                        html! {}
                                    } else {
                                        html! { <span class="unit">{ format!(" ({})", param.unit) }</span> }
                                    }}
                                </label>
                                <input
                                    type="number"
                                    id={param.id}
                                    min={param.min.to_string()}
                                    max={param.max.to_string()}
                                    step={param.step.to_string()}
                                    placeholder={format!("{} - {}", param.min, param.max)}
                                    {value}
                                    onchange={on_input(param.id)}
                                />
                            </div>
                        }
                    })}
                </div>

                <button
                    class="btn btn-primary calculate-btn"
                    onclick={on_calculate}
                    disabled={result.is_loading() || values.is_empty()}
                >
                    { if result.is_loading() { "Calculating..." } else { "Calculate EAI" } }
                </button>
            </div>

            { match &*result {
                FetchState::Success(calculation) => html! { <ResultCard result={calculation.clone()} /> },
                FetchState::Error(err) => html! { <div class="error-message">{err}</div> },
                _ => html! {},
            }}
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ResultCardProps {
    result: CalculationResult,
}

#[function_component(ResultCard)]
fn result_card(props: &ResultCardProps) -> Html {
    let result = &props.result;
    let eai = result
        .eai
        .map(|v| format!("{v:.1}"))
        .unwrap_or_else(|| "N/A".to_string());

    html! {
        <div class={classes!("result-card", result.status.as_str())}>
            <div class="result-eai">{eai}</div>
            <div class="result-status">{&result.status_label.vi}</div>
            <div class="result-details">
                <h4>{"Sub-Indices:"}</h4>
                <div class="sub-indices">
                    { for result.sub_indices.iter().map(|(name, value)| {
                        let value = value
                            .map(|v| format!("{v:.1}"))
                            .unwrap_or_else(|| "N/A".to_string());
                        html! {
                            <div class="sub-index-item" key={name.clone()}>
                                <span class="sub-index-label">{name}{":"}</span>
                                <span class="sub-index-value">{value}</span>
                            </div>
                        }
                    })}
                </div>
            </div>
        </div>
    }
}
