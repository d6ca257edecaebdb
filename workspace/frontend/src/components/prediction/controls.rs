use explorer::TypeIndicator;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub types: Vec<TypeIndicator>,
    pub types_loading: bool,
    pub selected_type: Option<String>,

    pub areas: Vec<String>,
    pub areas_loading: bool,
    pub areas_error: Option<String>,
    pub selected_area: Option<String>,

    pub stations: Vec<String>,
    pub stations_loading: bool,
    pub stations_error: Option<String>,
    pub selected_station: Option<String>,

    pub can_apply: bool,
    pub can_predict: bool,
    pub applying: bool,
    pub predicting: bool,

    pub on_select_type: Callback<Option<String>>,
    pub on_select_area: Callback<Option<String>>,
    pub on_select_station: Callback<Option<String>>,
    pub on_apply: Callback<()>,
    pub on_predict: Callback<()>,
}

fn select_value(e: Event) -> Option<Option<String>> {
    let select = e.target_dyn_into::<HtmlSelectElement>()?;
    let value = select.value();
    Some((!value.is_empty()).then_some(value))
}

/// The three dependent selects plus the two gated action buttons. Each
/// level below the type stays disabled until its parent is chosen; a failed
/// level lookup shows inline and retries by re-selecting the parent.
#[function_component(CascadeControls)]
pub fn cascade_controls(props: &Props) -> Html {
    let on_type_change = {
        let on_select_type = props.on_select_type.clone();
        Callback::from(move |e: Event| {
            if let Some(value) = select_value(e) {
                on_select_type.emit(value);
            }
        })
    };

    let on_area_change = {
        let on_select_area = props.on_select_area.clone();
        Callback::from(move |e: Event| {
            if let Some(value) = select_value(e) {
                on_select_area.emit(value);
            }
        })
    };

    let on_station_change = {
        let on_select_station = props.on_select_station.clone();
        Callback::from(move |e: Event| {
            if let Some(value) = select_value(e) {
                on_select_station.emit(value);
            }
        })
    };

    let retry_areas = {
        let on_select_type = props.on_select_type.clone();
        let selected_type = props.selected_type.clone();
        Callback::from(move |_: MouseEvent| {
            on_select_type.emit(selected_type.clone());
        })
    };

    let retry_stations = {
        let on_select_area = props.on_select_area.clone();
        let selected_area = props.selected_area.clone();
        Callback::from(move |_: MouseEvent| {
            on_select_area.emit(selected_area.clone());
        })
    };

    let on_apply = {
        let on_apply = props.on_apply.clone();
        Callback::from(move |_| on_apply.emit(()))
    };

    let on_predict = {
        let on_predict = props.on_predict.clone();
        Callback::from(move |_| on_predict.emit(()))
    };

    html! {
        <div class="prediction-controls">
            <div class="control-group">
                <span class="control-label">
                    {"Type Indicator"}
                    { if props.types_loading { html! { <span class="filter-hint">{" (loading...)"}</span> } } else { html! {} } }
                </span>
                <select onchange={on_type_change}>
                    <option value="" selected={props.selected_type.is_none()}>{"Choose a type..."}</option>
                    { for props.types.iter().map(|t| html! {
                        <option
                            value={t.id.clone()}
                            selected={props.selected_type.as_deref() == Some(t.id.as_str())}
                        >
                            {&t.label}
                        </option>
                    })}
                </select>
            </div>

            <div class="control-group">
                <span class="control-label">
                    {"Area"}
                    { if props.areas_loading { html! { <span class="filter-hint">{" (loading...)"}</span> } } else { html! {} } }
                </span>
                <select onchange={on_area_change} disabled={props.selected_type.is_none()}>
                    <option value="" selected={props.selected_area.is_none()}>{"Choose an area..."}</option>
                    { for props.areas.iter().map(|a| html! {
                        <option
                            value={a.clone()}
                            selected={props.selected_area.as_deref() == Some(a.as_str())}
                        >
                            {a}
                        </option>
                    })}
                </select>
                { if let Some(err) = &props.areas_error {
                    html! {
                        <span class="filter-hint error">
                            {err}
                            <button class="btn btn-retry" onclick={retry_areas}>{"Retry"}</button>
                        </span>
                    }
                } else {
                    html! {}
                }}
            </div>

            <div class="control-group">
                <span class="control-label">
                    {"Station"}
                    { if props.stations_loading { html! { <span class="filter-hint">{" (loading...)"}</span> } } else { html! {} } }
                </span>
                <select onchange={on_station_change} disabled={props.selected_area.is_none()}>
                    <option value="" selected={props.selected_station.is_none()}>{"Choose a station..."}</option>
                    { for props.stations.iter().map(|s| html! {
                        <option
                            value={s.clone()}
                            selected={props.selected_station.as_deref() == Some(s.as_str())}
                        >
                            {s}
                        </option>
                    })}
                </select>
                { if let Some(err) = &props.stations_error {
                    html! {
                        <span class="filter-hint error">
                            {err}
                            <button class="btn btn-retry" onclick={retry_stations}>{"Retry"}</button>
                        </span>
                    }
                } else {
                    html! {}
                }}
            </div>

            <div class="control-group control-group-buttons">
                <button
                    class="btn btn-primary"
                    onclick={on_apply}
                    disabled={!props.can_apply || props.applying}
                >
                    { if props.applying { "Loading..." } else { "Load History" } }
                </button>
                <button
                    class="btn btn-secondary"
                    onclick={on_predict}
                    disabled={!props.can_predict || props.predicting}
                >
                    { if props.predicting { "Predicting..." } else { "Generate Forecast" } }
                </button>
            </div>
        </div>
    }
}
