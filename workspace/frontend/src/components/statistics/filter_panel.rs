use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::api_client::eai::EaiFilters;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub filters: EaiFilters,
    pub regions: Vec<String>,
    pub stations: Vec<String>,
    pub on_change: Callback<EaiFilters>,
    pub on_apply: Callback<()>,
}

#[function_component(FilterPanel)]
pub fn filter_panel(props: &Props) -> Html {
    let station_disabled = props.filters.region.is_empty();
    let layer_disabled = props.filters.sample_type == "SEDIMENT";

    let on_region = {
        let filters = props.filters.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                let mut next = filters.clone();
                next.region = select.value();
                // Stations are scoped to their region.
                next.station = String::new();
                on_change.emit(next);
            }
        })
    };

    let on_station = {
        let filters = props.filters.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                let mut next = filters.clone();
                next.station = select.value();
                on_change.emit(next);
            }
        })
    };

    let on_sample_type = {
        let filters = props.filters.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                let mut next = filters.clone();
                next.sample_type = select.value();
                // Sediment samples have no water layer.
                if next.sample_type == "SEDIMENT" {
                    next.water_layer = String::new();
                }
                on_change.emit(next);
            }
        })
    };

    let on_water_layer = {
        let filters = props.filters.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                let mut next = filters.clone();
                next.water_layer = select.value();
                on_change.emit(next);
            }
        })
    };

    let on_start_date = {
        let filters = props.filters.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                let mut next = filters.clone();
                next.start_date = input.value();
                on_change.emit(next);
            }
        })
    };

    let on_end_date = {
        let filters = props.filters.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                let mut next = filters.clone();
                next.end_date = input.value();
                on_change.emit(next);
            }
        })
    };

    let on_apply = {
        let on_apply = props.on_apply.clone();
        Callback::from(move |_| on_apply.emit(()))
    };

    html! {
        <div class="filter-panel">
            <div class="filter-grid">
                <div class="filter-group">
                    <span class="filter-label">{"Region"}</span>
                    <select onchange={on_region}>
                        <option value="" selected={props.filters.region.is_empty()}>{"All Regions"}</option>
                        { for props.regions.iter().map(|r| html! {
                            <option value={r.clone()} selected={props.filters.region == *r}>{r}</option>
                        })}
                    </select>
                </div>

                <div class="filter-group">
                    <span class="filter-label">
                        {"Station"}
                        { if station_disabled { html! { <span class="filter-hint">{" (select region first)"}</span> } } else { html! {} } }
                    </span>
                    <select onchange={on_station} disabled={station_disabled}>
                        <option value="" selected={props.filters.station.is_empty()}>{"All Stations"}</option>
                        { for props.stations.iter().map(|s| html! {
                            <option value={s.clone()} selected={props.filters.station == *s}>{s}</option>
                        })}
                    </select>
                </div>

                <div class="filter-group">
                    <span class="filter-label">{"Sample Type"}</span>
                    <select onchange={on_sample_type}>
                        <option value="" selected={props.filters.sample_type.is_empty()}>{"All Types"}</option>
                        <option value="SEDIMENT" selected={props.filters.sample_type == "SEDIMENT"}>{"Sediment"}</option>
                        <option value="WATER_QUALITY" selected={props.filters.sample_type == "WATER_QUALITY"}>{"Water Quality"}</option>
                    </select>
                </div>

                <div class="filter-group">
                    <span class="filter-label">
                        {"Water Layer"}
                        { if layer_disabled { html! { <span class="filter-hint">{" (N/A for sediment)"}</span> } } else { html! {} } }
                    </span>
                    <select onchange={on_water_layer} disabled={layer_disabled}>
                        <option value="" selected={props.filters.water_layer.is_empty()}>{"All Layers"}</option>
                        <option value="SURFACE" selected={props.filters.water_layer == "SURFACE"}>{"Surface"}</option>
                        <option value="MIDDLE" selected={props.filters.water_layer == "MIDDLE"}>{"Middle"}</option>
                        <option value="BOTTOM" selected={props.filters.water_layer == "BOTTOM"}>{"Bottom"}</option>
                    </select>
                </div>

                <div class="filter-group">
                    <span class="filter-label">{"Start Date"}</span>
                    <input type="date" value={props.filters.start_date.clone()} onchange={on_start_date} />
                </div>

                <div class="filter-group">
                    <span class="filter-label">{"End Date"}</span>
                    <input type="date" value={props.filters.end_date.clone()} onchange={on_end_date} />
                </div>

                <div class="filter-group filter-group-button">
                    <button class="btn btn-primary" onclick={on_apply}>{"Apply Filters"}</button>
                </div>
            </div>
        </div>
    }
}
