use std::cell::RefCell;
use std::rc::Rc;

use explorer::{Command, Explorer, LoadState};
use yew::prelude::*;

use super::chart::PredictionChart;
use super::controls::CascadeControls;
use super::forecast_table::ForecastTable;
use crate::api_client::prediction as api;
use crate::common::error::ErrorDisplay;
use crate::common::loading::Loading;
use crate::common::toast::ToastContext;

/// Dispatches one explorer command and feeds the outcome, together with
/// the ticket minted at dispatch time, back into the shared state, then
/// repaints. Staleness filtering happens inside the explorer; a superseded
/// response changes nothing.
fn run(
    explorer: Rc<RefCell<Explorer>>,
    command: Command,
    updater: UseForceUpdateHandle,
    toast: ToastContext,
) {
    wasm_bindgen_futures::spawn_local(async move {
        match command {
            Command::ListTypes { ticket } => {
                let result = api::list_types().await;
                if let Err(err) = &result {
                    toast.show_error(err.message().to_string());
                }
                explorer.borrow_mut().resolve_types(ticket, result);
            }
            Command::ListAreas { ticket, type_id } => {
                let result = api::list_areas(&type_id).await;
                explorer.borrow_mut().resolve_areas(ticket, result);
            }
            Command::ListStations { ticket, type_id, area } => {
                let result = api::list_stations(&type_id, &area).await;
                explorer.borrow_mut().resolve_stations(ticket, result);
            }
            Command::LoadHistorical { ticket, query } => {
                let result = api::get_historical(&query).await;
                if let Err(err) = &result {
                    toast.show_error(err.message().to_string());
                }
                explorer.borrow_mut().resolve_historical(ticket, result);
            }
            Command::LoadForecast { ticket, type_id, area, station } => {
                let result = api::get_forecast(&type_id, &area, &station).await;
                if let Err(err) = &result {
                    toast.show_error(err.message().to_string());
                }
                explorer.borrow_mut().resolve_forecast(ticket, result);
            }
        }
        updater.force_update();
    });
}

#[function_component(Prediction)]
pub fn prediction() -> Html {
    let explorer = use_mut_ref(Explorer::new);
    let updater = use_force_update();
    let toast = use_context::<ToastContext>().unwrap();

    // Repaints after a mutator ran, then dispatches whatever it asked for.
    let dispatch = {
        let explorer = explorer.clone();
        let toast = toast.clone();
        Callback::from(move |command: Option<Command>| {
            updater.force_update();
            if let Some(command) = command {
                run(explorer.clone(), command, updater.clone(), toast.clone());
            }
        })
    };

    // Type indicators load once on page entry.
    {
        let explorer = explorer.clone();
        let dispatch = dispatch.clone();
        use_effect_with((), move |_| {
            let command = explorer.borrow_mut().load_types();
            dispatch.emit(Some(command));
            || ()
        });
    }

    let on_select_type = {
        let explorer = explorer.clone();
        let dispatch = dispatch.clone();
        Callback::from(move |value: Option<String>| {
            let command = explorer.borrow_mut().select_type(value);
            dispatch.emit(command);
        })
    };

    let on_select_area = {
        let explorer = explorer.clone();
        let dispatch = dispatch.clone();
        Callback::from(move |value: Option<String>| {
            let command = explorer.borrow_mut().select_area(value);
            dispatch.emit(command);
        })
    };

    let on_select_station = {
        let explorer = explorer.clone();
        let dispatch = dispatch.clone();
        Callback::from(move |value: Option<String>| {
            explorer.borrow_mut().select_station(value);
            dispatch.emit(None);
        })
    };

    let on_apply = {
        let explorer = explorer.clone();
        let dispatch = dispatch.clone();
        Callback::from(move |_: ()| {
            let command = explorer.borrow_mut().apply();
            dispatch.emit(command);
        })
    };

    let on_predict = {
        let explorer = explorer.clone();
        let dispatch = dispatch.clone();
        Callback::from(move |_: ()| {
            let command = explorer.borrow_mut().predict();
            dispatch.emit(command);
        })
    };

    let on_retry_types = {
        let explorer = explorer.clone();
        let dispatch = dispatch.clone();
        Callback::from(move |_: ()| {
            let command = explorer.borrow_mut().load_types();
            dispatch.emit(Some(command));
        })
    };

    let state = explorer.borrow();
    let stitched = state.stitched();
    let historical_ready = state.historical_state() == LoadState::Ready;

    html! {
        <div class="prediction-page">
            <div class="prediction-header">
                <h2>{"EAI Prediction"}</h2>
                <p>{"Load the recorded EAI history for a station, then generate its forecast."}</p>
            </div>

            { if let Some(err) = state.types_error() {
                html! {
                    <ErrorDisplay
                        message={err.message().to_string()}
                        on_retry={Some(on_retry_types)}
                    />
                }
            } else if state.types_loading() && state.type_options().is_empty() {
                html! { <Loading text="Loading type indicators..." /> }
            } else {
                html! {}
            }}

            <CascadeControls
                types={state.type_options().to_vec()}
                types_loading={state.types_loading()}
                selected_type={state.selection().type_id().map(str::to_string)}
                areas={state.area_options().to_vec()}
                areas_loading={state.areas_loading()}
                areas_error={state.areas_error().map(|e| e.message().to_string())}
                selected_area={state.selection().area().map(str::to_string)}
                stations={state.station_options().to_vec()}
                stations_loading={state.stations_loading()}
                stations_error={state.stations_error().map(|e| e.message().to_string())}
                selected_station={state.selection().station().map(str::to_string)}
                can_apply={state.can_apply()}
                can_predict={state.can_predict()}
                applying={state.historical_state() == LoadState::Loading}
                predicting={state.forecast_state() == LoadState::Loading}
                {on_select_type}
                {on_select_area}
                {on_select_station}
                on_apply={on_apply.clone()}
                {on_predict}
            />

            { if state.historical_state() == LoadState::Failed {
                let message = state
                    .historical_error()
                    .map(|e| e.message().to_string())
                    .unwrap_or_else(|| "Failed to load historical data".to_string());
                html! { <ErrorDisplay {message} on_retry={Some(on_apply)} /> }
            } else {
                html! {}
            }}

            { if state.forecast_state() == LoadState::Failed {
                let message = state
                    .forecast_error()
                    .map(|e| e.message().to_string())
                    .unwrap_or_else(|| "Failed to generate forecast".to_string());
                html! { <ErrorDisplay {message} /> }
            } else {
                html! {}
            }}

            { if historical_ready && state.historical().is_empty() {
                html! {
                    <div class="empty-hint">
                        {"No recorded samples for this selection."}
                    </div>
                }
            } else {
                html! {}
            }}

            { if historical_ready && !state.historical().is_empty() {
                html! { <PredictionChart series={stitched} /> }
            } else {
                html! {}
            }}

            { if state.forecast_state() == LoadState::Ready {
                html! { <ForecastTable points={state.forecast().to_vec()} /> }
            } else {
                html! {}
            }}
        </div>
    }
}
