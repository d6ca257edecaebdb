use yew::prelude::*;

use super::charts::{RegionComparisonChart, StatusDistributionChart, TrendChart};
use super::data_table::DataTable;
use super::filter_panel::FilterPanel;
use super::stats::StatusCards;
use crate::api_client::eai::{fetch_eai, EaiFilters, EaiResponse};
use crate::api_client::metadata;
use crate::common::fetch_render::FetchRender;
use crate::hooks::FetchState;

#[function_component(Statistics)]
pub fn statistics() -> Html {
    let filters = use_state(EaiFilters::default);
    let regions = use_state(Vec::<String>::new);
    let stations = use_state(Vec::<String>::new);
    let data = use_state(|| FetchState::<EaiResponse>::Loading);

    // Region options and the unfiltered result set, once on mount.
    {
        let regions = regions.clone();
        let data = data.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match metadata::list_regions().await {
                    Ok(list) => regions.set(list),
                    Err(err) => log::error!("Failed to load regions: {}", err),
                }
            });
            wasm_bindgen_futures::spawn_local(async move {
                match fetch_eai(&EaiFilters::default()).await {
                    Ok(response) => data.set(FetchState::Success(response)),
                    Err(err) => data.set(FetchState::Error(err.message().to_string())),
                }
            });
            || ()
        });
    }

    // Station options follow the region filter.
    {
        let stations = stations.clone();
        use_effect_with(filters.region.clone(), move |region| {
            let region = region.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let scope = if region.is_empty() { None } else { Some(region.as_str()) };
                match metadata::list_stations(scope).await {
                    Ok(list) => stations.set(list),
                    Err(err) => log::error!("Failed to load stations: {}", err),
                }
            });
            || ()
        });
    }

    let refetch = {
        let filters = filters.clone();
        let data = data.clone();
        Callback::from(move |_: ()| {
            let snapshot = (*filters).clone();
            let data = data.clone();
            data.set(FetchState::Loading);
            wasm_bindgen_futures::spawn_local(async move {
                match fetch_eai(&snapshot).await {
                    Ok(response) => data.set(FetchState::Success(response)),
                    Err(err) => data.set(FetchState::Error(err.message().to_string())),
                }
            });
        })
    };

    let on_change = {
        let filters = filters.clone();
        Callback::from(move |next: EaiFilters| filters.set(next))
    };

    let render_results = Callback::from(|response: EaiResponse| {
        html! {
            <>
                <StatusCards
                    average_eai={response.average_eai}
                    distribution={response.status_distribution.clone()}
                    total={response.total}
                />
                <div class="charts-section">
                    <TrendChart scores={response.eai_scores.clone()} />
                    <StatusDistributionChart distribution={response.status_distribution.clone()} />
                </div>
                <RegionComparisonChart scores={response.eai_scores.clone()} />
                <DataTable scores={response.eai_scores} />
            </>
        }
    });

    html! {
        <>
            <FilterPanel
                filters={(*filters).clone()}
                regions={(*regions).clone()}
                stations={(*stations).clone()}
                {on_change}
                on_apply={refetch.clone()}
            />
            <FetchRender<EaiResponse>
                state={(*data).clone()}
                render={render_results}
                on_retry={Some(refetch)}
            />
        </>
    }
}
