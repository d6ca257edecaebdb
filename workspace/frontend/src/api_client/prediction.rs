use explorer::{FetchError, ForecastPoint, HistoricalPoint, HistoricalQuery, TypeIndicator};
use serde::{Deserialize, Serialize};

use crate::api_client;

#[derive(Debug, Deserialize)]
struct TypesResponse {
    types: Vec<TypeIndicator>,
}

#[derive(Debug, Deserialize)]
struct AreasResponse {
    areas: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct StationsResponse {
    stations: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct HistoricalResponse {
    historical: Vec<HistoricalPoint>,
}

#[derive(Debug, Serialize)]
struct ForecastRequest<'a> {
    type_indicator: &'a str,
    area: &'a str,
    station: &'a str,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    predictions: Vec<ForecastPoint>,
}

/// Lists the type indicators the forecast service has models for.
pub async fn list_types() -> Result<Vec<TypeIndicator>, FetchError> {
    let response: TypesResponse = api_client::get("/prediction/types").await?;
    log::info!("Loaded {} prediction types", response.types.len());
    Ok(response.types)
}

/// Lists the areas covered by one type indicator.
pub async fn list_areas(type_id: &str) -> Result<Vec<String>, FetchError> {
    let url = format!(
        "/prediction/areas?type_indicator={}",
        api_client::encode(type_id)
    );
    let response: AreasResponse = api_client::get(&url).await?;
    Ok(response.areas)
}

/// Lists the stations of one area under one type indicator.
pub async fn list_stations(type_id: &str, area: &str) -> Result<Vec<String>, FetchError> {
    let url = format!(
        "/prediction/stations?type_indicator={}&area={}",
        api_client::encode(type_id),
        api_client::encode(area)
    );
    let response: StationsResponse = api_client::get(&url).await?;
    Ok(response.stations)
}

/// Fetches the recorded EAI series for a fully resolved selection. The
/// sample store keys areas as regions and takes the decomposed type terms.
pub async fn get_historical(query: &HistoricalQuery) -> Result<Vec<HistoricalPoint>, FetchError> {
    let mut url = format!(
        "/prediction/historical?region={}&station={}&sample_type={}",
        api_client::encode(&query.area),
        api_client::encode(&query.station),
        query.sample_type.as_str(),
    );
    if let Some(layer) = query.water_layer {
        url.push_str(&format!("&water_layer={}", layer.as_str()));
    }

    let response: HistoricalResponse = api_client::get(&url).await?;
    log::info!(
        "Loaded {} historical points for {}/{}",
        response.historical.len(),
        query.area,
        query.station
    );
    Ok(response.historical)
}

/// Requests the fixed-horizon forecast for a fully resolved selection. The
/// service rejects stations with too little history; that reason comes back
/// as `FetchError::Service`.
pub async fn get_forecast(
    type_id: &str,
    area: &str,
    station: &str,
) -> Result<Vec<ForecastPoint>, FetchError> {
    let request = ForecastRequest { type_indicator: type_id, area, station };
    let response: ForecastResponse = api_client::post("/prediction/forecast", &request).await?;
    log::info!(
        "Loaded {} forecast periods for {}/{}",
        response.predictions.len(),
        area,
        station
    );
    Ok(response.predictions)
}
