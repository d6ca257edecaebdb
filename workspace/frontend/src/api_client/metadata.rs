use explorer::FetchError;
use serde::Deserialize;

use crate::api_client;

#[derive(Debug, Deserialize)]
struct RegionsResponse {
    regions: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct StationsResponse {
    stations: Vec<String>,
}

/// All regions present in the sample store.
pub async fn list_regions() -> Result<Vec<String>, FetchError> {
    let response: RegionsResponse = api_client::get("/regions").await?;
    Ok(response.regions)
}

/// All stations, optionally narrowed to one region.
pub async fn list_stations(region: Option<&str>) -> Result<Vec<String>, FetchError> {
    let url = match region {
        Some(region) => format!("/stations?region={}", api_client::encode(region)),
        None => "/stations".to_string(),
    };
    let response: StationsResponse = api_client::get(&url).await?;
    Ok(response.stations)
}
