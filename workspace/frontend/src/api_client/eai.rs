use explorer::{FetchError, Status, StatusLabel};
use serde::Deserialize;

use crate::api_client;

/// Per-tier sample counts of one result set.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct StatusDistribution {
    #[serde(default)]
    pub good: u64,
    #[serde(default)]
    pub warning: u64,
    #[serde(default)]
    pub bad: u64,
    #[serde(default)]
    pub unknown: u64,
}

impl StatusDistribution {
    pub fn total(&self) -> u64 {
        self.good + self.warning + self.bad + self.unknown
    }
}

/// One scored sample row.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EaiScore {
    pub id: String,
    pub date: Option<String>,
    pub station: Option<String>,
    pub region: Option<String>,
    pub sample_type: Option<String>,
    pub water_layer: Option<String>,
    pub eai: Option<f64>,
    pub status: Status,
    pub status_label: StatusLabel,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EaiResponse {
    pub total: u64,
    pub average_eai: Option<f64>,
    pub status_distribution: StatusDistribution,
    pub eai_scores: Vec<EaiScore>,
}

/// Filter values of the statistics panel. Empty strings mean "no filter".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EaiFilters {
    pub region: String,
    pub station: String,
    pub sample_type: String,
    pub water_layer: String,
    pub start_date: String,
    pub end_date: String,
}

/// Fetches the scored sample set matching the filters.
pub async fn fetch_eai(filters: &EaiFilters) -> Result<EaiResponse, FetchError> {
    let mut url = String::from("/eai?limit=1000");
    for (key, value) in [
        ("region", filters.region.as_str()),
        ("station", filters.station.as_str()),
        ("sample_type", filters.sample_type.as_str()),
        ("water_layer", filters.water_layer.as_str()),
        ("start_date", filters.start_date.as_str()),
        ("end_date", filters.end_date.as_str()),
    ] {
        if !value.is_empty() {
            url.push_str(&format!("&{key}={}", api_client::encode(value)));
        }
    }

    let response: EaiResponse = api_client::get(&url).await?;
    log::info!(
        "Loaded {} scored samples ({} matching in total)",
        response.eai_scores.len(),
        response.total
    );
    Ok(response)
}
