use std::collections::BTreeMap;

use explorer::{FetchError, Status, StatusLabel};
use serde::{Deserialize, Serialize};

use crate::api_client;

#[derive(Debug, Serialize)]
struct CalculateRequest<'a> {
    sample_type: &'a str,
    data: &'a BTreeMap<String, f64>,
}

/// Score of one manually entered sample.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CalculationResult {
    pub eai: Option<f64>,
    pub status: Status,
    pub status_label: StatusLabel,
    pub sub_indices: BTreeMap<String, Option<f64>>,
}

/// Scores one set of measured parameters.
pub async fn calculate_eai(
    sample_type: &str,
    data: &BTreeMap<String, f64>,
) -> Result<CalculationResult, FetchError> {
    let request = CalculateRequest { sample_type, data };
    api_client::post("/calculate-eai", &request).await
}
