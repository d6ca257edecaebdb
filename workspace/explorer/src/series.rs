use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::status::{Status, StatusLabel};

/// One recorded sample day. `eai` is absent when the sample lacked the
/// parameters the index needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalPoint {
    pub date: NaiveDate,
    pub eai: Option<f64>,
}

/// One forecast period, dated strictly after the last recorded point.
///
/// The service classifies each period itself and ships the localized label;
/// the tier is the same one [`crate::status::classify`] would produce from
/// the score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub date: NaiveDate,
    pub eai: Option<f64>,
    pub status: Status,
    pub status_label: StatusLabel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forecast_point_wire_shape() {
        let json = r##"{
            "date": "2025-09-30",
            "eai": 72.4,
            "status": "warning",
            "status_label": {"vi": "Cảnh cáo", "en": "Warning", "color": "#eab308"}
        }"##;
        let point: ForecastPoint = serde_json::from_str(json).unwrap();
        assert_eq!(point.date, NaiveDate::from_ymd_opt(2025, 9, 30).unwrap());
        assert_eq!(point.eai, Some(72.4));
        assert_eq!(point.status, Status::Warning);
        assert_eq!(point.status_label.en, "Warning");
    }

    #[test]
    fn historical_point_tolerates_missing_score() {
        let point: HistoricalPoint = serde_json::from_str(r#"{"date": "2024-01-05", "eai": null}"#).unwrap();
        assert_eq!(point.eai, None);
    }
}
