use chrono::NaiveDate;

use crate::series::{ForecastPoint, HistoricalPoint};

/// Chart-ready coordinate: one day, one optional score.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub date: NaiveDate,
    pub eai: Option<f64>,
}

/// The two chart channels plus the combined x-axis labels.
///
/// Derived, never stored: recompute whenever either source series changes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StitchedSeries {
    /// Union of both date sequences, historical first.
    pub labels: Vec<NaiveDate>,
    pub historical: Vec<ChartPoint>,
    pub forecast: Vec<ChartPoint>,
}

/// Merges the recorded and forecast series into chart channels.
///
/// When both series are non-empty the forecast channel starts with a copy of
/// the last recorded point, so the forecast line is drawn from where the
/// history ends instead of opening a gap or dropping to zero. Either input
/// may be empty; the corresponding channel is then empty too.
pub fn stitch(historical: &[HistoricalPoint], forecast: &[ForecastPoint]) -> StitchedSeries {
    let mut labels: Vec<NaiveDate> = historical.iter().map(|p| p.date).collect();
    labels.extend(forecast.iter().map(|p| p.date));

    let historical_channel = historical
        .iter()
        .map(|p| ChartPoint { date: p.date, eai: p.eai })
        .collect();

    let mut forecast_channel = Vec::with_capacity(forecast.len() + 1);
    if !forecast.is_empty() {
        if let Some(bridge) = historical.last() {
            forecast_channel.push(ChartPoint { date: bridge.date, eai: bridge.eai });
        }
        forecast_channel.extend(forecast.iter().map(|p| ChartPoint { date: p.date, eai: p.eai }));
    }

    StitchedSeries {
        labels,
        historical: historical_channel,
        forecast: forecast_channel,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::Status;

    fn day(n: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, n).unwrap()
    }

    fn hist(points: &[(u32, f64)]) -> Vec<HistoricalPoint> {
        points
            .iter()
            .map(|&(d, eai)| HistoricalPoint { date: day(d), eai: Some(eai) })
            .collect()
    }

    fn fc(points: &[(u32, f64)]) -> Vec<ForecastPoint> {
        points
            .iter()
            .map(|&(d, eai)| ForecastPoint {
                date: day(d),
                eai: Some(eai),
                status: Status::Warning,
                status_label: Status::Warning.label(),
            })
            .collect()
    }

    #[test]
    fn forecast_channel_starts_at_the_last_recorded_point() {
        let historical = hist(&[(1, 60.0), (2, 70.0)]);
        let forecast = fc(&[(3, 75.0), (4, 80.0)]);

        let stitched = stitch(&historical, &forecast);

        assert_eq!(stitched.forecast.len(), forecast.len() + 1);
        assert_eq!(stitched.forecast[0], ChartPoint { date: day(2), eai: Some(70.0) });
        assert_eq!(stitched.forecast[1], ChartPoint { date: day(3), eai: Some(75.0) });
        assert_eq!(stitched.forecast[2], ChartPoint { date: day(4), eai: Some(80.0) });
    }

    #[test]
    fn labels_are_the_date_union_in_order() {
        let stitched = stitch(&hist(&[(1, 60.0), (2, 70.0)]), &fc(&[(3, 75.0)]));
        assert_eq!(stitched.labels, vec![day(1), day(2), day(3)]);
    }

    #[test]
    fn empty_inputs_yield_empty_channels() {
        let stitched = stitch(&[], &[]);
        assert!(stitched.labels.is_empty());
        assert!(stitched.historical.is_empty());
        assert!(stitched.forecast.is_empty());

        let history_only = stitch(&hist(&[(1, 60.0)]), &[]);
        assert_eq!(history_only.historical.len(), 1);
        assert!(history_only.forecast.is_empty());

        let forecast_only = stitch(&[], &fc(&[(3, 75.0)]));
        assert_eq!(forecast_only.forecast.len(), 1, "no bridge without history");
        assert!(forecast_only.historical.is_empty());
    }

    #[test]
    fn stitching_is_pure() {
        let historical = hist(&[(1, 60.0), (2, 70.0)]);
        let forecast = fc(&[(3, 75.0), (4, 80.0)]);
        assert_eq!(stitch(&historical, &forecast), stitch(&historical, &forecast));
    }

    #[test]
    fn bridge_carries_an_absent_score_through() {
        let historical = vec![HistoricalPoint { date: day(2), eai: None }];
        let stitched = stitch(&historical, &fc(&[(3, 75.0)]));
        assert_eq!(stitched.forecast[0], ChartPoint { date: day(2), eai: None });
    }
}
