use log::{debug, warn};

use crate::error::FetchError;
use crate::selection::{decompose, SampleType, Selection, TypeIndicator, WaterLayer};
use crate::series::{ForecastPoint, HistoricalPoint};
use crate::stitch::{stitch, StitchedSeries};

/// Lifecycle of the two user-triggered loads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed,
}

/// The lookup a [`Ticket`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Level {
    Types,
    Areas,
    Stations,
    Historical,
    Forecast,
}

/// Proof of dispatch for one remote call: the level it serves and the
/// generation of that level at the moment the call was issued.
///
/// Every mutation that invalidates a level bumps its generation, so a
/// resolve carrying a ticket minted before the mutation no longer matches
/// and is discarded. Superseded requests are never aborted, only ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    level: Level,
    generation: u64,
}

/// Query terms for a historical-series fetch, with the type indicator
/// already decomposed into what the sample store understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoricalQuery {
    pub area: String,
    pub station: String,
    pub sample_type: SampleType,
    pub water_layer: Option<WaterLayer>,
}

/// A remote call the render layer must dispatch on the explorer's behalf.
///
/// Each variant carries the ticket to hand back to the matching
/// `resolve_*` method once the call completes.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    ListTypes { ticket: Ticket },
    ListAreas { ticket: Ticket, type_id: String },
    ListStations { ticket: Ticket, type_id: String, area: String },
    LoadHistorical { ticket: Ticket, query: HistoricalQuery },
    LoadForecast { ticket: Ticket, type_id: String, area: String, station: String },
}

/// State machine behind the forecast explorer page.
///
/// Owns the dependent selection, the per-level option sets with their
/// loading/error flags, and the historical/forecast series with their load
/// states. All fields are private: mutation happens only through the
/// methods below, and every remote completion passes the staleness check
/// before it is allowed to touch state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Explorer {
    selection: Selection,

    types: Vec<TypeIndicator>,
    types_loading: bool,
    types_error: Option<FetchError>,
    types_generation: u64,

    areas: Vec<String>,
    areas_loading: bool,
    areas_error: Option<FetchError>,
    areas_generation: u64,

    stations: Vec<String>,
    stations_loading: bool,
    stations_error: Option<FetchError>,
    stations_generation: u64,

    historical: Vec<HistoricalPoint>,
    historical_state: LoadState,
    historical_error: Option<FetchError>,
    historical_generation: u64,

    forecast: Vec<ForecastPoint>,
    forecast_state: LoadState,
    forecast_error: Option<FetchError>,
    forecast_generation: u64,
}

impl Explorer {
    pub fn new() -> Self {
        Self::default()
    }

    fn ticket(&self, level: Level) -> Ticket {
        let generation = match level {
            Level::Types => self.types_generation,
            Level::Areas => self.areas_generation,
            Level::Stations => self.stations_generation,
            Level::Historical => self.historical_generation,
            Level::Forecast => self.forecast_generation,
        };
        Ticket { level, generation }
    }

    /// Checks a completion ticket against the current generation of its
    /// level. A mismatch means the request was superseded while in flight.
    fn accept(&self, ticket: Ticket, level: Level) -> bool {
        if ticket.level != level {
            warn!(
                "ticket for {:?} handed to the {:?} resolver, discarding",
                ticket.level, level
            );
            return false;
        }
        let current = self.ticket(level).generation;
        if ticket.generation != current {
            debug!(
                "discarding stale {:?} response (generation {}, current {})",
                level, ticket.generation, current
            );
            return false;
        }
        true
    }

    fn clear_areas(&mut self) {
        self.areas = Vec::new();
        self.areas_loading = false;
        self.areas_error = None;
        self.areas_generation += 1;
    }

    fn clear_stations(&mut self) {
        self.stations = Vec::new();
        self.stations_loading = false;
        self.stations_error = None;
        self.stations_generation += 1;
    }

    fn clear_forecast(&mut self) {
        self.forecast = Vec::new();
        self.forecast_state = LoadState::Idle;
        self.forecast_error = None;
        self.forecast_generation += 1;
    }

    fn clear_series(&mut self) {
        self.historical = Vec::new();
        self.historical_state = LoadState::Idle;
        self.historical_error = None;
        self.historical_generation += 1;
        self.clear_forecast();
    }

    /// Starts the type-indicator listing. Called once on page entry; calling
    /// again (retry) supersedes any still-pending listing.
    pub fn load_types(&mut self) -> Command {
        self.types_generation += 1;
        self.types_loading = true;
        self.types_error = None;
        Command::ListTypes { ticket: self.ticket(Level::Types) }
    }

    pub fn resolve_types(&mut self, ticket: Ticket, result: Result<Vec<TypeIndicator>, FetchError>) {
        if !self.accept(ticket, Level::Types) {
            return;
        }
        self.types_loading = false;
        match result {
            Ok(types) => self.types = types,
            Err(err) => {
                self.types = Vec::new();
                self.types_error = Some(err);
            }
        }
    }

    /// Selects a type indicator, or clears it with `None`. Everything
    /// downstream (area, station, both series) is invalidated either way;
    /// a concrete selection also starts the area listing.
    pub fn select_type(&mut self, type_id: Option<String>) -> Option<Command> {
        debug!("type indicator -> {:?}", type_id);
        self.selection.set_type(type_id);
        self.clear_areas();
        self.clear_stations();
        self.clear_series();

        let type_id = self.selection.type_id()?.to_string();
        self.areas_loading = true;
        Some(Command::ListAreas { ticket: self.ticket(Level::Areas), type_id })
    }

    pub fn resolve_areas(&mut self, ticket: Ticket, result: Result<Vec<String>, FetchError>) {
        if !self.accept(ticket, Level::Areas) {
            return;
        }
        self.areas_loading = false;
        match result {
            Ok(areas) => self.areas = areas,
            Err(err) => {
                self.areas = Vec::new();
                self.areas_error = Some(err);
            }
        }
    }

    /// Selects an area, or clears it with `None`. Ignored while no type is
    /// selected. Station and series state is invalidated either way; a
    /// concrete selection also starts the station listing.
    pub fn select_area(&mut self, area: Option<String>) -> Option<Command> {
        if !self.selection.set_area(area) {
            return None;
        }
        debug!("area -> {:?}", self.selection.area());
        self.clear_stations();
        self.clear_series();

        let type_id = self.selection.type_id()?.to_string();
        let area = self.selection.area()?.to_string();
        self.stations_loading = true;
        Some(Command::ListStations { ticket: self.ticket(Level::Stations), type_id, area })
    }

    pub fn resolve_stations(&mut self, ticket: Ticket, result: Result<Vec<String>, FetchError>) {
        if !self.accept(ticket, Level::Stations) {
            return;
        }
        self.stations_loading = false;
        match result {
            Ok(stations) => self.stations = stations,
            Err(err) => {
                self.stations = Vec::new();
                self.stations_error = Some(err);
            }
        }
    }

    /// Selects a station, or clears it with `None`. Ignored while no area is
    /// selected. A changed station invalidates any loaded series even though
    /// the upstream levels are unchanged.
    pub fn select_station(&mut self, station: Option<String>) {
        if self.selection.set_station(station) {
            debug!("station -> {:?}", self.selection.station());
            self.clear_series();
        }
    }

    /// True once every cascade level is chosen, the enable condition for
    /// [`Explorer::apply`].
    pub fn can_apply(&self) -> bool {
        self.selection.is_complete()
    }

    /// Requests the historical series for the resolved selection.
    ///
    /// Returns `None` and changes nothing while the selection is incomplete.
    /// Any loaded forecast is dropped first: it was built on the series
    /// being replaced. A repeat call while a load is pending supersedes the
    /// pending one.
    pub fn apply(&mut self) -> Option<Command> {
        if !self.selection.is_complete() {
            return None;
        }
        let type_id = self.selection.type_id()?.to_string();
        let area = self.selection.area()?.to_string();
        let station = self.selection.station()?.to_string();

        self.clear_forecast();
        self.historical = Vec::new();
        self.historical_error = None;
        self.historical_generation += 1;

        let (sample_type, water_layer) = match decompose(&type_id) {
            Some(terms) => terms,
            None => {
                self.historical_state = LoadState::Failed;
                self.historical_error =
                    Some(FetchError::Service(format!("unrecognized type indicator: {type_id}")));
                return None;
            }
        };

        self.historical_state = LoadState::Loading;
        Some(Command::LoadHistorical {
            ticket: self.ticket(Level::Historical),
            query: HistoricalQuery { area, station, sample_type, water_layer },
        })
    }

    pub fn resolve_historical(
        &mut self,
        ticket: Ticket,
        result: Result<Vec<HistoricalPoint>, FetchError>,
    ) {
        if !self.accept(ticket, Level::Historical) {
            return;
        }
        match result {
            Ok(mut points) => {
                // The service contract says ascending; enforce it anyway so
                // the stitcher's continuity never depends on remote behavior.
                points.sort_by_key(|p| p.date);
                self.historical = points;
                self.historical_state = LoadState::Ready;
            }
            Err(err) => {
                self.historical = Vec::new();
                self.historical_state = LoadState::Failed;
                self.historical_error = Some(err);
            }
        }
    }

    /// True once the historical load has succeeded, the gate for
    /// [`Explorer::predict`]. Filled selects alone are not enough.
    pub fn can_predict(&self) -> bool {
        self.historical_state == LoadState::Ready
    }

    /// Requests the forecast continuation. A no-op unless the historical
    /// series is loaded.
    pub fn predict(&mut self) -> Option<Command> {
        if !self.can_predict() {
            return None;
        }
        let type_id = self.selection.type_id()?.to_string();
        let area = self.selection.area()?.to_string();
        let station = self.selection.station()?.to_string();

        self.forecast = Vec::new();
        self.forecast_error = None;
        self.forecast_generation += 1;
        self.forecast_state = LoadState::Loading;
        Some(Command::LoadForecast { ticket: self.ticket(Level::Forecast), type_id, area, station })
    }

    pub fn resolve_forecast(
        &mut self,
        ticket: Ticket,
        result: Result<Vec<ForecastPoint>, FetchError>,
    ) {
        if !self.accept(ticket, Level::Forecast) {
            return;
        }
        match result {
            Ok(mut points) => {
                points.sort_by_key(|p| p.date);
                self.forecast = points;
                self.forecast_state = LoadState::Ready;
            }
            Err(err) => {
                // Historical data stays; only the forecast side resets.
                self.forecast = Vec::new();
                self.forecast_state = LoadState::Failed;
                self.forecast_error = Some(err);
            }
        }
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn type_options(&self) -> &[TypeIndicator] {
        &self.types
    }

    pub fn types_loading(&self) -> bool {
        self.types_loading
    }

    pub fn types_error(&self) -> Option<&FetchError> {
        self.types_error.as_ref()
    }

    pub fn area_options(&self) -> &[String] {
        &self.areas
    }

    pub fn areas_loading(&self) -> bool {
        self.areas_loading
    }

    pub fn areas_error(&self) -> Option<&FetchError> {
        self.areas_error.as_ref()
    }

    pub fn station_options(&self) -> &[String] {
        &self.stations
    }

    pub fn stations_loading(&self) -> bool {
        self.stations_loading
    }

    pub fn stations_error(&self) -> Option<&FetchError> {
        self.stations_error.as_ref()
    }

    pub fn historical(&self) -> &[HistoricalPoint] {
        &self.historical
    }

    pub fn historical_state(&self) -> LoadState {
        self.historical_state
    }

    pub fn historical_error(&self) -> Option<&FetchError> {
        self.historical_error.as_ref()
    }

    pub fn forecast(&self) -> &[ForecastPoint] {
        &self.forecast
    }

    pub fn forecast_state(&self) -> LoadState {
        self.forecast_state
    }

    pub fn forecast_error(&self) -> Option<&FetchError> {
        self.forecast_error.as_ref()
    }

    /// The chart view of the current series pair. Recomputed on every call;
    /// holds no state of its own.
    pub fn stitched(&self) -> StitchedSeries {
        stitch(&self.historical, &self.forecast)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::{classify, Status};
    use chrono::NaiveDate;

    fn day(n: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, n).unwrap()
    }

    fn month(n: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, n, 28).unwrap()
    }

    fn types() -> Vec<TypeIndicator> {
        vec![
            TypeIndicator { id: "SEDIMENT".into(), label: "Sediment".into() },
            TypeIndicator {
                id: "WATER_QUALITY_SURFACE".into(),
                label: "Water Quality (Surface)".into(),
            },
        ]
    }

    fn historical_points() -> Vec<HistoricalPoint> {
        vec![
            HistoricalPoint { date: day(1), eai: Some(60.0) },
            HistoricalPoint { date: day(2), eai: Some(70.0) },
        ]
    }

    fn forecast_points(n: u32) -> Vec<ForecastPoint> {
        (1..=n)
            .map(|i| {
                let eai = Some(44.0 + 3.0 * f64::from(i));
                ForecastPoint {
                    date: month(i.min(12)),
                    eai,
                    status: classify(eai),
                    status_label: classify(eai).label(),
                }
            })
            .collect()
    }

    /// Walks the cascade to a complete selection with resolved option sets.
    fn resolved_explorer() -> Explorer {
        let mut ex = Explorer::new();
        let ticket = match ex.load_types() {
            Command::ListTypes { ticket } => ticket,
            other => panic!("unexpected command {other:?}"),
        };
        ex.resolve_types(ticket, Ok(types()));

        let cmd = ex.select_type(Some("WATER_QUALITY_SURFACE".into())).unwrap();
        let Command::ListAreas { ticket, .. } = cmd else { panic!("expected area listing") };
        ex.resolve_areas(ticket, Ok(vec!["North".into(), "South".into()]));

        let cmd = ex.select_area(Some("North".into())).unwrap();
        let Command::ListStations { ticket, .. } = cmd else { panic!("expected station listing") };
        ex.resolve_stations(ticket, Ok(vec!["S1".into(), "S2".into()]));

        ex.select_station(Some("S1".into()));
        ex
    }

    /// Runs apply and predict to completion with the given payloads.
    fn loaded_explorer() -> Explorer {
        let mut ex = resolved_explorer();
        let Some(Command::LoadHistorical { ticket, .. }) = ex.apply() else {
            panic!("apply should dispatch")
        };
        ex.resolve_historical(ticket, Ok(historical_points()));
        let Some(Command::LoadForecast { ticket, .. }) = ex.predict() else {
            panic!("predict should dispatch")
        };
        ex.resolve_forecast(ticket, Ok(forecast_points(12)));
        ex
    }

    #[test]
    fn select_type_issues_area_lookup_and_marks_loading() {
        let mut ex = Explorer::new();
        let cmd = ex.select_type(Some("SEDIMENT".into()));
        match cmd {
            Some(Command::ListAreas { type_id, .. }) => assert_eq!(type_id, "SEDIMENT"),
            other => panic!("unexpected command {other:?}"),
        }
        assert!(ex.areas_loading());
        assert!(ex.area_options().is_empty());
    }

    #[test]
    fn clearing_the_type_issues_nothing() {
        let mut ex = resolved_explorer();
        assert_eq!(ex.select_type(None), None);
        assert!(!ex.areas_loading());
        assert!(ex.area_options().is_empty());
        assert!(ex.station_options().is_empty());
    }

    #[test]
    fn changing_type_clears_every_downstream_level() {
        let mut ex = loaded_explorer();
        ex.select_type(Some("SEDIMENT".into()));

        assert_eq!(ex.selection().area(), None);
        assert_eq!(ex.selection().station(), None);
        assert!(ex.station_options().is_empty());
        assert_eq!(ex.historical_state(), LoadState::Idle);
        assert!(ex.historical().is_empty());
        assert_eq!(ex.forecast_state(), LoadState::Idle);
        assert!(ex.forecast().is_empty());
    }

    #[test]
    fn changing_station_alone_invalidates_loaded_series() {
        let mut ex = loaded_explorer();
        ex.select_station(Some("S2".into()));

        assert_eq!(ex.selection().type_id(), Some("WATER_QUALITY_SURFACE"));
        assert_eq!(ex.selection().area(), Some("North"));
        assert_eq!(ex.historical_state(), LoadState::Idle);
        assert!(ex.historical().is_empty());
        assert_eq!(ex.forecast_state(), LoadState::Idle);
        assert!(ex.forecast().is_empty());
    }

    #[test]
    fn reselecting_area_after_predict_clears_both_series() {
        let mut ex = loaded_explorer();
        ex.select_area(Some("South".into()));

        assert_eq!(ex.selection().station(), None);
        assert_eq!(ex.historical_state(), LoadState::Idle);
        assert_eq!(ex.forecast_state(), LoadState::Idle);
        assert!(ex.historical().is_empty());
        assert!(ex.forecast().is_empty());
    }

    #[test]
    fn select_area_without_type_is_a_noop() {
        let mut ex = Explorer::new();
        assert_eq!(ex.select_area(Some("North".into())), None);
        assert!(!ex.stations_loading());
    }

    #[test]
    fn stale_area_response_is_discarded() {
        let mut ex = Explorer::new();
        let Some(Command::ListAreas { ticket: ticket_a, .. }) =
            ex.select_type(Some("SEDIMENT".into()))
        else {
            panic!("expected area listing")
        };
        let Some(Command::ListAreas { ticket: ticket_b, .. }) =
            ex.select_type(Some("WATER_QUALITY_SURFACE".into()))
        else {
            panic!("expected area listing")
        };

        // B's answer lands first, then A's late answer must be ignored.
        ex.resolve_areas(ticket_b, Ok(vec!["B-area".into()]));
        ex.resolve_areas(ticket_a, Ok(vec!["A-area".into()]));

        assert_eq!(ex.area_options(), ["B-area".to_string()]);
        assert!(!ex.areas_loading());
    }

    #[test]
    fn orphaned_station_lookup_cannot_repopulate_a_cleared_level() {
        let mut ex = resolved_explorer();
        let Some(Command::ListStations { ticket, .. }) = ex.select_area(Some("South".into()))
        else {
            panic!("expected station listing")
        };
        // Upstream change while the station lookup is in flight.
        ex.select_type(Some("SEDIMENT".into()));
        ex.resolve_stations(ticket, Ok(vec!["ghost".into()]));
        assert!(ex.station_options().is_empty());
    }

    #[test]
    fn lookup_failure_surfaces_error_and_empties_options() {
        let mut ex = Explorer::new();
        let Some(Command::ListAreas { ticket, .. }) = ex.select_type(Some("SEDIMENT".into()))
        else {
            panic!("expected area listing")
        };
        ex.resolve_areas(ticket, Err(FetchError::Transport("connection refused".into())));

        assert!(ex.area_options().is_empty());
        assert!(!ex.areas_loading());
        assert_eq!(ex.areas_error().unwrap().message(), "connection refused");

        // Retry by re-triggering the parent selection clears the error.
        assert!(ex.select_type(Some("SEDIMENT".into())).is_some());
        assert_eq!(ex.areas_error(), None);
        assert!(ex.areas_loading());
    }

    #[test]
    fn apply_requires_a_complete_selection() {
        let mut ex = Explorer::new();
        ex.select_type(Some("SEDIMENT".into()));
        assert!(!ex.can_apply());
        assert_eq!(ex.apply(), None);
        assert_eq!(ex.historical_state(), LoadState::Idle);
    }

    #[test]
    fn apply_decomposes_the_type_indicator() {
        let mut ex = resolved_explorer();
        let Some(Command::LoadHistorical { query, .. }) = ex.apply() else {
            panic!("apply should dispatch")
        };
        assert_eq!(query.area, "North");
        assert_eq!(query.station, "S1");
        assert_eq!(query.sample_type, SampleType::WaterQuality);
        assert_eq!(query.water_layer, Some(WaterLayer::Surface));
        assert_eq!(ex.historical_state(), LoadState::Loading);
    }

    #[test]
    fn sediment_query_has_no_layer_term() {
        let mut ex = Explorer::new();
        let Some(Command::ListAreas { ticket, .. }) = ex.select_type(Some("SEDIMENT".into()))
        else {
            panic!("expected area listing")
        };
        ex.resolve_areas(ticket, Ok(vec!["North".into()]));
        let Some(Command::ListStations { ticket, .. }) = ex.select_area(Some("North".into()))
        else {
            panic!("expected station listing")
        };
        ex.resolve_stations(ticket, Ok(vec!["S1".into()]));
        ex.select_station(Some("S1".into()));

        let Some(Command::LoadHistorical { query, .. }) = ex.apply() else {
            panic!("apply should dispatch")
        };
        assert_eq!(query.sample_type, SampleType::Sediment);
        assert_eq!(query.water_layer, None);
    }

    #[test]
    fn predict_before_ready_is_a_noop() {
        let mut ex = resolved_explorer();
        assert!(!ex.can_predict());
        assert_eq!(ex.predict(), None);
        assert_eq!(ex.forecast_state(), LoadState::Idle);

        // Still gated while the historical load is merely pending.
        ex.apply();
        assert_eq!(ex.predict(), None);
        assert_eq!(ex.forecast_state(), LoadState::Idle);
    }

    #[test]
    fn apply_then_predict_end_to_end() {
        let ex = loaded_explorer();

        assert_eq!(ex.historical_state(), LoadState::Ready);
        assert_eq!(ex.historical().len(), 2);
        assert_eq!(ex.forecast_state(), LoadState::Ready);
        assert_eq!(ex.forecast().len(), 12);
        for point in ex.forecast() {
            assert_eq!(point.status, classify(point.eai));
        }

        let stitched = ex.stitched();
        assert_eq!(stitched.forecast.len(), 13);
        assert_eq!(stitched.forecast[0].eai, Some(70.0));
    }

    #[test]
    fn apply_clears_a_previous_forecast() {
        let mut ex = loaded_explorer();
        let Some(Command::LoadHistorical { ticket, .. }) = ex.apply() else {
            panic!("apply should dispatch")
        };

        assert_eq!(ex.forecast_state(), LoadState::Idle);
        assert!(ex.forecast().is_empty());
        assert_eq!(ex.historical_state(), LoadState::Loading);

        ex.resolve_historical(ticket, Ok(historical_points()));
        assert_eq!(ex.historical_state(), LoadState::Ready);
    }

    #[test]
    fn historical_failure_keeps_the_gate_closed() {
        let mut ex = resolved_explorer();
        let Some(Command::LoadHistorical { ticket, .. }) = ex.apply() else {
            panic!("apply should dispatch")
        };
        ex.resolve_historical(ticket, Err(FetchError::Transport("HTTP error: 502".into())));

        assert_eq!(ex.historical_state(), LoadState::Failed);
        assert!(ex.historical().is_empty());
        assert!(ex.historical_error().is_some());
        assert_eq!(ex.predict(), None);
    }

    #[test]
    fn forecast_failure_retains_historical_data() {
        let mut ex = resolved_explorer();
        let Some(Command::LoadHistorical { ticket, .. }) = ex.apply() else {
            panic!("apply should dispatch")
        };
        ex.resolve_historical(ticket, Ok(historical_points()));
        let Some(Command::LoadForecast { ticket, .. }) = ex.predict() else {
            panic!("predict should dispatch")
        };
        ex.resolve_forecast(
            ticket,
            Err(FetchError::Service("not enough history for this station".into())),
        );

        assert_eq!(ex.forecast_state(), LoadState::Failed);
        assert!(ex.forecast().is_empty());
        assert_eq!(
            ex.forecast_error().unwrap().message(),
            "not enough history for this station"
        );
        // The historical side is untouched and the gate stays open.
        assert_eq!(ex.historical_state(), LoadState::Ready);
        assert_eq!(ex.historical().len(), 2);
        assert!(ex.can_predict());
    }

    #[test]
    fn stale_historical_response_is_discarded_after_reapply() {
        let mut ex = resolved_explorer();
        let Some(Command::LoadHistorical { ticket: first, .. }) = ex.apply() else {
            panic!("apply should dispatch")
        };
        let Some(Command::LoadHistorical { ticket: second, .. }) = ex.apply() else {
            panic!("apply should dispatch")
        };

        ex.resolve_historical(second, Ok(historical_points()));
        ex.resolve_historical(first, Ok(vec![HistoricalPoint { date: day(9), eai: Some(1.0) }]));

        assert_eq!(ex.historical(), historical_points());
    }

    #[test]
    fn unknown_type_indicator_fails_apply_locally() {
        let mut ex = Explorer::new();
        let Some(Command::ListAreas { ticket, .. }) = ex.select_type(Some("AIR_QUALITY".into()))
        else {
            panic!("expected area listing")
        };
        ex.resolve_areas(ticket, Ok(vec!["North".into()]));
        let Some(Command::ListStations { ticket, .. }) = ex.select_area(Some("North".into()))
        else {
            panic!("expected station listing")
        };
        ex.resolve_stations(ticket, Ok(vec!["S1".into()]));
        ex.select_station(Some("S1".into()));

        assert_eq!(ex.apply(), None);
        assert_eq!(ex.historical_state(), LoadState::Failed);
        assert!(ex
            .historical_error()
            .unwrap()
            .message()
            .contains("AIR_QUALITY"));
    }

    #[test]
    fn historical_points_are_sorted_on_store() {
        let mut ex = resolved_explorer();
        let Some(Command::LoadHistorical { ticket, .. }) = ex.apply() else {
            panic!("apply should dispatch")
        };
        ex.resolve_historical(
            ticket,
            Ok(vec![
                HistoricalPoint { date: day(2), eai: Some(70.0) },
                HistoricalPoint { date: day(1), eai: Some(60.0) },
            ]),
        );
        assert_eq!(ex.historical(), historical_points());
    }

    #[test]
    fn forecast_statuses_match_the_classifier() {
        let points = forecast_points(12);
        assert!(points
            .iter()
            .any(|p| p.status == Status::Warning || p.status == Status::Good));
        for p in &points {
            assert_eq!(p.status, classify(p.eai));
        }
    }
}
