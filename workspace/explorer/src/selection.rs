use serde::{Deserialize, Serialize};

/// A sample-type/water-layer combination offered by the forecast service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeIndicator {
    pub id: String,
    pub label: String,
}

/// Sample-type term of a historical query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleType {
    WaterQuality,
    Sediment,
}

impl SampleType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SampleType::WaterQuality => "WATER_QUALITY",
            SampleType::Sediment => "SEDIMENT",
        }
    }
}

/// Water-layer term of a historical query. Sediment samples carry none.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaterLayer {
    Surface,
    Middle,
    Bottom,
}

impl WaterLayer {
    pub fn as_str(&self) -> &'static str {
        match self {
            WaterLayer::Surface => "SURFACE",
            WaterLayer::Middle => "MIDDLE",
            WaterLayer::Bottom => "BOTTOM",
        }
    }
}

/// Breaks a type-indicator id into the query terms the sample store
/// understands. Returns `None` for ids the service never lists.
pub fn decompose(type_id: &str) -> Option<(SampleType, Option<WaterLayer>)> {
    match type_id {
        "SEDIMENT" => Some((SampleType::Sediment, None)),
        "WATER_QUALITY_SURFACE" => Some((SampleType::WaterQuality, Some(WaterLayer::Surface))),
        "WATER_QUALITY_MIDDLE" => Some((SampleType::WaterQuality, Some(WaterLayer::Middle))),
        "WATER_QUALITY_BOTTOM" => Some((SampleType::WaterQuality, Some(WaterLayer::Bottom))),
        _ => None,
    }
}

/// The dependent selection triple.
///
/// Invariant: `area` is meaningful only once `type_id` is set, `station`
/// only once `area` is set. Setting any field clears every field to its
/// right; the mutators below are the only way fields change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    type_id: Option<String>,
    area: Option<String>,
    station: Option<String>,
}

impl Selection {
    pub fn type_id(&self) -> Option<&str> {
        self.type_id.as_deref()
    }

    pub fn area(&self) -> Option<&str> {
        self.area.as_deref()
    }

    pub fn station(&self) -> Option<&str> {
        self.station.as_deref()
    }

    /// Replaces the type indicator and clears area and station.
    pub fn set_type(&mut self, type_id: Option<String>) {
        self.type_id = type_id;
        self.area = None;
        self.station = None;
    }

    /// Replaces the area and clears the station. Ignored (returns `false`)
    /// while no type is selected.
    pub fn set_area(&mut self, area: Option<String>) -> bool {
        if self.type_id.is_none() {
            return false;
        }
        self.area = area;
        self.station = None;
        true
    }

    /// Replaces the station. Ignored (returns `false`) while no area is
    /// selected.
    pub fn set_station(&mut self, station: Option<String>) -> bool {
        if self.area.is_none() {
            return false;
        }
        self.station = station;
        true
    }

    /// True once all three levels are chosen.
    pub fn is_complete(&self) -> bool {
        self.type_id.is_some() && self.area.is_some() && self.station.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_type_clears_downstream() {
        let mut sel = Selection::default();
        sel.set_type(Some("SEDIMENT".into()));
        assert!(sel.set_area(Some("North".into())));
        assert!(sel.set_station(Some("S1".into())));

        sel.set_type(Some("WATER_QUALITY_SURFACE".into()));
        assert_eq!(sel.type_id(), Some("WATER_QUALITY_SURFACE"));
        assert_eq!(sel.area(), None);
        assert_eq!(sel.station(), None);
    }

    #[test]
    fn set_area_clears_station_and_requires_type() {
        let mut sel = Selection::default();
        assert!(!sel.set_area(Some("North".into())));
        assert_eq!(sel.area(), None);

        sel.set_type(Some("SEDIMENT".into()));
        assert!(sel.set_area(Some("North".into())));
        assert!(sel.set_station(Some("S1".into())));
        assert!(sel.set_area(Some("South".into())));
        assert_eq!(sel.station(), None);
    }

    #[test]
    fn set_station_requires_area() {
        let mut sel = Selection::default();
        sel.set_type(Some("SEDIMENT".into()));
        assert!(!sel.set_station(Some("S1".into())));
        assert!(!sel.is_complete());
    }

    #[test]
    fn clearing_type_empties_the_whole_selection() {
        let mut sel = Selection::default();
        sel.set_type(Some("SEDIMENT".into()));
        sel.set_area(Some("North".into()));
        sel.set_type(None);
        assert!(!sel.set_area(Some("North".into())));
        assert_eq!(sel, Selection::default());
    }

    #[test]
    fn decompose_known_ids() {
        assert_eq!(decompose("SEDIMENT"), Some((SampleType::Sediment, None)));
        assert_eq!(
            decompose("WATER_QUALITY_SURFACE"),
            Some((SampleType::WaterQuality, Some(WaterLayer::Surface)))
        );
        assert_eq!(
            decompose("WATER_QUALITY_BOTTOM"),
            Some((SampleType::WaterQuality, Some(WaterLayer::Bottom)))
        );
        assert_eq!(decompose("WATER_QUALITY"), None);
    }
}
