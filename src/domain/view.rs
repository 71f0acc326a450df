// View mode and per-request selection state
use crate::domain::error::VitalsError;
use crate::domain::unit::Unit;
use serde::Serialize;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ViewMode {
    #[default]
    LiveVitals,
    MapView,
    HistoricalData,
}

impl ViewMode {
    pub const ALL: [ViewMode; 3] = [ViewMode::LiveVitals, ViewMode::MapView, ViewMode::HistoricalData];

    pub fn label(self) -> &'static str {
        match self {
            ViewMode::LiveVitals => "Live Vitals",
            ViewMode::MapView => "Map View",
            ViewMode::HistoricalData => "Historical Data",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            ViewMode::LiveVitals => "live",
            ViewMode::MapView => "map",
            ViewMode::HistoricalData => "history",
        }
    }
}

impl FromStr for ViewMode {
    type Err = VitalsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "live" | "livevitals" | "live_vitals" => Ok(ViewMode::LiveVitals),
            "map" | "mapview" | "map_view" => Ok(ViewMode::MapView),
            "history" | "historicaldata" | "historical_data" => Ok(ViewMode::HistoricalData),
            _ => Err(VitalsError::InvalidViewMode(s.to_string())),
        }
    }
}

/// What the operator is looking at; lives only for one request
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionState {
    pub unit: Unit,
    pub view_mode: ViewMode,
}

impl SelectionState {
    pub fn new(unit: Unit, view_mode: ViewMode) -> Self {
        Self { unit, view_mode }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_view_mode() {
        assert_eq!("live".parse::<ViewMode>(), Ok(ViewMode::LiveVitals));
        assert_eq!("Map_View".parse::<ViewMode>(), Ok(ViewMode::MapView));
        assert_eq!("history".parse::<ViewMode>(), Ok(ViewMode::HistoricalData));
        assert_eq!(
            "radar".parse::<ViewMode>(),
            Err(VitalsError::InvalidViewMode("radar".to_string()))
        );
    }

    #[test]
    fn test_slug_round_trips() {
        for mode in ViewMode::ALL {
            assert_eq!(mode.slug().parse::<ViewMode>(), Ok(mode));
        }
    }
}
