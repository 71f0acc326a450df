// Display primitives handed to the presentation layer
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub label: String,
    pub value: f64,
}

impl SeriesPoint {
    pub fn new(label: String, value: f64) -> Self {
        Self { label, value }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TileData {
    pub id: String,
    pub title: String,
    pub unit: String,
    pub value: f64,
    pub precision: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delta: Option<f64>,
    /// Raw value with its unit, e.g. "72 bpm"
    pub display: String,
    /// Signed delta with its unit, e.g. "-2 bpm"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delta_display: Option<String>,
}

impl TileData {
    pub fn new(id: &str, title: &str, unit: &str, value: f64, precision: i32, delta: Option<f64>) -> Self {
        let digits = precision.max(0) as usize;
        Self {
            id: id.to_string(),
            title: title.to_string(),
            unit: unit.to_string(),
            value,
            precision,
            delta,
            // Unrounded, so a value just under a threshold never prints as the threshold
            display: format!("{} {}", value, unit),
            delta_display: delta.map(|d| format!("{:+.*} {}", digits, d, unit)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesData {
    pub id: String,
    pub name: String,
    pub color: Option<String>,
    pub points: Vec<SeriesPoint>,
}

impl SeriesData {
    pub fn new(id: String, name: String, color: Option<String>, points: Vec<SeriesPoint>) -> Self {
        Self {
            id,
            name,
            color,
            points,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ChartKind {
    Line,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub id: String,
    pub title: String,
    pub unit: Option<String>,
    pub kind: ChartKind,
    pub series: Vec<SeriesData>,
}

impl ChartData {
    pub fn line(id: &str, title: &str, unit: &str, series: SeriesData) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            unit: Some(unit.to_string()),
            kind: ChartKind::Line,
            series: vec![series],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapPoint {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapData {
    pub center: MapPoint,
    pub zoom: u8,
    pub points: Vec<MapPoint>,
    pub caption: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableData {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<serde_json::Value>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_display() {
        let tile = TileData::new("heart_rate", "Heart Rate", "bpm", 72.0, 0, Some(-2.0));
        assert_eq!(tile.display, "72 bpm");
        assert_eq!(tile.delta_display.as_deref(), Some("-2 bpm"));

        let tile = TileData::new("body_temp", "Body Temp", "°C", 36.5, 1, Some(0.1));
        assert_eq!(tile.display, "36.5 °C");
        assert_eq!(tile.delta_display.as_deref(), Some("+0.1 °C"));

        let tile = TileData::new("body_temp", "Body Temp", "°C", 36.5, 1, None);
        assert!(tile.delta_display.is_none());
    }

    #[test]
    fn test_display_is_not_rounded_onto_threshold() {
        let tile = TileData::new("heart_rate", "Heart Rate", "bpm", 49.6, 0, None);
        assert_eq!(tile.display, "49.6 bpm");

        let tile = TileData::new("body_temp", "Body Temp", "°C", 34.96, 1, None);
        assert_eq!(tile.display, "34.96 °C");
    }
}
