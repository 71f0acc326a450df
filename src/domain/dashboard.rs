// Dashboard domain model
use super::status::AlertStatus;
use super::telemetry::{ChartData, MapData, TableData, TileData};
use super::view::ViewMode;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metrics {
    pub heart_rate: TileData,
    pub body_temp: TileData,
    pub status: AlertStatus,
    pub last_update: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DispatchControl {
    pub label: String,
    pub method: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlertPanel {
    pub banner: String,
    pub dispatch: DispatchControl,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum HistoryRegion {
    Charts { title: String, charts: Vec<ChartData> },
    Map(MapData),
    Table(TableData),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModeOption {
    pub mode: ViewMode,
    pub slug: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnitOption {
    pub id: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sidebar {
    pub title: String,
    pub header: String,
    pub status: String,
    pub monitoring: String,
    pub units: Vec<UnitOption>,
    pub modes: Vec<ModeOption>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub title: String,
    pub unit_id: String,
    pub view_mode: ViewMode,
    pub sidebar: Sidebar,
    pub metrics: Metrics,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert_panel: Option<AlertPanel>,
    pub history: HistoryRegion,
}

/// Outcome of one render cycle; a failed load renders nothing but the message
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum DashboardState {
    Loaded(Box<Dashboard>),
    Error { title: String, message: String },
}

impl DashboardState {
    #[cfg(test)]
    pub fn dashboard(&self) -> Option<&Dashboard> {
        match self {
            DashboardState::Loaded(dashboard) => Some(dashboard),
            DashboardState::Error { .. } => None,
        }
    }
}
