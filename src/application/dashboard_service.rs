// Dashboard service - Use case for rendering the vitals monitor view
use crate::application::dataset_cache::DatasetCache;
use crate::application::unit_service::UnitService;
use crate::domain::dashboard::{
    AlertPanel, Dashboard, DashboardState, DispatchControl, HistoryRegion, Metrics, ModeOption,
    Sidebar, UnitOption,
};
use crate::domain::error::VitalsError;
use crate::domain::reading::{Dataset, Reading};
use crate::domain::status::{AlertStatus, evaluate_status};
use crate::domain::telemetry::{
    ChartData, MapData, MapPoint, SeriesData, SeriesPoint, TableData, TileData,
};
use crate::domain::unit::Unit;
use crate::domain::view::{SelectionState, ViewMode};
use crate::infrastructure::config::{DataSettings, MapSettings};
use serde_json::json;

const HEART_RATE_COLOR: &str = "#FF0000";
const BODY_TEMP_COLOR: &str = "#0000FF";
const APP_NAME: &str = "Siachen-Guard";
const TABLE_COLUMNS: [&str; 3] = ["Time", "Heart_Rate", "Body_Temp"];

#[derive(Clone)]
pub struct DashboardService {
    cache: DatasetCache,
    units: UnitService,
    data: DataSettings,
    map: MapSettings,
}

impl DashboardService {
    pub fn new(cache: DatasetCache, units: UnitService, data: DataSettings, map: MapSettings) -> Self {
        Self {
            cache,
            units,
            data,
            map,
        }
    }

    /// Render one cycle of the view. Any failure becomes the error state and
    /// nothing else is rendered.
    pub async fn render(&self, selection: &SelectionState) -> DashboardState {
        let (unit, mode) = (&selection.unit, selection.view_mode);
        let title = format!("{}: {}", APP_NAME, unit.label());

        match self.build_dashboard(unit, mode, title.clone()).await {
            Ok(dashboard) => DashboardState::Loaded(Box::new(dashboard)),
            Err(e) => {
                tracing::warn!("Dashboard for {} failed to render: {}", unit.id, e);
                DashboardState::Error {
                    title,
                    message: format!("Error loading data: {}", e),
                }
            }
        }
    }

    /// Readings that apply to `unit`, from the cached source
    pub async fn load_dataset(&self, unit: &Unit) -> Result<Dataset, VitalsError> {
        let dataset = self.cache.get(self.data.source_for(&unit.id)).await?;
        Ok(dataset.for_unit(&unit.id))
    }

    /// Latest reading for `unit` and the status it evaluates to
    pub async fn current_status(&self, unit: &Unit) -> Result<(Reading, AlertStatus), VitalsError> {
        let dataset = self.load_dataset(unit).await?;
        let latest = dataset.latest()?.clone();
        let status = evaluate_status(&latest);
        Ok((latest, status))
    }

    pub async fn reload(&self) -> usize {
        self.cache.invalidate_all().await
    }

    async fn build_dashboard(
        &self,
        unit: &Unit,
        mode: ViewMode,
        title: String,
    ) -> Result<Dashboard, VitalsError> {
        let dataset = self.load_dataset(unit).await?;
        let latest = dataset.latest()?;
        let status = evaluate_status(latest);

        let alert_panel = match mode {
            ViewMode::LiveVitals => alert_panel(status, unit),
            ViewMode::MapView | ViewMode::HistoricalData => None,
        };

        Ok(Dashboard {
            title,
            unit_id: unit.id.clone(),
            view_mode: mode,
            sidebar: self.sidebar(unit),
            metrics: metrics(&dataset, latest, status),
            alert_panel,
            history: self.history(&dataset, mode),
        })
    }

    fn sidebar(&self, unit: &Unit) -> Sidebar {
        Sidebar {
            title: "Command Center".to_string(),
            header: "Filter Options".to_string(),
            status: "ONLINE".to_string(),
            monitoring: unit.label(),
            units: self
                .units
                .list_units()
                .iter()
                .map(|u| UnitOption {
                    id: u.id.clone(),
                    label: u.label(),
                })
                .collect(),
            modes: ViewMode::ALL
                .into_iter()
                .map(|mode| ModeOption {
                    mode,
                    slug: mode.slug(),
                    label: mode.label(),
                })
                .collect(),
        }
    }

    fn history(&self, dataset: &Dataset, mode: ViewMode) -> HistoryRegion {
        match mode {
            ViewMode::LiveVitals => HistoryRegion::Charts {
                title: "Vital Signs History".to_string(),
                charts: vital_charts(dataset),
            },
            ViewMode::MapView => HistoryRegion::Map(self.fixed_map()),
            ViewMode::HistoricalData => HistoryRegion::Table(raw_table(dataset)),
        }
    }

    /// Position is static; it does not come from telemetry
    fn fixed_map(&self) -> MapData {
        let center = MapPoint {
            latitude: self.map.latitude,
            longitude: self.map.longitude,
        };
        MapData {
            points: vec![center.clone()],
            center,
            zoom: self.map.zoom,
            caption: self.map.caption.clone(),
        }
    }
}

fn metrics(dataset: &Dataset, latest: &Reading, status: AlertStatus) -> Metrics {
    let trend = dataset.trend();

    Metrics {
        heart_rate: TileData::new(
            "heart_rate",
            "Heart Rate",
            "bpm",
            latest.heart_rate,
            0,
            trend.map(|t| t.heart_rate),
        ),
        body_temp: TileData::new(
            "body_temp",
            "Body Temp",
            "°C",
            latest.body_temp,
            1,
            trend.map(|t| t.body_temp),
        ),
        status,
        last_update: latest.time.clone(),
    }
}

fn alert_panel(status: AlertStatus, unit: &Unit) -> Option<AlertPanel> {
    if !status.is_critical() {
        return None;
    }

    Some(AlertPanel {
        banner: "EMERGENCY PROTOCOL ADVISED".to_string(),
        dispatch: DispatchControl {
            label: "DISPATCH RESCUE TEAM (SOS)".to_string(),
            method: "POST".to_string(),
            href: format!("/units/{}/dispatch", unit.id),
        },
    })
}

fn vital_charts(dataset: &Dataset) -> Vec<ChartData> {
    let series = |id: &str, name: &str, color: &str, value: fn(&Reading) -> f64| {
        let points = dataset
            .readings()
            .iter()
            .map(|r| SeriesPoint::new(r.time.clone(), value(r)))
            .collect();
        SeriesData::new(id.to_string(), name.to_string(), Some(color.to_string()), points)
    };

    vec![
        ChartData::line(
            "heart_rate",
            "Heart Rate Graph",
            "bpm",
            series("heart_rate", "Heart_Rate", HEART_RATE_COLOR, |r| r.heart_rate),
        ),
        ChartData::line(
            "body_temp",
            "Temperature Graph",
            "°C",
            series("body_temp", "Body_Temp", BODY_TEMP_COLOR, |r| r.body_temp),
        ),
    ]
}

fn raw_table(dataset: &Dataset) -> TableData {
    TableData {
        columns: TABLE_COLUMNS.iter().map(|c| c.to_string()).collect(),
        rows: dataset
            .readings()
            .iter()
            .map(|r| vec![json!(r.time), json!(r.heart_rate), json!(r.body_temp)])
            .collect(),
    }
}
