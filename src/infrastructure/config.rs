use crate::domain::unit::Unit;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone)]
pub struct MonitorConfig {
    pub server: ServerSettings,
    pub data: DataSettings,
    #[serde(default = "Unit::default_roster")]
    pub units: Vec<Unit>,
    pub map: MapSettings,
    pub dispatch: DispatchSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub bind: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DataSettings {
    pub source: String,
    /// Directory relative sources resolve against; working directory if unset
    #[serde(default)]
    pub base_dir: Option<PathBuf>,
    /// Per-unit overrides of `source`, keyed by unit id
    #[serde(default)]
    pub unit_sources: HashMap<String, String>,
}

impl DataSettings {
    pub fn source_for(&self, unit_id: &str) -> &str {
        self.unit_sources
            .get(unit_id)
            .map(String::as_str)
            .unwrap_or(&self.source)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct MapSettings {
    pub latitude: f64,
    pub longitude: f64,
    pub zoom: u8,
    pub caption: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DispatchSettings {
    pub delay_ms: u64,
    pub timeout_ms: u64,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            server: ServerSettings {
                bind: "0.0.0.0:8080".to_string(),
            },
            data: DataSettings {
                source: "soldier_data.csv".to_string(),
                base_dir: None,
                unit_sources: HashMap::new(),
            },
            units: Unit::default_roster(),
            map: MapSettings {
                latitude: 35.4213,
                longitude: 77.1095,
                zoom: 10,
                caption: "Last known GPS position: Siachen sector (simulated)".to_string(),
            },
            dispatch: DispatchSettings {
                delay_ms: 2000,
                timeout_ms: 10000,
            },
        }
    }
}

/// Built-in defaults, overlaid by `config/monitor.*` and then `VITALS__*` env vars
pub fn load_monitor_config() -> anyhow::Result<MonitorConfig> {
    let defaults = MonitorConfig::default();

    let settings = config::Config::builder()
        .set_default("server.bind", defaults.server.bind)?
        .set_default("data.source", defaults.data.source)?
        .set_default("map.latitude", defaults.map.latitude)?
        .set_default("map.longitude", defaults.map.longitude)?
        .set_default("map.zoom", defaults.map.zoom as i64)?
        .set_default("map.caption", defaults.map.caption)?
        .set_default("dispatch.delay_ms", defaults.dispatch.delay_ms as i64)?
        .set_default("dispatch.timeout_ms", defaults.dispatch.timeout_ms as i64)?
        .add_source(config::File::with_name("config/monitor").required(false))
        .add_source(config::Environment::with_prefix("VITALS").separator("__"))
        .build()?;

    let config: MonitorConfig = settings.try_deserialize()?;
    if config.units.is_empty() {
        anyhow::bail!("configuration must list at least one unit");
    }
    Ok(config)
}
