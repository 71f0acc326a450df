// CSV file repository implementation
use crate::application::vitals_repository::VitalsRepository;
use crate::domain::error::VitalsError;
use crate::domain::reading::{Dataset, Reading};
use async_trait::async_trait;
use std::path::PathBuf;
use std::time::SystemTime;

const REQUIRED_COLUMNS: [&str; 3] = ["Time", "Heart_Rate", "Body_Temp"];

#[derive(Debug, Clone)]
pub struct CsvRepository {
    base_dir: Option<PathBuf>,
}

impl CsvRepository {
    /// Relative sources resolve against `base_dir`, or the working directory if unset
    pub fn new(base_dir: Option<PathBuf>) -> Self {
        Self { base_dir }
    }

    fn resolve(&self, source: &str) -> PathBuf {
        match &self.base_dir {
            Some(dir) => dir.join(source),
            None => PathBuf::from(source),
        }
    }
}

/// Parse CSV bytes into a dataset; `source` only labels errors
pub fn parse_readings(source: &str, bytes: &[u8]) -> Result<Dataset, VitalsError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(bytes);

    let headers = reader
        .headers()
        .map_err(|e| VitalsError::data_unavailable(source, e))?;
    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|column| !headers.iter().any(|h| h == *column))
        .collect();
    if !missing.is_empty() {
        return Err(VitalsError::data_unavailable(
            source,
            format!("missing required column(s): {}", missing.join(", ")),
        ));
    }

    let mut readings = Vec::new();
    for (index, row) in reader.deserialize::<Reading>().enumerate() {
        // Header is line 1
        let reading = row.map_err(|e| {
            VitalsError::data_unavailable(source, format!("row {}: {}", index + 2, e))
        })?;
        // NaN compares false against every threshold and would read as NORMAL
        if !reading.heart_rate.is_finite() || !reading.body_temp.is_finite() {
            return Err(VitalsError::data_unavailable(
                source,
                format!("row {}: vital signs must be finite numbers", index + 2),
            ));
        }
        readings.push(reading);
    }

    Ok(Dataset::new(readings))
}

#[async_trait]
impl VitalsRepository for CsvRepository {
    async fn load_dataset(&self, source: &str) -> Result<Dataset, VitalsError> {
        let path = self.resolve(source);
        tracing::debug!("Reading vitals from {}", path.display());

        let bytes = tokio::fs::read(&path)
            .await
            .map_err(|e| VitalsError::data_unavailable(source, e))?;

        parse_readings(source, &bytes)
    }

    async fn last_modified(&self, source: &str) -> Option<SystemTime> {
        tokio::fs::metadata(self.resolve(source))
            .await
            .and_then(|m| m.modified())
            .ok()
    }
}
