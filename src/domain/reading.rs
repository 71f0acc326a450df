// Vital-sign reading and dataset domain models
use crate::domain::error::VitalsError;
use serde::{Deserialize, Serialize};

/// One timestamped vital-sign sample, in the column layout of the source file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    #[serde(rename = "Time")]
    pub time: String,
    #[serde(rename = "Heart_Rate")]
    pub heart_rate: f64,
    #[serde(rename = "Body_Temp")]
    pub body_temp: f64,
    #[serde(rename = "Unit", default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl Reading {
    #[cfg(test)]
    pub fn new(time: impl Into<String>, heart_rate: f64, body_temp: f64) -> Self {
        Self {
            time: time.into(),
            heart_rate,
            body_temp,
            unit: None,
        }
    }

    #[cfg(test)]
    pub fn for_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }
}

/// Ordered history of readings; sequence order is chronological order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    readings: Vec<Reading>,
}

impl Dataset {
    pub fn new(readings: Vec<Reading>) -> Self {
        Self { readings }
    }

    pub fn readings(&self) -> &[Reading] {
        &self.readings
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    /// Most recent reading by sequence order
    pub fn latest(&self) -> Result<&Reading, VitalsError> {
        self.readings.last().ok_or(VitalsError::EmptyDataset)
    }

    /// The reading just before the latest one, if there is one
    pub fn previous(&self) -> Option<&Reading> {
        self.readings.len().checked_sub(2).map(|i| &self.readings[i])
    }

    /// Change of both vitals between the last two readings
    pub fn trend(&self) -> Option<Trend> {
        let latest = self.readings.last()?;
        let previous = self.previous()?;
        Some(Trend {
            heart_rate: latest.heart_rate - previous.heart_rate,
            body_temp: latest.body_temp - previous.body_temp,
        })
    }

    /// Rows that apply to `unit_id`. Untagged rows apply to every unit.
    pub fn for_unit(&self, unit_id: &str) -> Dataset {
        if self.readings.iter().all(|r| r.unit.is_none()) {
            return self.clone();
        }

        let readings = self
            .readings
            .iter()
            .filter(|r| r.unit.as_deref().is_none_or(|u| u == unit_id))
            .cloned()
            .collect();
        Dataset::new(readings)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trend {
    pub heart_rate: f64,
    pub body_temp: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dataset {
        Dataset::new(vec![
            Reading::new("08:00", 72.0, 36.5),
            Reading::new("08:05", 45.0, 34.2),
        ])
    }

    #[test]
    fn test_latest_is_last_row() {
        let dataset = sample();
        assert_eq!(dataset.latest().unwrap().time, "08:05");

        let single = Dataset::new(vec![Reading::new("09:00", 80.0, 37.0)]);
        assert_eq!(single.latest().unwrap().time, "09:00");
    }

    #[test]
    fn test_latest_on_empty_dataset() {
        let dataset = Dataset::default();
        assert_eq!(dataset.latest(), Err(VitalsError::EmptyDataset));
    }

    #[test]
    fn test_trend_from_last_two_readings() {
        let trend = sample().trend().unwrap();
        assert_eq!(trend.heart_rate, -27.0);
        assert!((trend.body_temp - (-2.3)).abs() < 1e-9);

        let single = Dataset::new(vec![Reading::new("09:00", 80.0, 37.0)]);
        assert!(single.trend().is_none());
    }

    #[test]
    fn test_untagged_rows_apply_to_every_unit() {
        let dataset = sample();
        assert_eq!(dataset.for_unit("Soldier-002"), dataset);
    }

    #[test]
    fn test_tagged_rows_are_filtered_by_unit() {
        let dataset = Dataset::new(vec![
            Reading::new("08:00", 72.0, 36.5).for_unit("Soldier-001"),
            Reading::new("08:00", 64.0, 36.9).for_unit("Soldier-002"),
            Reading::new("08:05", 70.0, 36.4),
        ]);

        let bravo = dataset.for_unit("Soldier-002");
        assert_eq!(bravo.len(), 2);
        assert_eq!(bravo.readings()[0].heart_rate, 64.0);
        assert_eq!(bravo.latest().unwrap().time, "08:05");
    }
}
