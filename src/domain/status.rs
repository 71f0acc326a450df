// Alert status derived from the latest reading
use crate::domain::reading::Reading;
use serde::Serialize;

pub const MIN_BODY_TEMP_C: f64 = 35.0;
pub const MIN_HEART_RATE_BPM: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AlertStatus {
    Normal,
    Critical,
}

impl AlertStatus {
    pub fn is_critical(self) -> bool {
        self == AlertStatus::Critical
    }
}

/// Thresholds are strict: exactly 35.0 °C or 50 bpm is still NORMAL
pub fn evaluate_status(reading: &Reading) -> AlertStatus {
    if reading.body_temp < MIN_BODY_TEMP_C || reading.heart_rate < MIN_HEART_RATE_BPM {
        AlertStatus::Critical
    } else {
        AlertStatus::Normal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_readings() {
        for (hr, temp) in [(72.0, 36.5), (50.0, 35.0), (120.0, 39.0), (50.1, 35.01)] {
            let reading = Reading::new("t", hr, temp);
            assert_eq!(evaluate_status(&reading), AlertStatus::Normal, "{hr} bpm / {temp} °C");
        }
    }

    #[test]
    fn test_critical_readings() {
        for (hr, temp) in [(45.0, 36.5), (72.0, 34.9), (45.0, 34.2), (49.99, 35.0), (50.0, 34.99)] {
            let reading = Reading::new("t", hr, temp);
            assert_eq!(evaluate_status(&reading), AlertStatus::Critical, "{hr} bpm / {temp} °C");
        }
    }

    #[test]
    fn test_boundary_is_normal() {
        let reading = Reading::new("t", 50.0, 35.0);
        assert!(!evaluate_status(&reading).is_critical());
    }
}
