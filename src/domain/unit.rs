// Monitored unit domain model
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    pub id: String,
    pub callsign: String,
}

impl Unit {
    pub fn new(id: impl Into<String>, callsign: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            callsign: callsign.into(),
        }
    }

    /// Display label, e.g. "Soldier-001 (Alpha)"
    pub fn label(&self) -> String {
        if self.callsign.is_empty() {
            self.id.clone()
        } else {
            format!("{} ({})", self.id, self.callsign)
        }
    }

    pub fn default_roster() -> Vec<Unit> {
        vec![
            Unit::new("Soldier-001", "Alpha"),
            Unit::new("Soldier-002", "Bravo"),
            Unit::new("Soldier-003", "Charlie"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label() {
        let unit = Unit::new("Soldier-001", "Alpha");
        assert_eq!(unit.label(), "Soldier-001 (Alpha)");

        let unit = Unit::new("Scout-9", "");
        assert_eq!(unit.label(), "Scout-9");
    }

    #[test]
    fn test_default_roster() {
        let roster = Unit::default_roster();
        assert_eq!(roster.len(), 3);
        assert_eq!(roster[2].label(), "Soldier-003 (Charlie)");
    }
}
