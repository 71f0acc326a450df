// Unit service - The fixed roster of selectable units
use crate::domain::error::VitalsError;
use crate::domain::unit::Unit;
use std::sync::Arc;

#[derive(Clone)]
pub struct UnitService {
    units: Arc<Vec<Unit>>,
}

impl UnitService {
    pub fn new(units: Vec<Unit>) -> Self {
        Self {
            units: Arc::new(units),
        }
    }

    pub fn list_units(&self) -> &[Unit] {
        &self.units
    }

    /// Look up a unit by id; `None` selects the first unit in the roster
    pub fn resolve(&self, unit_id: Option<&str>) -> Result<Unit, VitalsError> {
        match unit_id {
            Some(id) => self
                .units
                .iter()
                .find(|u| u.id == id)
                .cloned()
                .ok_or_else(|| VitalsError::UnknownUnit(id.to_string())),
            None => self
                .units
                .first()
                .cloned()
                .ok_or_else(|| VitalsError::UnknownUnit(String::new())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve() {
        let service = UnitService::new(Unit::default_roster());

        assert_eq!(service.resolve(None).unwrap().id, "Soldier-001");
        assert_eq!(service.resolve(Some("Soldier-003")).unwrap().callsign, "Charlie");
        assert_eq!(
            service.resolve(Some("Soldier-404")),
            Err(VitalsError::UnknownUnit("Soldier-404".to_string()))
        );
    }
}
