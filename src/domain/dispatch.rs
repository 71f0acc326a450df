// Rescue dispatch domain model
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Idle -> Dispatching -> one terminal phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DispatchPhase {
    Idle,
    Dispatching,
    Dispatched,
    Cancelled,
    TimedOut,
    Failed,
}

impl DispatchPhase {
    pub fn is_in_flight(self) -> bool {
        self == DispatchPhase::Dispatching
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DispatchEvent {
    pub unit_id: String,
    pub phase: DispatchPhase,
    pub message: String,
    /// Ask the presentation layer for the celebratory effect
    pub celebrate: bool,
    pub at: DateTime<Utc>,
}

impl DispatchEvent {
    pub fn new(unit_id: &str, phase: DispatchPhase, message: String) -> Self {
        Self {
            unit_id: unit_id.to_string(),
            phase,
            message,
            celebrate: phase == DispatchPhase::Dispatched,
            at: Utc::now(),
        }
    }

    pub fn idle(unit_id: &str) -> Self {
        Self::new(unit_id, DispatchPhase::Idle, "No rescue requested".to_string())
    }
}
