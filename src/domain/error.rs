// Error taxonomy for the vitals monitor
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum VitalsError {
    /// Source missing, unreadable, or without the required columns
    #[error("data unavailable from {path}: {reason}")]
    DataUnavailable { path: String, reason: String },

    #[error("dataset contains no readings")]
    EmptyDataset,

    #[error("unknown unit: {0}")]
    UnknownUnit(String),

    #[error("unknown view mode: {0}")]
    InvalidViewMode(String),

    #[error("unit {0} is not in a critical state, dispatch not advised")]
    NotCritical(String),

    #[error("a rescue dispatch for {0} is already in progress")]
    AlreadyDispatching(String),

    #[error("no rescue dispatch in progress for {0}")]
    NoDispatchInFlight(String),
}

impl VitalsError {
    pub fn data_unavailable(path: impl Into<String>, reason: impl ToString) -> Self {
        Self::DataUnavailable {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}
