// Domain layer - Vital-sign readings, alert rules and the dashboard view model
pub mod dashboard;
pub mod dispatch;
pub mod error;
pub mod reading;
pub mod status;
pub mod telemetry;
pub mod unit;
pub mod view;
