// Presentation layer - HTTP surface consumed by the dashboard front end
pub mod api_error;
pub mod app_state;
pub mod handlers;
pub mod router;
