// Route table
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    cancel_dispatch, dispatch_rescue, dispatch_status, get_dashboard, health_check, list_units,
    reload_dataset,
};
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(health_check))
        .route("/units", get(list_units))
        .route("/dashboard", get(get_dashboard))
        .route(
            "/units/:id/dispatch",
            get(dispatch_status).post(dispatch_rescue).delete(cancel_dispatch),
        )
        .route("/dataset/reload", post(reload_dataset))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
