// HTTP request handlers
use crate::domain::view::{SelectionState, ViewMode};
use crate::infrastructure::chunked_json::stream_from_receiver;
use crate::infrastructure::http_response::{accepts_brotli, json_response};
use crate::presentation::api_error::ApiError;
use crate::presentation::app_state::AppState;
use axum::{
    Json,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

#[derive(Deserialize)]
pub struct DashboardQuery {
    pub unit: Option<String>,
    pub mode: Option<String>,
}

#[derive(Serialize)]
struct UnitView {
    id: String,
    callsign: String,
    label: String,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// List the selectable units
pub async fn list_units(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let units: Vec<UnitView> = state
        .unit_service
        .list_units()
        .iter()
        .map(|u| UnitView {
            id: u.id.clone(),
            callsign: u.callsign.clone(),
            label: u.label(),
        })
        .collect();

    Json(units)
}

/// Render the dashboard for the selected unit and view mode
pub async fn get_dashboard(
    Query(query): Query<DashboardQuery>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Result<Response, ApiError> {
    let unit = state.unit_service.resolve(query.unit.as_deref())?;
    let mode = match query.mode.as_deref() {
        Some(mode) => mode.parse::<ViewMode>()?,
        None => ViewMode::default(),
    };

    let dashboard = state
        .dashboard_service
        .render(&SelectionState::new(unit, mode))
        .await;

    Ok(
        match json_response(StatusCode::OK, &dashboard, accepts_brotli(&headers)).await {
            Ok(response) => response,
            Err(status) => status.into_response(),
        },
    )
}

/// Run the rescue dispatch sequence, streaming its progress as NDJSON
pub async fn dispatch_rescue(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, ApiError> {
    let unit = state.unit_service.resolve(Some(&id))?;
    let (_, status) = state.dashboard_service.current_status(&unit).await?;

    let rx = state.dispatch_service.dispatch(&unit, status).await?;
    Ok(stream_from_receiver(rx).into_response())
}

/// Current dispatch phase for a unit
pub async fn dispatch_status(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, ApiError> {
    let unit = state.unit_service.resolve(Some(&id))?;
    Ok(Json(state.dispatch_service.status(&unit.id).await).into_response())
}

/// Cancel an in-flight dispatch
pub async fn cancel_dispatch(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, ApiError> {
    let unit = state.unit_service.resolve(Some(&id))?;
    state.dispatch_service.cancel(&unit.id).await?;
    Ok(StatusCode::ACCEPTED.into_response())
}

/// Drop cached datasets so the next render re-reads the source
pub async fn reload_dataset(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let dropped = state.dashboard_service.reload().await;
    Json(json!({ "invalidated": dropped }))
}
