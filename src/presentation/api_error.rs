// Mapping of domain errors onto HTTP responses
use crate::domain::error::VitalsError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

#[derive(Debug)]
pub struct ApiError(pub VitalsError);

impl From<VitalsError> for ApiError {
    fn from(err: VitalsError) -> Self {
        Self(err)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            VitalsError::UnknownUnit(_) => StatusCode::NOT_FOUND,
            VitalsError::InvalidViewMode(_) => StatusCode::BAD_REQUEST,
            VitalsError::NotCritical(_)
            | VitalsError::AlreadyDispatching(_)
            | VitalsError::NoDispatchInFlight(_) => StatusCode::CONFLICT,
            VitalsError::DataUnavailable { .. } | VitalsError::EmptyDataset => {
                StatusCode::SERVICE_UNAVAILABLE
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("{}", self.0);
        } else {
            tracing::debug!("Rejected request: {}", self.0);
        }
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}
