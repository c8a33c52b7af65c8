//! API error types and conversions

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use multiverse_core::LocationError;
use serde::{Deserialize, Serialize};

/// API error that converts to an HTTP response.
///
/// Status and message come from the [`LocationError`] taxonomy; the body
/// is always `{ "error": <message> }`.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    kind: &'static str,
    message: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        self.status
    }
}

/// Error response body shared by every failing request
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::debug!(
            error = self.kind,
            status = self.status.as_u16(),
            message = %self.message,
            "API client error"
        );

        (self.status, Json(ErrorResponse { error: self.message })).into_response()
    }
}

impl From<LocationError> for ApiError {
    fn from(err: LocationError) -> Self {
        let status = StatusCode::from_u16(err.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        Self {
            status,
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}
