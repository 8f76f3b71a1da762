//! Client-facing error responses.
//!
//! # Design Decisions
//! - All forwarding-path errors become structured JSON bodies
//! - Error text comes from the taxonomy's Display impl; upstream error
//!   detail is included (there are no secrets to leak, the proxy holds none)

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;

use crate::relay::RelayError;

/// JSON error body: `{"error": "..."}`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Build a structured JSON error response.
pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorBody {
            error: message.into(),
        }),
    )
        .into_response()
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        error_response(self.status(), self.to_string())
    }
}
