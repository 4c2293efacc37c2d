/**
 * Error Conversion
 *
 * This module converts backend errors into HTTP responses so handlers can
 * return `BackendError` directly.
 *
 * # Response Format
 *
 * ```json
 * {
 *   "message": "Board not found",
 *   "status": 404
 * }
 * ```
 *
 * 5xx responses always carry the generic message; the underlying cause is
 * logged with `tracing::error!` before the response is built.
 */

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::backend::error::types::BackendError;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("Request failed: {:?}", self);
        } else {
            tracing::debug!("Request rejected with {}: {}", status, self);
        }

        error_response(status, self.message())
    }
}

/// Build the JSON error body used by every failing route
fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    let body = serde_json::json!({
        "message": message.into(),
        "status": status.as_u16(),
    });
    (status, Json(body)).into_response()
}
