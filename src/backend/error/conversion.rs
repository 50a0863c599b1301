/**
 * Error Conversion
 *
 * Renders `BackendError` values as wire responses. Every error becomes
 * HTTP 200 with the error message in the `Error` body field; the
 * dashboard front-end branches on body content, so non-200 statuses would
 * break it. Login failures additionally carry `Status: "Error"`.
 */

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};

use crate::backend::error::types::BackendError;
use crate::shared::envelope::Envelope;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let envelope = match &self {
            // Login failures carry the Status tag as well
            BackendError::WrongCredentials => Envelope::status_error(self.to_string()),
            _ => Envelope::error(self.to_string()),
        };
        (StatusCode::OK, Json(envelope)).into_response()
    }
}
