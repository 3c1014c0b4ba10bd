/**
 * Error Conversion
 *
 * This module converts backend errors into HTTP responses.
 *
 * # HTTP Response Conversion
 *
 * `BackendError` implements `IntoResponse` from Axum, so handlers can
 * return it directly. The response carries the error's status code, a
 * plain-text body, and an [`ErrorPage`] extension. The error-page
 * middleware looks for that extension and swaps the body for the rendered
 * 404 or 500 template.
 */

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::backend::error::types::BackendError;

/// Marks a response whose body should be replaced by an error page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorPage;

/// Build a tagged error response for a status code
pub fn error_page_response(status: StatusCode) -> Response {
    let reason = status.canonical_reason().unwrap_or("Error");
    let mut response = (status, reason).into_response();
    response.extensions_mut().insert(ErrorPage);
    response
}

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!("Request failed: {}", self.message());
        } else {
            tracing::warn!("Request failed ({}): {}", status.as_u16(), self.message());
        }

        error_page_response(status)
    }
}
