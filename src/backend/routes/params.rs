/**
 * Path Parameters
 *
 * Record ids arrive as the last path segment (`/update/{id}`,
 * `/posts/{id}`). A segment that is not an integer cannot name a record, so
 * it is rejected with the 404 page rather than axum's plain-text 400.
 */

use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::backend::error::BackendError;

/// Integer id taken from the request path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordId(pub i64);

impl<S> FromRequestParts<S> for RecordId
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| BackendError::not_found(format!("path parameter: {}", e)))?;

        raw.parse::<i64>()
            .map(RecordId)
            .map_err(|_| BackendError::not_found(format!("record {:?}", raw)))
    }
}
