/**
 * Backend Error Types
 *
 * This module defines the error types of the backend server.
 *
 * # Error Types
 *
 * - `StoreError` - Typed outcomes of failed persistence operations
 * - `BackendError` - Errors that end a request with an error page
 * - `StartupError` - Errors that stop the server from starting
 *
 * # Error Categories
 *
 * ## Store Errors
 *
 * Returned by every function in `users::db` and `posts::db`:
 * - `NotFound` - no row with the requested id
 * - `Conflict` - a unique constraint rejected the write
 * - `Database` - any other sqlx failure (connection, commit, decode)
 *
 * Handlers inspect these explicitly. A conflict or database failure on a
 * form submission is shown as a flash message, not as an error page.
 *
 * ## Backend Errors
 *
 * Backend errors occur when a request cannot be answered with its normal
 * page:
 * - Unknown route or record (404)
 * - Template rendering or hashing failures (500)
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::auth::CredentialError;
use crate::backend::render::TemplateError;
use crate::shared::ConfigError;

/// Failed persistence operation
#[derive(Debug, Error)]
pub enum StoreError {
    /// No row with the requested id
    #[error("record not found")]
    NotFound,

    /// A unique constraint rejected the write
    #[error("conflicting value for {field}")]
    Conflict {
        /// Column whose uniqueness was violated
        field: &'static str,
    },

    /// Any other database failure
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl StoreError {
    /// Map a unique-constraint violation to `Conflict`, anything else to `Database`
    pub fn from_write(err: sqlx::Error, field: &'static str) -> Self {
        match &err {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                Self::Conflict { field }
            }
            _ => Self::Database(err),
        }
    }
}

/// Backend-specific error types
///
/// Each variant maps to an HTTP status and is rendered as an error page by
/// the error-page middleware.
///
/// # Usage
///
/// ```rust
/// use userboard::backend::error::BackendError;
/// use axum::http::StatusCode;
///
/// let err = BackendError::not_found("user 42");
/// assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Unknown route or record
    #[error("Not found: {what}")]
    NotFound {
        /// What was looked up
        what: String,
    },

    /// Persistence failure outside a form flow
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Password hashing failure
    #[error(transparent)]
    Credential(#[from] CredentialError),

    /// Template rendering failure
    #[error(transparent)]
    Template(#[from] TemplateError),
}

impl BackendError {
    /// Create a not-found error
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `NotFound` and `Store(NotFound)` - 404 Not Found
    /// - `Store(Conflict)` - 409 Conflict
    /// - Everything else - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } | Self::Store(StoreError::NotFound) => StatusCode::NOT_FOUND,
            Self::Store(StoreError::Conflict { .. }) => StatusCode::CONFLICT,
            Self::Store(StoreError::Database(_)) | Self::Credential(_) | Self::Template(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// A human-readable error message
    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// Errors raised while building the application
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to open database: {0}")]
    Database(#[from] sqlx::Error),

    #[error("failed to run migrations: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error("failed to bind listener: {0}")]
    Io(#[from] std::io::Error),
}
