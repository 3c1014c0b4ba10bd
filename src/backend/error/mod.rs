//! Backend Error Module
//!
//! This module defines error types specific to the backend server.
//! These errors are used in HTTP handlers and can be converted to HTTP responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - Error conversion implementations
//! ```
//!
//! # Error Types
//!
//! - `StoreError` - Typed failures of persistence operations
//! - `BackendError` - Errors that end a request with a 404 or 500 page
//! - `StartupError` - Errors that stop the server from starting
//!
//! Validation failures are not errors at this level: they are re-rendered
//! inline by the handler that received the form.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use conversion::{error_page_response, ErrorPage};
pub use types::{BackendError, StartupError, StoreError};
