//! Middleware Module
//!
//! This module contains the HTTP middleware for the backend server.
//!
//! # Architecture
//!
//! The middleware module currently provides:
//!
//! - **`error_pages`** - Renders the 404 and 500 templates for tagged
//!   responses, catches handler panics and adds request tracing
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use axum::Router;
//! use userboard::backend::middleware::with_error_pages;
//! use userboard::backend::render::Templates;
//!
//! let templates = Arc::new(Templates::new().unwrap());
//! let app = with_error_pages(Router::new(), templates);
//! ```

pub mod error_pages;

pub use error_pages::{not_found, panic_response, render_error_pages, with_error_pages};
