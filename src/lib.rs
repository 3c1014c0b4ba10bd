//! Userboard - Main Library
//!
//! Userboard is a small server-rendered web application built with Axum: a
//! user registry with add, update, delete and password-check forms, plus a
//! minimal blog.
//!
//! # Overview
//!
//! This library provides:
//! - HTML form validation with per-field error messages
//! - bcrypt password hashing behind a write-only credential type
//! - SQLite persistence through sqlx, with embedded migrations
//! - Tera templates with one-shot flash messages
//! - 404 and 500 error pages, including for handler panics
//!
//! # Module Structure
//!
//! The library is organized into two main modules:
//!
//! - **`shared`** - I/O-free code
//!   - Server configuration
//!   - Form schemas and validation errors
//!
//! - **`backend`** - Server-side code
//!   - Axum router, handlers and middleware
//!   - Database access
//!   - Templates and error pages
//!
//! # Usage
//!
//! ```rust,no_run
//! use userboard::backend::server::init::create_app;
//! use userboard::shared::ServerConfig;
//!
//! # async fn example() {
//! let config = ServerConfig::from_env().unwrap();
//! let app = create_app(config).await.unwrap();
//! // Use app with axum::serve
//! # }
//! ```
//!
//! # Error Handling
//!
//! - `shared::ValidationErrors` for rejected forms, rendered inline
//! - `backend::StoreError` for persistence failures
//! - `backend::BackendError` for failures that end in an error page

/// Configuration and form validation
pub mod shared;

/// Backend server-side code
pub mod backend;
