//! Backend Module
//!
//! This module contains all server-side code: an Axum HTTP server that
//! renders HTML forms, validates submissions and stores users and blog
//! posts in SQLite.
//!
//! # Architecture
//!
//! The backend is organized into focused submodules:
//!
//! - **`server`** - Server initialization, application state, database setup
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`pages`** - Index, greeting and name form handlers
//! - **`users`** - User table and user management handlers
//! - **`posts`** - Post table and blog handlers
//! - **`auth`** - Password hashing and verification
//! - **`render`** - Tera templates, page builder and flash messages
//! - **`middleware`** - Error pages, panic recovery, request tracing
//! - **`error`** - Backend-specific error types
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Binary entry point
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── pages/          - Database-free pages
//! ├── users/          - Users table and handlers
//! ├── posts/          - Posts table and handlers
//! ├── auth/           - Credentials
//! ├── render/         - Templates and flash messages
//! ├── middleware/     - Request middleware
//! └── error/          - Error types
//! ```
//!
//! # Request Lifecycle
//!
//! 1. `TraceLayer` opens a span for the request
//! 2. The handler validates the form, if any, and talks to the database
//! 3. The handler renders a `Page`, or returns a `BackendError`
//! 4. Tagged error responses are replaced by the 404 or 500 page
//!
//! # State Management
//!
//! Handlers share an `AppState` holding the connection pool, the compiled
//! templates and the configuration. Nothing else is shared between requests.
//!
//! # Error Handling
//!
//! - `StoreError` from persistence is inspected by handlers that show a
//!   flash message, and converted with `?` everywhere else
//! - `BackendError` becomes an HTTP response through `IntoResponse`
//!
//! # Example
//!
//! ```rust,no_run
//! use userboard::backend::create_app;
//! use userboard::shared::ServerConfig;
//!
//! # async fn example() {
//! let app = create_app(ServerConfig::default()).await.unwrap();
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:3000").await.unwrap();
//! axum::serve(listener, app).await.unwrap();
//! # }
//! ```

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Database-free pages
pub mod pages;

/// Users table and handlers
pub mod users;

/// Blog posts
pub mod posts;

/// Password hashing
pub mod auth;

/// Templates and flash messages
pub mod render;

/// Middleware for request processing
pub mod middleware;

/// Backend error types
pub mod error;

/// Re-export commonly used types
pub use error::{BackendError, StartupError, StoreError};
pub use server::{create_app, AppState};
