/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * The `AppState` struct is the only state shared between requests. It
 * holds:
 * - The SQLite connection pool
 * - The compiled page templates
 * - The server configuration
 *
 * Nothing in it is mutable. All persistent state lives in the database.
 *
 * # State Extraction
 *
 * The `FromRef` implementation lets the error-page middleware extract the
 * templates without needing the entire `AppState`.
 *
 * # Example
 *
 * ```rust
 * use userboard::backend::server::state::AppState;
 * use axum::extract::State;
 *
 * async fn handler(State(state): State<AppState>) {
 *     let users = userboard::backend::users::db::list_users(&state.db).await;
 *     // ...
 * }
 * ```
 */

use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::backend::render::Templates;
use crate::shared::ServerConfig;

/// Application state passed to every handler
///
/// # Fields
///
/// * `db` - SQLite connection pool (cheap to clone)
/// * `templates` - Compiled tera templates
/// * `config` - Server configuration, read for the bcrypt cost
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,

    /// Page templates, shared by every handler
    pub templates: Arc<Templates>,

    /// Configuration the server was started with
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(db: SqlitePool, templates: Templates, config: ServerConfig) -> Self {
        Self {
            db,
            templates: Arc::new(templates),
            config: Arc::new(config),
        }
    }
}

/// Implement FromRef for the templates
///
/// The error-page middleware extracts `State<Arc<Templates>>` from the
/// application state.
impl FromRef<AppState> for Arc<Templates> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.templates.clone()
    }
}
