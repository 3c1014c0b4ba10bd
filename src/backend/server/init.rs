/**
 * Server Initialization
 *
 * This module handles the initialization and setup of the Axum HTTP server,
 * including database loading, template compilation and route configuration.
 *
 * # Initialization Process
 *
 * The server initialization follows these steps:
 * 1. Open the database and run migrations
 * 2. Compile the page templates
 * 3. Create the application state
 * 4. Create and configure the router
 */

use axum::Router;

use crate::backend::error::StartupError;
use crate::backend::render::Templates;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::load_database;
use crate::backend::server::state::AppState;
use crate::backend::users::db::count_users;
use crate::shared::ServerConfig;

/// Build the application state from a configuration
///
/// Tests use this to reach the pool behind a router.
pub async fn create_state(config: ServerConfig) -> Result<AppState, StartupError> {
    // Step 1: Database
    let db = load_database(&config.database_url).await?;
    match count_users(&db).await {
        Ok(count) => tracing::info!("Database ready with {} users", count),
        Err(e) => tracing::warn!("Could not count users: {}", e),
    }

    // Step 2: Templates
    let templates = Templates::new()?;
    tracing::info!("Templates compiled");

    Ok(AppState::new(db, templates, config))
}

/// Create and configure the Axum application
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
///
/// # Errors
///
/// Startup fails if the database cannot be opened or migrated, or if a
/// template does not parse.
pub async fn create_app(config: ServerConfig) -> Result<Router<()>, StartupError> {
    tracing::info!("Initializing userboard server");

    let app_state = create_state(config).await?;
    let app = create_router(app_state);

    tracing::info!("Router configured");
    Ok(app)
}
