/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Route Order
 *
 * 1. Page routes (index, greeting, name form)
 * 2. User routes (add, update, delete, password test)
 * 3. Post routes (add, list, view)
 * 4. Static files under `/static`
 * 5. Fallback handler (404 page)
 *
 * The whole router is then wrapped with the error-page, panic and tracing
 * layers.
 */
use axum::{handler::HandlerWithoutStateExt, Router};
use tower_http::services::ServeDir;

use crate::backend::middleware::{not_found, with_error_pages};
use crate::backend::routes::page_routes::configure_page_routes;
use crate::backend::routes::post_routes::configure_post_routes;
use crate::backend::routes::user_routes::configure_user_routes;
use crate::backend::server::state::AppState;

/// Directory served under `/static`
pub const STATIC_DIR: &str = "public";

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state (database pool, templates, config)
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
///
/// ## Static Files
///
/// Static files are served from the `public` directory. A missing file
/// gets the 404 page.
///
/// ## Fallback
///
/// Unknown routes get the 404 page.
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new();
    let router = configure_page_routes(router);
    let router = configure_user_routes(router);
    let router = configure_post_routes(router);

    // Add static file serving
    let static_files = ServeDir::new(STATIC_DIR).not_found_service(not_found.into_service());
    let router = router.nest_service("/static", static_files);

    // Fallback handler for 404
    let router = router.fallback(not_found);

    // Use AppState as router state
    let router = router.with_state(app_state.clone());
    with_error_pages(router, app_state)
}
