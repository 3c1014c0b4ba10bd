/**
 * Page Routes
 *
 * - `GET /` - index page
 * - `GET /user/{name}` - greeting page
 * - `GET|POST /name` - name form
 */
use axum::{routing::get, Router};

use crate::backend::pages::handlers::{greet_user, index, name_form, name_submit};
use crate::backend::server::state::AppState;

/// Configure page routes
pub fn configure_page_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/", get(index))
        .route("/user/{name}", get(greet_user))
        .route("/name", get(name_form).post(name_submit))
}
