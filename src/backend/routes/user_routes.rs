/**
 * User Routes
 *
 * - `GET|POST /user/add` - add user form and user list
 * - `GET|POST /update/{id}` - update form
 * - `GET /delete/{id}` - delete a user
 * - `GET|POST /test` - credential test form
 *
 * `/user/add` is a static segment, so it takes precedence over the
 * `/user/{name}` greeting route.
 */
use axum::{routing::get, Router};

use crate::backend::server::state::AppState;
use crate::backend::users::handlers::{
    add_user, add_user_form, delete_user_handler, test_password, test_password_form,
    update_user_form, update_user_submit,
};

/// Configure user routes
pub fn configure_user_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/user/add", get(add_user_form).post(add_user))
        .route("/update/{id}", get(update_user_form).post(update_user_submit))
        .route("/delete/{id}", get(delete_user_handler))
        .route("/test", get(test_password_form).post(test_password))
}
