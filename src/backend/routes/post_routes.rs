/**
 * Blog Post Routes
 *
 * - `GET|POST /add-post` - post form
 * - `GET /posts` - post list
 * - `GET /posts/{id}` - single post
 */
use axum::{routing::get, Router};

use crate::backend::posts::handlers::{add_post, add_post_form, post, posts};
use crate::backend::server::state::AppState;

/// Configure blog post routes
pub fn configure_post_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/add-post", get(add_post_form).post(add_post))
        .route("/posts", get(posts))
        .route("/posts/{id}", get(post))
}
