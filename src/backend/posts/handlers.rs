/**
 * Blog Post Handlers
 *
 * - `GET|POST /add-post` - submit a post
 * - `GET /posts` - all posts, newest first
 * - `GET /posts/{id}` - a single post
 */

use std::collections::HashMap;

use axum::{
    extract::State,
    http::StatusCode,
    response::Response,
};

use crate::backend::error::BackendError;
use crate::backend::posts::db::{find_post, insert_post, list_posts, NewPost};
use crate::backend::render::{FlashMessage, Page};
use crate::backend::routes::params::RecordId;
use crate::backend::server::state::AppState;
use crate::shared::{Form, PostForm};

pub const POST_ADDED: &str = "Blog Post Submitted Successfully!";
pub const POST_FAILED: &str = "Error! Looks like there was a problem... try again!";

/// Show the post form
pub async fn add_post_form(State(state): State<AppState>) -> Result<Response, BackendError> {
    let page = Page::new("add_post.html").form(&PostForm::SCHEMA, &HashMap::new(), None);
    Ok(page.render(&state.templates)?)
}

/// Submit a post
pub async fn add_post(
    State(state): State<AppState>,
    axum::Form(raw): axum::Form<HashMap<String, String>>,
) -> Result<Response, BackendError> {
    let form = match PostForm::validate(&raw) {
        Ok(form) => form,
        Err(errors) => {
            tracing::debug!("Post form rejected: {}", errors);
            let page = Page::new("add_post.html")
                .status(StatusCode::UNPROCESSABLE_ENTITY)
                .form(&PostForm::SCHEMA, &raw, Some(&errors));
            return Ok(page.render(&state.templates)?);
        }
    };

    let new_post = NewPost {
        title: form.title,
        content: form.content,
        author: form.author,
        slug: form.slug,
    };

    let page = match insert_post(&state.db, new_post).await {
        Ok(post) => {
            tracing::info!("Post submitted: {} by {}", post.title, post.author);
            Page::new("add_post.html")
                .flash(FlashMessage::success(POST_ADDED))
                .form(&PostForm::SCHEMA, &HashMap::new(), None)
        }
        Err(e) => {
            tracing::error!("Failed to save post: {}", e);
            Page::new("add_post.html")
                .status(StatusCode::INTERNAL_SERVER_ERROR)
                .flash(FlashMessage::error(POST_FAILED))
                .form(&PostForm::SCHEMA, &raw, None)
        }
    };
    Ok(page.render(&state.templates)?)
}

/// List all posts
pub async fn posts(State(state): State<AppState>) -> Result<Response, BackendError> {
    let posts = list_posts(&state.db).await?;
    Ok(Page::new("posts.html").with("posts", posts).render(&state.templates)?)
}

/// Show one post
pub async fn post(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> Result<Response, BackendError> {
    let post = find_post(&state.db, id)
        .await?
        .ok_or_else(|| BackendError::not_found(format!("post {}", id)))?;
    Ok(Page::new("post.html").with("post", post).render(&state.templates)?)
}
