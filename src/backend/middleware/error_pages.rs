/**
 * Error Page Middleware
 *
 * Responses tagged with the `ErrorPage` extension get their body replaced
 * by the rendered 404 or 500 template. Tags are set by `BackendError`, by
 * the router fallback, by the static file service for missing files, and
 * by the panic handler below.
 *
 * # Layer Order
 *
 * ```text
 * TraceLayer -> render_error_pages -> CatchPanicLayer -> handler
 * ```
 *
 * The panic layer sits inside this middleware so a panicking handler still
 * gets the 500 page.
 */

use std::any::Any;
use std::sync::Arc;

use axum::{
    extract::{FromRef, Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::Response,
    Router,
};
use tower::ServiceBuilder;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use crate::backend::error::{error_page_response, ErrorPage};
use crate::backend::render::{Page, Templates};

/// Template for a tagged status, if it has one
fn error_template(status: StatusCode) -> Option<&'static str> {
    if status == StatusCode::NOT_FOUND {
        Some("404.html")
    } else if status.is_server_error() {
        Some("500.html")
    } else {
        None
    }
}

/// Replace tagged error responses with the rendered error page
pub async fn render_error_pages(
    State(templates): State<Arc<Templates>>,
    request: Request,
    next: Next,
) -> Response {
    let response = next.run(request).await;
    if response.extensions().get::<ErrorPage>().is_none() {
        return response;
    }

    let status = response.status();
    let Some(template) = error_template(status) else {
        return response;
    };

    match Page::new(template).status(status).render(&templates) {
        Ok(page) => page,
        Err(e) => {
            tracing::error!("Failed to render error page {}: {}", template, e);
            response
        }
    }
}

/// Turn a handler panic into a tagged 500 response
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("non-string panic payload");
    tracing::error!("Handler panicked: {}", detail);
    error_page_response(StatusCode::INTERNAL_SERVER_ERROR)
}

/// Fallback for unknown routes and missing static files
pub async fn not_found() -> Response {
    error_page_response(StatusCode::NOT_FOUND)
}

/// Wrap a router with tracing, error pages and panic recovery
///
/// `state` only has to yield the templates, so the application state and a
/// bare `Arc<Templates>` both work.
pub fn with_error_pages<S>(router: Router, state: S) -> Router
where
    S: Clone + Send + Sync + 'static,
    Arc<Templates>: FromRef<S>,
{
    router.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(middleware::from_fn_with_state(state, render_error_pages))
            .layer(CatchPanicLayer::custom(panic_response)),
    )
}
