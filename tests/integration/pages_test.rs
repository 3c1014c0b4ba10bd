//! Page integration tests
//!
//! Index, greeting, name form, static files and error pages.

use axum::http::StatusCode;

use crate::common::TestApp;
use crate::{assert_contains, assert_not_contains};

#[tokio::test]
async fn test_index_greets_john() {
    let app = TestApp::new().await;

    let response = app.server.get("/").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let html = response.text();
    assert_contains!(html, "Hello John!");
    assert_contains!(html, "<li>Pepperoni</li>");
}

#[tokio::test]
async fn test_user_greeting_is_escaped() {
    let app = TestApp::new().await;

    let html = app.server.get("/user/Bob").await.text();
    assert_contains!(html, "Hello Bob!");

    let html = app.server.get("/user/%3Cscript%3E").await.text();
    assert_contains!(html, "&lt;script&gt;");
    assert_not_contains!(html, "Hello <script>");
}

#[tokio::test]
async fn test_name_form_flow() {
    let app = TestApp::new().await;

    let response = app.server.get("/name").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_contains!(response.text(), "What's your name?");

    let response = app.server.post("/name").form(&[("name", " Ann ")]).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let html = response.text();
    assert_contains!(html, "Form Submitted Successfully!");
    assert_contains!(html, "Hello Ann!");
}

#[tokio::test]
async fn test_name_form_requires_name() {
    let app = TestApp::new().await;

    let response = app.server.post("/name").form(&[("name", "   ")]).await;

    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    let html = response.text();
    assert_contains!(html, "This field is required.");
    assert_not_contains!(html, "Form Submitted Successfully!");
}

#[tokio::test]
async fn test_unknown_route_renders_404_page() {
    let app = TestApp::new().await;

    let response = app.server.get("/no/such/page").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_contains!(response.text(), "404 - Page Not Found");
}

#[tokio::test]
async fn test_static_files() {
    let app = TestApp::new().await;

    let response = app.server.get("/static/style.css").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_contains!(response.text(), ".navbar");

    let response = app.server.get("/static/missing.css").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_contains!(response.text(), "404 - Page Not Found");
}
