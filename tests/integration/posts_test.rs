//! Blog post integration tests

use axum::http::StatusCode;

use userboard::backend::posts::handlers::POST_FAILED;

use crate::common::{post_form, TestApp};
use crate::{assert_contains, assert_not_contains};

#[tokio::test]
async fn test_add_post_form_renders() {
    let app = TestApp::new().await;

    let response = app.server.get("/add-post").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_contains!(response.text(), "name=\"slug\"");
}

#[tokio::test]
async fn test_add_post() {
    let app = TestApp::new().await;

    let response = app.server.post("/add-post").form(&post_form("Hello World")).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let html = response.text();
    assert_contains!(html, "Blog Post Submitted Successfully!");
    assert_not_contains!(html, "value=\"Hello World\"");
    assert_eq!(app.post_count().await, 1);
}

#[tokio::test]
async fn test_add_post_missing_fields() {
    let app = TestApp::new().await;

    let response = app
        .server
        .post("/add-post")
        .form(&[("title", "Only a title")])
        .await;

    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    let html = response.text();
    assert_contains!(html, "This field is required.");
    assert_contains!(html, "value=\"Only a title\"");
    assert_eq!(app.post_count().await, 0);
}

#[tokio::test]
async fn test_add_post_database_failure() {
    let app = TestApp::new().await;
    app.reject_writes("posts", "INSERT").await;

    let response = app.server.post("/add-post").form(&post_form("Lost Post")).await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let html = response.text();
    assert_contains!(html, POST_FAILED);
    assert_contains!(html, "value=\"Lost Post\"");
    assert_not_contains!(html, "Blog Post Submitted Successfully!");
    assert_eq!(app.post_count().await, 0);
}

#[tokio::test]
async fn test_posts_listed_newest_first() {
    let app = TestApp::new().await;
    app.server.post("/add-post").form(&post_form("First Post")).await;
    app.server.post("/add-post").form(&post_form("Second Post")).await;

    let response = app.server.get("/posts").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let html = response.text();
    let first = html.find("First Post").expect("first post listed");
    let second = html.find("Second Post").expect("second post listed");
    assert!(second < first);
}

#[tokio::test]
async fn test_empty_post_list() {
    let app = TestApp::new().await;

    assert_contains!(app.server.get("/posts").await.text(), "No posts yet.");
}

#[tokio::test]
async fn test_single_post() {
    let app = TestApp::new().await;
    app.server.post("/add-post").form(&post_form("Hello World")).await;
    let id: i64 = sqlx::query_scalar("SELECT id FROM posts")
        .fetch_one(&app.pool)
        .await
        .unwrap();

    let response = app.server.get(&format!("/posts/{}", id)).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let html = response.text();
    assert_contains!(html, "Hello World");
    assert_contains!(html, "All about Hello World");

    for path in ["/posts/999", "/posts/latest"] {
        let response = app.server.get(path).await;
        assert_eq!(response.status_code(), StatusCode::NOT_FOUND, "{}", path);
    }
}
