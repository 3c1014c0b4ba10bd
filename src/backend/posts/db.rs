/**
 * Blog Post Model and Database Operations
 *
 * Posts are append-only: they are created, listed and read one at a time.
 */

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::SqlitePool;

use crate::backend::error::StoreError;

/// Post row
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author: String,
    pub date_posted: DateTime<Utc>,
    pub slug: String,
}

/// A post about to be inserted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub author: String,
    pub slug: String,
}

/// Create a new post
pub async fn insert_post(pool: &SqlitePool, new_post: NewPost) -> Result<Post, StoreError> {
    let post = sqlx::query_as::<_, Post>(
        r#"
        INSERT INTO posts (title, content, author, date_posted, slug)
        VALUES (?, ?, ?, ?, ?)
        RETURNING id, title, content, author, date_posted, slug
        "#,
    )
    .bind(&new_post.title)
    .bind(&new_post.content)
    .bind(&new_post.author)
    .bind(Utc::now())
    .bind(&new_post.slug)
    .fetch_one(pool)
    .await?;

    tracing::info!("Created post {} ({})", post.id, post.slug);
    Ok(post)
}

/// All posts, newest first
pub async fn list_posts(pool: &SqlitePool) -> Result<Vec<Post>, StoreError> {
    let posts = sqlx::query_as::<_, Post>(
        r#"
        SELECT id, title, content, author, date_posted, slug
        FROM posts
        ORDER BY date_posted DESC, id DESC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(posts)
}

/// Get post by ID
pub async fn find_post(pool: &SqlitePool, id: i64) -> Result<Option<Post>, StoreError> {
    let post = sqlx::query_as::<_, Post>(
        r#"
        SELECT id, title, content, author, date_posted, slug
        FROM posts
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(post)
}
