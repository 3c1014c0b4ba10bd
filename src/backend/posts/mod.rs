//! Posts Module
//!
//! Blog posts: submission, listing and single-post pages.

/// Post model and database operations
pub mod db;

/// HTTP handlers
pub mod handlers;

pub use db::{NewPost, Post};
