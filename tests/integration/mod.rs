//! Integration tests driving the full router over HTTP

pub mod pages_test;
pub mod posts_test;
