//! Static and greeting pages that do not touch the database.

/// HTTP handlers
pub mod handlers;
