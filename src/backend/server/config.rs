/**
 * Database Setup
 *
 * Opens the SQLite pool described by `DATABASE_URL` and applies the
 * embedded migrations before the router is built.
 *
 * # Connection Options
 *
 * - The database file is created if it does not exist
 * - An in-memory database lives only as long as its connections, so its
 *   pool is pinned to one connection that is never recycled
 *
 * # Error Handling
 *
 * Unlike optional services, the database is required: any failure to
 * connect or migrate is returned and stops startup.
 */

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::backend::error::StartupError;

/// Connections kept by a file-backed pool
const FILE_POOL_SIZE: u32 = 5;

/// Whether a SQLite URL names an in-memory database
pub fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

/// Load and initialize the database connection pool
///
/// This function:
/// 1. Parses connection options from the URL
/// 2. Creates the SQLite pool
/// 3. Runs database migrations
///
/// # Example
///
/// ```rust,no_run
/// use userboard::backend::server::config::load_database;
///
/// # async fn example() {
/// let pool = load_database("sqlite::memory:").await.unwrap();
/// # }
/// ```
pub async fn load_database(database_url: &str) -> Result<SqlitePool, StartupError> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    tracing::info!("Connecting to database...");
    let pool_options = if is_in_memory(database_url) {
        tracing::debug!("In-memory database: pinning pool to one connection");
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(FILE_POOL_SIZE)
    };

    let pool = pool_options.connect_with(options).await.map_err(|e| {
        tracing::error!("Failed to create database connection pool: {:?}", e);
        e
    })?;
    tracing::info!("Database connection pool created successfully");

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await.map_err(|e| {
        tracing::error!("Failed to run database migrations: {}", e);
        e
    })?;
    tracing::info!("Database migrations completed successfully");

    Ok(pool)
}
