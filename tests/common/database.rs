//! Application test fixtures
//!
//! Every `TestApp` gets its own in-memory SQLite database with migrations
//! applied, so tests never share state.

use axum_test::{TestResponse, TestServer};
use sqlx::SqlitePool;
use userboard::backend::routes::create_router;
use userboard::backend::server::create_state;
use userboard::backend::users::db::{count_users, find_user_by_email, User};
use userboard::shared::ServerConfig;

/// Cheapest cost bcrypt accepts
pub const TEST_BCRYPT_COST: u32 = 4;

/// Default password used by the form helpers
pub const TEST_PASSWORD: &str = "password123";

/// Configuration for a throwaway server
pub fn test_config(database_url: &str) -> ServerConfig {
    ServerConfig::builder()
        .database_url(database_url)
        .bcrypt_cost(TEST_BCRYPT_COST)
        .build()
        .expect("Invalid test configuration")
}

/// Test application fixture
///
/// Holds the test server and the pool behind it, so tests can check what
/// a request actually wrote.
pub struct TestApp {
    pub server: TestServer,
    pub pool: SqlitePool,
}

impl TestApp {
    /// Create an app on a fresh in-memory database
    pub async fn new() -> Self {
        Self::with_database("sqlite::memory:").await
    }

    /// Create an app on the given database URL
    pub async fn with_database(database_url: &str) -> Self {
        let state = create_state(test_config(database_url))
            .await
            .expect("Failed to create application state");
        let pool = state.db.clone();
        let server = TestServer::new(create_router(state)).expect("Failed to create test server");
        Self { server, pool }
    }

    /// Number of rows in the users table
    pub async fn user_count(&self) -> i64 {
        count_users(&self.pool).await.expect("Failed to count users")
    }

    /// Number of rows in the posts table
    pub async fn post_count(&self) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM posts")
            .fetch_one(&self.pool)
            .await
            .expect("Failed to count posts")
    }

    /// Look up a stored user
    pub async fn user(&self, email: &str) -> Option<User> {
        find_user_by_email(&self.pool, email)
            .await
            .expect("Failed to look up user")
    }

    /// Make every `operation` (INSERT, UPDATE or DELETE) on `table` fail
    ///
    /// Installs a trigger that aborts the statement, so the handler sees a
    /// database error rather than a constraint it knows about.
    pub async fn reject_writes(&self, table: &str, operation: &str) {
        let sql = format!(
            "CREATE TRIGGER reject_{op}_{table} BEFORE {op} ON {table} \
             BEGIN SELECT RAISE(ABORT, 'writes disabled'); END",
            op = operation.to_lowercase(),
            table = table,
        );
        sqlx::query(&sql)
            .execute(&self.pool)
            .await
            .expect("Failed to install trigger");
    }

    /// Submit the add-user form with matching passwords
    pub async fn add_user(&self, name: &str, email: &str) -> TestResponse {
        self.server
            .post("/user/add")
            .form(&user_form(name, email))
            .await
    }
}

/// A valid add-user submission
pub fn user_form(name: &str, email: &str) -> Vec<(String, String)> {
    vec![
        ("name".to_string(), name.to_string()),
        ("email".to_string(), email.to_string()),
        ("favorite_color".to_string(), String::new()),
        ("password".to_string(), TEST_PASSWORD.to_string()),
        ("password_confirm".to_string(), TEST_PASSWORD.to_string()),
    ]
}

/// A valid post submission
pub fn post_form(title: &str) -> Vec<(String, String)> {
    vec![
        ("title".to_string(), title.to_string()),
        ("content".to_string(), format!("All about {}", title)),
        ("author".to_string(), "Alice".to_string()),
        ("slug".to_string(), title.to_lowercase().replace(' ', "-")),
    ]
}
