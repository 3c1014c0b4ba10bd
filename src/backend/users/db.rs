/**
 * User Model and Database Operations
 *
 * This module owns the `users` table. Every function takes the pool as an
 * explicit argument and reports failures as `StoreError`.
 *
 * # Invariants
 *
 * - No two users share an email (`users_email_key` unique index)
 * - `id`, `date_added` and `password_hash` are never changed by an update
 * - The password hash never leaves this module except through
 *   `User::verify_password`
 */

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use crate::backend::auth::{self, PasswordHash};
use crate::backend::error::StoreError;

/// User row
#[derive(Clone, Serialize, sqlx::FromRow)]
pub struct User {
    /// Generated row id
    pub id: i64,
    /// Display name
    pub name: String,
    /// Email address (unique)
    pub email: String,
    /// Optional favorite color
    pub favorite_color: Option<String>,
    /// Set once, at insert
    pub date_added: DateTime<Utc>,
    /// bcrypt hash; rows created before passwords existed have none
    #[serde(skip)]
    password_hash: Option<String>,
}

impl User {
    /// Check a candidate password against the stored hash
    ///
    /// A user without a stored hash never verifies.
    pub fn verify_password(&self, password: &str) -> bool {
        match &self.password_hash {
            Some(stored) => auth::verify(&PasswordHash::from_stored(stored.clone()), password),
            None => false,
        }
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("favorite_color", &self.favorite_color)
            .field("date_added", &self.date_added)
            .field("password_hash", &self.password_hash.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// A user about to be inserted
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub favorite_color: Option<String>,
    pub password_hash: PasswordHash,
}

/// Result of `insert_user`
#[derive(Debug, Clone)]
pub enum InsertOutcome {
    /// A new row was written
    Inserted(User),
    /// A user with this email already existed; nothing was written
    AlreadyExists(User),
}

/// Fields to change on an existing user
///
/// `None` leaves a column untouched. For `favorite_color`, `Some(None)`
/// clears the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserChanges {
    pub name: Option<String>,
    pub email: Option<String>,
    pub favorite_color: Option<Option<String>>,
}

impl UserChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.favorite_color.is_none()
    }
}

/// Get user by email
pub async fn find_user_by_email(pool: &SqlitePool, email: &str) -> Result<Option<User>, StoreError> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, name, email, favorite_color, date_added, password_hash
        FROM users
        WHERE email = ?
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Get user by ID
pub async fn find_user(pool: &SqlitePool, id: i64) -> Result<Option<User>, StoreError> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, name, email, favorite_color, date_added, password_hash
        FROM users
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Insert a user unless one with the same email exists
///
/// Idempotent by email: a second insert with the same email writes nothing
/// and returns the existing row. A concurrent insert that wins the race on
/// the unique index is reported the same way.
pub async fn insert_user(pool: &SqlitePool, new_user: NewUser) -> Result<InsertOutcome, StoreError> {
    if let Some(existing) = find_user_by_email(pool, &new_user.email).await? {
        tracing::debug!("User with email {} already exists (id {})", existing.email, existing.id);
        return Ok(InsertOutcome::AlreadyExists(existing));
    }

    let inserted = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (name, email, favorite_color, date_added, password_hash)
        VALUES (?, ?, ?, ?, ?)
        ON CONFLICT(email) DO NOTHING
        RETURNING id, name, email, favorite_color, date_added, password_hash
        "#,
    )
    .bind(&new_user.name)
    .bind(&new_user.email)
    .bind(&new_user.favorite_color)
    .bind(Utc::now())
    .bind(new_user.password_hash.as_str())
    .fetch_optional(pool)
    .await?;

    match inserted {
        Some(user) => {
            tracing::info!("Created user {} ({})", user.id, user.email);
            Ok(InsertOutcome::Inserted(user))
        }
        None => {
            tracing::debug!("Concurrent insert for {} detected", new_user.email);
            find_user_by_email(pool, &new_user.email)
                .await?
                .map(InsertOutcome::AlreadyExists)
                .ok_or(StoreError::Conflict { field: "email" })
        }
    }
}

/// Apply changes to a user and return the updated row
///
/// # Errors
///
/// * `NotFound` - no user with this id
/// * `Conflict` - the new email belongs to another user
pub async fn update_user(pool: &SqlitePool, id: i64, changes: &UserChanges) -> Result<User, StoreError> {
    if changes.is_empty() {
        return find_user(pool, id).await?.ok_or(StoreError::NotFound);
    }

    let mut query = QueryBuilder::<Sqlite>::new("UPDATE users SET ");
    {
        let mut assignments = query.separated(", ");
        if let Some(name) = &changes.name {
            assignments.push("name = ").push_bind_unseparated(name.clone());
        }
        if let Some(email) = &changes.email {
            assignments.push("email = ").push_bind_unseparated(email.clone());
        }
        if let Some(favorite_color) = &changes.favorite_color {
            assignments
                .push("favorite_color = ")
                .push_bind_unseparated(favorite_color.clone());
        }
    }
    query.push(" WHERE id = ").push_bind(id);
    query.push(" RETURNING id, name, email, favorite_color, date_added, password_hash");

    let user = query
        .build_query_as::<User>()
        .fetch_optional(pool)
        .await
        .map_err(|e| StoreError::from_write(e, "email"))?
        .ok_or(StoreError::NotFound)?;

    tracing::info!("Updated user {}", user.id);
    Ok(user)
}

/// Delete a user and return the deleted row
pub async fn delete_user(pool: &SqlitePool, id: i64) -> Result<User, StoreError> {
    let user = sqlx::query_as::<_, User>(
        r#"
        DELETE FROM users
        WHERE id = ?
        RETURNING id, name, email, favorite_color, date_added, password_hash
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or(StoreError::NotFound)?;

    tracing::info!("Deleted user {} ({})", user.id, user.email);
    Ok(user)
}

/// All users, oldest first
pub async fn list_users(pool: &SqlitePool) -> Result<Vec<User>, StoreError> {
    let users = sqlx::query_as::<_, User>(
        r#"
        SELECT id, name, email, favorite_color, date_added, password_hash
        FROM users
        ORDER BY date_added, id
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(users)
}

/// Number of users, used by tests and startup logging
pub async fn count_users(pool: &SqlitePool) -> Result<i64, StoreError> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await?;
    Ok(count)
}
