//! User Model and Database Operations
//!
//! This module owns the `users` table. Identifiers are UUIDs stored as
//! TEXT and timestamps are set here, not by callers. Uniqueness of
//! username and email is enforced by the table's UNIQUE constraints, which
//! makes duplicate detection atomic under concurrent inserts; callers map
//! the resulting constraint violation to a conflict error.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

/// User record as stored in the database
///
/// `logged_in` is initialized to false at creation and is not transitioned
/// by any handler; login and logout do not issue or invalidate sessions.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID, stored as TEXT)
    pub id: String,
    /// Username (unique, lowercased, 1-30 chars)
    pub username: String,
    /// Email address (unique, lowercased, sole login/logout lookup key)
    pub email: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    /// Session flag, always false in the current scope
    pub logged_in: bool,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
}

/// Create a new user
///
/// Generates the id and timestamps and inserts the record. A violation of
/// the username or email UNIQUE constraint surfaces as a database error
/// whose `is_unique_violation()` holds; the error layer maps it to a
/// conflict.
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `username` - Normalized (trimmed, lowercased) username
/// * `email` - Normalized (trimmed, lowercased) email
/// * `password_hash` - Bcrypt hash of the password
///
/// # Returns
/// The created user, or the underlying database error
pub async fn create_user(
    pool: &SqlitePool,
    username: &str,
    email: &str,
    password_hash: &str,
) -> Result<User, sqlx::Error> {
    let id = Uuid::new_v4().to_string();
    let now = Utc::now();

    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (id, username, email, password_hash, logged_in, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        RETURNING id, username, email, password_hash, logged_in, created_at, updated_at
        "#,
    )
    .bind(&id)
    .bind(username)
    .bind(email)
    .bind(password_hash)
    .bind(false)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(user)
}

/// Find a user by email
///
/// The caller is responsible for normalizing the email before lookup;
/// the store compares exactly what it is given.
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `email` - Normalized email
///
/// # Returns
/// The user, or `None` if no record matches
pub async fn find_user_by_email(
    pool: &SqlitePool,
    email: &str,
) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, email, password_hash, logged_in, created_at, updated_at
        FROM users
        WHERE email = ?
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn test_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("Failed to open in-memory database");
        sqlx::migrate!().run(&pool).await.expect("Failed to run migrations");
        pool
    }

    #[tokio::test]
    async fn test_create_user_defaults() {
        let pool = test_pool().await;

        let user = create_user(&pool, "alice", "alice@example.com", "$2b$hash")
            .await
            .unwrap();

        assert!(!user.id.is_empty());
        assert_eq!(user.username, "alice");
        assert_eq!(user.email, "alice@example.com");
        assert!(!user.logged_in);
        assert_eq!(user.created_at, user.updated_at);
    }

    #[tokio::test]
    async fn test_find_user_by_email() {
        let pool = test_pool().await;

        create_user(&pool, "alice", "alice@example.com", "$2b$hash")
            .await
            .unwrap();

        let found = find_user_by_email(&pool, "alice@example.com").await.unwrap();
        assert!(found.is_some());
        assert_eq!(found.unwrap().username, "alice");

        let missing = find_user_by_email(&pool, "bob@example.com").await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_duplicate_email_is_unique_violation() {
        let pool = test_pool().await;

        create_user(&pool, "alice", "alice@example.com", "$2b$hash")
            .await
            .unwrap();

        let err = create_user(&pool, "alice2", "alice@example.com", "$2b$hash")
            .await
            .unwrap_err();

        match err {
            sqlx::Error::Database(db_err) => assert!(db_err.is_unique_violation()),
            other => panic!("Expected database error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_duplicate_username_is_unique_violation() {
        let pool = test_pool().await;

        create_user(&pool, "alice", "alice@example.com", "$2b$hash")
            .await
            .unwrap();

        let err = create_user(&pool, "alice", "other@example.com", "$2b$hash")
            .await
            .unwrap_err();

        match err {
            sqlx::Error::Database(db_err) => assert!(db_err.is_unique_violation()),
            other => panic!("Expected database error, got {:?}", other),
        }
    }
}
