//! Post Model and Database Operations

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

/// Post record as stored in the database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Post {
    /// Unique post ID (UUID, stored as TEXT)
    pub id: String,
    /// Post name, non-empty and trimmed
    pub name: String,
    /// Post description, non-empty and trimmed
    pub description: String,
    /// Age value, within [1, 150]
    pub age: i64,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
}

/// Create a new post
///
/// Generates the id and timestamps and inserts the record. Field
/// validation happens at the handler boundary; the store persists what it
/// is given.
pub async fn create_post(
    pool: &SqlitePool,
    name: &str,
    description: &str,
    age: i64,
) -> Result<Post, sqlx::Error> {
    let id = Uuid::new_v4().to_string();
    let now = Utc::now();

    let post = sqlx::query_as::<_, Post>(
        r#"
        INSERT INTO posts (id, name, description, age, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?, ?)
        RETURNING id, name, description, age, created_at, updated_at
        "#,
    )
    .bind(&id)
    .bind(name)
    .bind(description)
    .bind(age)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(post)
}
