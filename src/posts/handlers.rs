//! Post Creation Handler
//!
//! This module implements the post-creation handler for
//! POST /api/v1/posts/create.
//!
//! # Validation
//!
//! - `name` and `description` must be present and non-empty after trimming
//! - `age` must be an integer within [1, 150], boundaries inclusive
//!
//! `age` is accepted as a raw JSON value and checked for integer-ness here,
//! so a string or fractional value is rejected with the same validation
//! error body as a missing field.

use axum::{extract::State, http::StatusCode, response::Json};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::error::ApiError;
use crate::posts::store::create_post as store_create_post;

/// Lowest accepted age value
const MIN_AGE: i64 = 1;
/// Highest accepted age value
const MAX_AGE: i64 = 150;

/// Post creation request
#[derive(Deserialize, Serialize, Debug)]
pub struct CreatePostRequest {
    /// Post name
    pub name: Option<String>,
    /// Post description
    pub description: Option<String>,
    /// Age value; validated as an integer in [1, 150]
    pub age: Option<serde_json::Value>,
}

/// Post creation response
#[derive(Serialize, Debug)]
pub struct CreatePostResponse {
    /// Confirmation message
    pub message: String,
    /// Identifier of the created post
    pub id: String,
}

/// Post creation handler
///
/// # Errors
///
/// * `400 Bad Request` - Missing fields, non-integer age, or age out of range
/// * `500 Internal Server Error` - Database failure
pub async fn create_post(
    State(pool): State<SqlitePool>,
    Json(request): Json<CreatePostRequest>,
) -> Result<(StatusCode, Json<CreatePostResponse>), ApiError> {
    let name = request.name.as_deref().map(str::trim).unwrap_or("");
    let description = request.description.as_deref().map(str::trim).unwrap_or("");

    if name.is_empty() || description.is_empty() || request.age.is_none() {
        tracing::warn!("Post creation rejected: missing fields");
        return Err(ApiError::validation("All fields are required"));
    }

    let age = request
        .age
        .as_ref()
        .and_then(serde_json::Value::as_i64)
        .ok_or_else(|| {
            tracing::warn!("Post creation rejected: non-integer age");
            ApiError::validation("Age must be a number")
        })?;

    if !(MIN_AGE..=MAX_AGE).contains(&age) {
        tracing::warn!("Post creation rejected: age out of range: {}", age);
        return Err(ApiError::validation("Age must be between 1 and 150"));
    }

    let post = store_create_post(&pool, name, description, age).await?;

    tracing::info!("Post created: {} ({})", post.name, post.id);

    Ok((
        StatusCode::CREATED,
        Json(CreatePostResponse {
            message: "Post created successfully!".to_string(),
            id: post.id,
        }),
    ))
}
