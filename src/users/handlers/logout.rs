//! Logout Handler
//!
//! This module implements the logout handler for POST /api/v1/users/logout.
//!
//! There is no server-side session or token state, so logout is an
//! existence check followed by a confirmation. The `logged_in` flag on the
//! user record is not touched.

use axum::{extract::State, response::Json};
use sqlx::SqlitePool;

use crate::error::ApiError;
use crate::users::handlers::normalize_email;
use crate::users::handlers::types::{LogoutRequest, MessageResponse};
use crate::users::store::find_user_by_email;

/// Logout handler
///
/// # Errors
///
/// * `400 Bad Request` - Missing email
/// * `404 Not Found` - No user with that email
/// * `500 Internal Server Error` - Database failure
pub async fn logout(
    State(pool): State<SqlitePool>,
    Json(request): Json<LogoutRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let email = request.email.as_deref().map(str::trim).unwrap_or("");

    if email.is_empty() {
        tracing::warn!("Logout rejected: missing email");
        return Err(ApiError::validation("Email is required"));
    }

    let email = normalize_email(email);

    let user = find_user_by_email(&pool, &email).await?.ok_or_else(|| {
        tracing::warn!("Logout failed: no user with email: {}", email);
        ApiError::not_found("User not found")
    })?;

    tracing::info!("User logged out: {}", user.email);

    Ok(Json(MessageResponse {
        message: "User logged out successfully!".to_string(),
    }))
}
