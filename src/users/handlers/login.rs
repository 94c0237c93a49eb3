//! Login Handler
//!
//! This module implements the login handler for POST /api/v1/users/login.
//!
//! # Authentication Process
//!
//! 1. Validate that email and password are present
//! 2. Normalize the email (trim, lowercase)
//! 3. Look up the user by email
//! 4. Verify the password against the stored bcrypt hash
//! 5. Return a sanitized view of the user
//!
//! No session or token is issued; a successful login only confirms the
//! credentials. An unknown email is 404 and a wrong password for a known
//! email is 400, so the two failure modes are distinguishable.
//!
//! # Security
//!
//! - Passwords are verified with bcrypt, never with string equality
//! - Password material is never logged or returned

use axum::{extract::State, response::Json};
use bcrypt::verify;
use sqlx::SqlitePool;

use crate::error::ApiError;
use crate::users::handlers::normalize_email;
use crate::users::handlers::types::{LoginRequest, LoginResponse};
use crate::users::store::find_user_by_email;

/// Login handler
///
/// # Arguments
///
/// * `State(pool)` - Database connection pool
/// * `Json(request)` - Login request with email and password
///
/// # Returns
///
/// `200 OK` with a confirmation message and the user's id, email, username
///
/// # Errors
///
/// * `400 Bad Request` - Missing fields or wrong password
/// * `404 Not Found` - No user with that email
/// * `500 Internal Server Error` - Database or hash verification failure
pub async fn login(
    State(pool): State<SqlitePool>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let email = request.email.as_deref().map(str::trim).unwrap_or("");
    let password = request.password.as_deref().unwrap_or("");

    if email.is_empty() || password.is_empty() {
        tracing::warn!("Login rejected: missing fields");
        return Err(ApiError::validation("All fields are required"));
    }

    let email = normalize_email(email);
    tracing::info!("Login request for: {}", email);

    let user = find_user_by_email(&pool, &email).await?.ok_or_else(|| {
        tracing::warn!("Login failed: no user with email: {}", email);
        ApiError::not_found("User not found")
    })?;

    let valid = verify(password, &user.password_hash)?;
    if !valid {
        tracing::warn!("Login failed: wrong password for: {}", email);
        return Err(ApiError::Auth);
    }

    tracing::info!("User logged in: {} ({})", user.username, user.email);

    Ok(Json(LoginResponse {
        message: "Login successful!".to_string(),
        id: user.id,
        email: user.email,
        username: user.username,
    }))
}
