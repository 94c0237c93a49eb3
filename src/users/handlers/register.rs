//! Registration Handler
//!
//! This module implements the user registration handler for
//! POST /api/v1/users/register.
//!
//! # Registration Process
//!
//! 1. Validate that username, email and password are all present
//! 2. Normalize the username and email (trim, lowercase)
//! 3. Validate username and password length bounds
//! 4. Check whether a user with that email already exists
//! 5. Hash the password using bcrypt
//! 6. Create the user in the database
//! 7. Return a sanitized view of the new user
//!
//! # Validation
//!
//! - All three fields must be present and non-empty after trimming
//! - Username must be 1-30 characters after trimming
//! - Password must be 6-50 characters
//! - Email must be unique (no existing user with the same email)
//!
//! # Concurrency
//!
//! The duplicate-email pre-check is advisory: two concurrent registrations
//! can both pass it. The UNIQUE constraints on the users table decide the
//! race, and the losing insert maps to the same conflict error as the
//! pre-check.

use axum::{extract::State, http::StatusCode, response::Json};
use bcrypt::{hash, DEFAULT_COST};
use sqlx::SqlitePool;

use crate::error::ApiError;
use crate::users::handlers::normalize_email;
use crate::users::handlers::types::{RegisterRequest, RegisterResponse, UserView};
use crate::users::store::{create_user, find_user_by_email};

/// Validate username length
///
/// Usernames must be 1-30 characters after trimming.
fn is_valid_username(username: &str) -> bool {
    !username.is_empty() && username.len() <= 30
}

/// Validate password length
///
/// Passwords must be 6-50 characters.
fn is_valid_password(password: &str) -> bool {
    password.len() >= 6 && password.len() <= 50
}

/// Registration handler
///
/// Processes user registration requests: validates the input, checks for a
/// duplicate email, hashes the password and creates the user record.
///
/// # Arguments
///
/// * `State(pool)` - Database connection pool
/// * `Json(request)` - Registration request with username, email, password
///
/// # Returns
///
/// `201 Created` with a confirmation message and a sanitized user view
///
/// # Errors
///
/// * `400 Bad Request` - Missing fields, length bounds, or duplicate email
/// * `500 Internal Server Error` - Hashing or database failure
pub async fn register(
    State(pool): State<SqlitePool>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), ApiError> {
    let username = request.username.as_deref().map(str::trim).unwrap_or("");
    let email = request.email.as_deref().map(str::trim).unwrap_or("");
    let password = request.password.as_deref().unwrap_or("");

    if username.is_empty() || email.is_empty() || password.is_empty() {
        tracing::warn!("Registration rejected: missing fields");
        return Err(ApiError::validation("All fields are required"));
    }

    let username = username.to_lowercase();
    if !is_valid_username(&username) {
        tracing::warn!("Registration rejected: invalid username length");
        return Err(ApiError::validation("Username must be 1-30 characters"));
    }

    if !is_valid_password(password) {
        tracing::warn!("Registration rejected: invalid password length");
        return Err(ApiError::validation("Password must be 6-50 characters"));
    }

    let email = normalize_email(email);
    tracing::info!("Registration request for username: {}, email: {}", username, email);

    if find_user_by_email(&pool, &email).await?.is_some() {
        tracing::warn!("Registration rejected: email already registered: {}", email);
        return Err(ApiError::conflict("User already exists!"));
    }

    let password_hash = hash(password, DEFAULT_COST)?;

    let user = create_user(&pool, &username, &email, &password_hash).await?;

    tracing::info!("User created: {} ({})", user.username, user.email);

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "User registered successfully!".to_string(),
            user: UserView {
                id: user.id,
                email: user.email,
                username: user.username,
            },
        }),
    ))
}
