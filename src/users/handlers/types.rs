//! User Handler Types
//!
//! Request and response types for the user endpoints.
//!
//! Request fields are `Option` so that an absent JSON key reaches the
//! handler and is rejected with the uniform validation error body instead
//! of a framework-level deserialization rejection. Validation happens at
//! the handler boundary, not in serde.

use serde::{Deserialize, Serialize};

/// Registration request
///
/// Contains the username, email and password for user registration.
#[derive(Deserialize, Serialize, Debug)]
pub struct RegisterRequest {
    /// Desired username (trimmed and lowercased before storage)
    pub username: Option<String>,
    /// Email address (trimmed and lowercased before storage)
    pub email: Option<String>,
    /// Password (hashed before storage, never stored as plaintext)
    pub password: Option<String>,
}

/// Login request
#[derive(Deserialize, Serialize, Debug)]
pub struct LoginRequest {
    /// Email address, the sole lookup key
    pub email: Option<String>,
    /// Password to verify against the stored hash
    pub password: Option<String>,
}

/// Logout request
#[derive(Deserialize, Serialize, Debug)]
pub struct LogoutRequest {
    /// Email address of the account to log out
    pub email: Option<String>,
}

/// Sanitized user view
///
/// The only shape in which user data leaves the server. Password material
/// and internal fields are never part of it.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UserView {
    /// User's unique ID
    pub id: String,
    /// User's email address
    pub email: String,
    /// User's username
    pub username: String,
}

/// Registration response
#[derive(Serialize, Debug)]
pub struct RegisterResponse {
    /// Confirmation message
    pub message: String,
    /// Sanitized view of the created user
    pub user: UserView,
}

/// Login response
#[derive(Serialize, Debug)]
pub struct LoginResponse {
    /// Confirmation message
    pub message: String,
    /// User's unique ID
    pub id: String,
    /// User's email address
    pub email: String,
    /// User's username
    pub username: String,
}

/// Bare confirmation response
#[derive(Serialize, Debug)]
pub struct MessageResponse {
    /// Confirmation message
    pub message: String,
}
