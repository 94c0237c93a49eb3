//! API Error Types
//!
//! This module defines the error types returned by HTTP handlers.
//! Each variant maps to a fixed HTTP status code and a client-facing
//! message. The mapping lives in `status_code()` and `client_message()`;
//! the `IntoResponse` implementation in `conversion.rs` uses both.

use axum::http::StatusCode;
use thiserror::Error;

/// Errors produced by request handlers
///
/// Each variant represents one failure class with a fixed status mapping:
///
/// - `Validation` - 400 Bad Request
/// - `Conflict` - 400 Bad Request
/// - `NotFound` - 404 Not Found
/// - `Auth` - 400 Bad Request
/// - `Internal` - 500 Internal Server Error
///
/// `NotFound` maps to 404 for every operation, including login. Internal
/// errors keep their detail for logging; `client_message()` never exposes it.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing, empty, or out-of-range input
    #[error("Validation error: {message}")]
    Validation {
        /// Human-readable description of the rejected input
        message: String,
    },

    /// A uniqueness constraint would be violated
    #[error("Conflict: {message}")]
    Conflict {
        /// Human-readable conflict description
        message: String,
    },

    /// No record matched the lookup key
    #[error("Not found: {message}")]
    NotFound {
        /// Human-readable description of what was missing
        message: String,
    },

    /// Password did not match the stored credential material
    #[error("Invalid credentials")]
    Auth,

    /// Store or connectivity failure
    ///
    /// The detail is logged server-side and never returned to the client.
    #[error("Internal error: {detail}")]
    Internal {
        /// Underlying error text, for logs only
        detail: String,
    },
}

impl ApiError {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    /// Create a not-found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create an internal error from an underlying failure
    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal {
            detail: detail.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::Conflict { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Auth => StatusCode::BAD_REQUEST,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the message that is safe to return to the client
    ///
    /// Internal errors collapse to a generic message; the underlying detail
    /// is only available through `Display` for logging.
    pub fn client_message(&self) -> String {
        match self {
            Self::Validation { message } => message.clone(),
            Self::Conflict { message } => message.clone(),
            Self::NotFound { message } => message.clone(),
            Self::Auth => "Invalid credentials".to_string(),
            Self::Internal { .. } => "Internal server error".to_string(),
        }
    }
}

/// Map store failures onto the API taxonomy
///
/// A unique-constraint violation means a concurrent request inserted the
/// same username or email first; the database is the arbiter of that race,
/// so the violation surfaces as a `Conflict`. Everything else is an
/// `Internal` error.
impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_unique_violation() {
                return ApiError::conflict("User already exists!");
            }
        }
        ApiError::internal(err.to_string())
    }
}

impl From<bcrypt::BcryptError> for ApiError {
    fn from(err: bcrypt::BcryptError) -> Self {
        ApiError::internal(format!("Password hashing failed: {}", err))
    }
}
