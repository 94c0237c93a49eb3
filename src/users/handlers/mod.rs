//! User Handlers Module
//!
//! This module contains the HTTP handlers for the user endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Handler exports, email normalization
//! ├── types.rs    - Request and response types
//! ├── register.rs - User registration handler
//! ├── login.rs    - Login handler
//! └── logout.rs   - Logout handler
//! ```
//!
//! # Handlers
//!
//! - **`register`** - POST /api/v1/users/register
//! - **`login`** - POST /api/v1/users/login
//! - **`logout`** - POST /api/v1/users/logout

/// Request and response types
pub mod types;

/// Registration handler
pub mod register;

/// Login handler
pub mod login;

/// Logout handler
pub mod logout;

// Re-export handlers
pub use login::login;
pub use logout::logout;
pub use register::register;

// Re-export commonly used types
pub use types::{LoginRequest, LogoutRequest, RegisterRequest, UserView};

/// Normalize an email for storage or lookup
///
/// Emails are trimmed and lowercased before every store operation so that
/// lookups are case-insensitive and a re-registration with different casing
/// hits the same record.
pub(crate) fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
