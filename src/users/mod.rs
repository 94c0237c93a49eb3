//! Users Module
//!
//! This module handles user registration, login, and logout.
//! It owns the credential store and the HTTP handlers built on top of it.
//!
//! # Module Structure
//!
//! ```text
//! users/
//! ├── mod.rs          - Module exports and documentation
//! ├── store.rs        - User model and database operations
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports, email normalization
//!     ├── types.rs    - Request/response types
//!     ├── register.rs - User registration handler
//!     ├── login.rs    - Login handler
//!     └── logout.rs   - Logout handler
//! ```
//!
//! # Flow
//!
//! 1. **Register**: validate input, check for a duplicate email, hash the
//!    password with bcrypt, insert, return a sanitized view
//! 2. **Login**: look up by normalized email, verify the password against
//!    the stored bcrypt hash, return a sanitized view
//! 3. **Logout**: look up by normalized email, confirm. No session state
//!    exists on the server, so nothing is mutated
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt before storage and verified with
//!   bcrypt on login; plaintext never reaches the database
//! - Password material is never serialized into any response
//! - Email is lowercased and trimmed before every store operation, so
//!   lookups are case-insensitive

/// User model and database operations
pub mod store;

/// HTTP handlers for user endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::{login, logout, register};
pub use store::User;
