//! Postly - Main Library
//!
//! Postly is a small REST backend for user accounts and posts, built on
//! Axum with SQLite persistence via sqlx.
//!
//! # Overview
//!
//! The library provides:
//! - User registration, login, and logout endpoints
//! - Post creation endpoint
//! - A uniform JSON error surface for every failure
//!
//! # Module Structure
//!
//! - **`server`** - Application state, configuration, and assembly
//! - **`routes`** - Route table (pure dispatch)
//! - **`users`** - Credential store and user handlers
//! - **`posts`** - Post store and post-creation handler
//! - **`error`** - Error taxonomy and response conversion
//!
//! # Request Flow
//!
//! The router dispatches each request to exactly one handler. The handler
//! validates the body against an explicit schema, performs a single store
//! interaction, and shapes the response. Store uniqueness constraints are
//! the arbiter of concurrent duplicate registrations.
//!
//! # Example
//!
//! ```rust,no_run
//! use postly::server::{connect_database, create_app};
//!
//! # async fn example() -> Result<(), sqlx::Error> {
//! let pool = connect_database("sqlite::memory:").await?;
//! let app = create_app(pool);
//! // Use app with axum::serve
//! # Ok(())
//! # }
//! ```

/// Error taxonomy and response conversion
pub mod error;

/// Post store and handler
pub mod posts;

/// Route configuration
pub mod routes;

/// Server setup and state
pub mod server;

/// Credential store and user handlers
pub mod users;
