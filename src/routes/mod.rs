//! Route Configuration Module
//!
//! This module configures all HTTP routes for the server. Routing is pure
//! dispatch: every route maps to exactly one handler and carries no logic
//! of its own.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs        - Module exports and documentation
//! ├── router.rs     - Main router creation
//! └── api_routes.rs - API endpoint registration
//! ```

/// Main router creation
pub mod router;

/// API endpoint registration
pub mod api_routes;

// Re-export commonly used functions
pub use router::create_router;
