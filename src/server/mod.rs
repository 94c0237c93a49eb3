//! Server Module
//!
//! This module contains the code for initializing and configuring the
//! Axum HTTP server.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs   - Module exports and documentation
//! ├── state.rs - AppState and FromRef implementations
//! ├── config.rs - Configuration loading and pool construction
//! └── init.rs  - Application assembly
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration**: `AppConfig::from_env` reads `DATABASE_URL` and
//!    `SERVER_PORT`
//! 2. **Database**: `connect_database` builds the pool and runs migrations
//! 3. **Application**: `create_app` wires the pool into `AppState` and
//!    assembles the router
//!
//! The application itself takes an already-connected pool; only `main`
//! touches the environment.

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Application assembly
pub mod init;

// Re-export commonly used types
pub use config::{connect_database, AppConfig};
pub use init::create_app;
pub use state::AppState;
