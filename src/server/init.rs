//! Application Assembly
//!
//! This module builds the Axum application from an already-connected
//! database pool. Keeping the pool as a parameter means tests and the
//! binary construct the same application.

use axum::Router;
use sqlx::SqlitePool;

use crate::routes::router::create_router;
use crate::server::state::AppState;

/// Create the Axum application
///
/// # Arguments
///
/// * `db_pool` - Connected, migrated database pool
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_app(db_pool: SqlitePool) -> Router {
    tracing::info!("Initializing application");

    let app_state = AppState { db_pool };

    create_router(app_state)
}
