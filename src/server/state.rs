//! Application State Management
//!
//! This module defines the application state structure and the `FromRef`
//! implementation that lets handlers extract the database pool directly.
//!
//! Handlers share no in-process mutable state; the pool is the only shared
//! object, and it is internally synchronized and cheap to clone.

use axum::extract::FromRef;
use sqlx::SqlitePool;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db_pool: SqlitePool,
}

/// Allow handlers to extract the pool with `State<SqlitePool>` instead of
/// taking the whole `AppState`.
impl FromRef<AppState> for SqlitePool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}
