//! Server Configuration
//!
//! This module loads configuration from environment variables and builds
//! the database connection pool.
//!
//! # Configuration Sources
//!
//! - `DATABASE_URL` - sqlx connection string, defaults to a local SQLite
//!   file created on demand
//! - `SERVER_PORT` - listen port, defaults to 3000
//!
//! Migrations are embedded at compile time and run every time a pool is
//! built, so a fresh database is usable immediately.

use sqlx::SqlitePool;

/// Default database location when `DATABASE_URL` is not set
const DEFAULT_DATABASE_URL: &str = "sqlite:postly.db?mode=rwc";

/// Default listen port when `SERVER_PORT` is not set or unparsable
const DEFAULT_PORT: u16 = 3000;

/// Server configuration loaded from the environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Database connection string
    pub database_url: String,
    /// Listen port
    pub port: u16,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Missing or unparsable values fall back to defaults; configuration
    /// never aborts startup.
    pub fn from_env() -> Self {
        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

        let port = std::env::var("SERVER_PORT")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        Self { database_url, port }
    }
}

/// Build the database connection pool and run migrations
///
/// # Arguments
/// * `database_url` - sqlx connection string
///
/// # Errors
///
/// Fails if the database cannot be reached or a migration fails. Unlike
/// configuration loading, a database failure aborts startup: every handler
/// needs the store.
pub async fn connect_database(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    tracing::info!("Connecting to database");

    let pool = SqlitePool::connect(database_url).await?;

    tracing::info!("Running database migrations");
    sqlx::migrate!().run(&pool).await?;

    tracing::info!("Database ready");
    Ok(pool)
}
