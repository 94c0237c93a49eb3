//! Router Configuration
//!
//! This module assembles the Axum router: API routes, request tracing,
//! and a JSON 404 fallback for unmatched paths.

use axum::{http::StatusCode, response::Json, Router};
use tower_http::trace::TraceLayer;

use crate::routes::api_routes::configure_api_routes;
use crate::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state containing the database pool
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(app_state: AppState) -> Router {
    let router = Router::new();

    // API routes
    let router = configure_api_routes(router);

    // Fallback handler for unknown paths
    let router = router.fallback(fallback);

    router
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

/// Fallback handler returning a JSON 404 body
async fn fallback() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({
            "error": "Not found",
            "status": 404,
        })),
    )
}
