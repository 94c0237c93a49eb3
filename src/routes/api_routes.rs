//! API Route Registration
//!
//! This module registers the API endpoints:
//!
//! - `POST /api/v1/users/register` - User registration
//! - `POST /api/v1/users/login` - Login
//! - `POST /api/v1/users/logout` - Logout
//! - `POST /api/v1/posts/create` - Post creation
//!
//! All endpoints are public; there is no authenticated surface.

use axum::Router;

use crate::posts::handlers::create_post;
use crate::server::state::AppState;
use crate::users::handlers::{login, logout, register};

/// Configure API routes
///
/// # Arguments
///
/// * `router` - The router to add routes to
///
/// # Returns
///
/// Router with API routes configured
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        // User endpoints
        .route(
            "/api/v1/users/register",
            axum::routing::post(register),
        )
        .route(
            "/api/v1/users/login",
            axum::routing::post(login),
        )
        .route(
            "/api/v1/users/logout",
            axum::routing::post(logout),
        )
        // Post endpoints
        .route(
            "/api/v1/posts/create",
            axum::routing::post(create_post),
        )
}
