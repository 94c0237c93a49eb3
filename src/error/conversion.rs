//! Error Conversion
//!
//! This module converts `ApiError` values into HTTP responses so handlers
//! can return them directly.
//!
//! # Response Format
//!
//! Error responses are JSON with the following structure:
//! ```json
//! {
//!   "error": "Error message",
//!   "status": 400
//! }
//! ```
//!
//! Internal errors are logged here with their full detail; the response body
//! only carries the generic client message.

use axum::response::{IntoResponse, Json, Response};

use crate::error::types::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal { detail } = &self {
            tracing::error!("Internal error: {}", detail);
        }

        let status = self.status_code();
        let body = serde_json::json!({
            "error": self.client_message(),
            "status": status.as_u16(),
        });

        (status, Json(body)).into_response()
    }
}
