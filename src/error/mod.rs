//! API Error Module
//!
//! This module defines the error taxonomy used by all HTTP handlers.
//! Every failure a handler can produce is represented here and converted
//! to an HTTP response at the handler boundary; no error propagates past it.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - Error conversion implementations
//! ```
//!
//! # Error Types
//!
//! - `Validation` - Missing or out-of-range input (400)
//! - `Conflict` - Uniqueness violation (400)
//! - `NotFound` - No matching record (404)
//! - `Auth` - Credential mismatch (400)
//! - `Internal` - Store or connectivity failure (500)
//!
//! # HTTP Response Conversion
//!
//! `ApiError` implements `IntoResponse` from Axum, so handlers can return it
//! directly. The response body is JSON: `{"error": message, "status": code}`.
//! Internal errors carry their detail for server-side logging only; clients
//! receive a generic message.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::ApiError;
