//! Error types for the sticker-mood service.
//!
//! The split matters here: query building propagates errors up to the
//! endpoint layer (HTTP 500), while sticker fetching never does — the
//! giphy-search crate degrades to a placeholder result instead. Only the
//! propagating side lives in this module.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// Errors raised by the query-building pipeline.
///
/// The built-in lexicon scorer is infallible, but the capability seam is
/// fallible by contract so alternative scorers (remote models, FFI
/// libraries) can report failures without changing the pipeline.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    /// The emotion-scoring capability failed on this input.
    #[error("emotion scoring failed: {0}")]
    Scoring(String),
}

/// Top-level error type for the service.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Query building failed; surfaces as HTTP 500.
    #[error("failed to detect emotion: {0}")]
    Query(#[from] QueryError),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// I/O error (listener bind, address lookup).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        tracing::error!(error = %message, "request failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "detail": message })),
        )
            .into_response()
    }
}

/// Convenience result type.
pub type Result<T> = std::result::Result<T, ServiceError>;
