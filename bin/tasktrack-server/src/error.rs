//! Unified server error type.
//!
//! Every handler returns `Result<T, ServerError>`, which implements
//! [`axum::response::IntoResponse`] so errors are automatically converted
//! to a JSON-body HTTP response with an appropriate status code.
//!
//! Internal errors (Database) are logged with full detail but only a generic
//! message is returned to the caller so that file paths, SQL, or other
//! implementation details never leak to clients.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// All errors that can occur in the tasktrack-server request lifecycle.
#[derive(Debug, Error)]
pub enum ServerError {
    /// A payload failed validation before reaching the store.
    #[error("invalid input: {0}")]
    Invalid(#[from] tasktrack_types::InvalidTask),

    /// The caller sent a malformed or undeserializable request body.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// The caller referenced a task that does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// Propagated from the SQLite (or other) store.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, client_message) = match &self {
            // Client-facing errors: expose the message directly.
            ServerError::Invalid(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            ServerError::BadRequest(m) => (StatusCode::BAD_REQUEST, m.clone()),
            ServerError::NotFound(m) => (StatusCode::NOT_FOUND, m.clone()),

            // Storage faults: log the full detail, keep the response generic.
            ServerError::Database(e) => {
                error!(error = %e, "database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_owned(),
                )
            }
        };
        (status, Json(json!({ "error": client_message }))).into_response()
    }
}
