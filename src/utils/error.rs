//! Unified error handling
//!
//! [`AppError`] covers every domain error the handlers can produce and
//! converts each one to its wire envelope and status code:
//!
//! | Variant | Status | Body |
//! |---------|--------|------|
//! | `NotFound` | 404 | `{"error": {"Not Found": msg}}` |
//! | `AlreadyExists` | 400 | `{"error": {"exists": "Cafe already exists."}}` |
//! | `MissingField` | 400 | `{"error": {"Missing Field": ...}}` |
//! | `Forbidden` | 403 | `{"error": "No access to this method, wrong api_key"}` |
//! | `Database` | 500 | `{"error": "Internal server error"}` |

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};
use tracing::error;

use crate::db::repository::RepoError;

/// Application error enum
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// No record matched; the message is route-specific
    #[error("Not found: {0}")]
    NotFound(String),

    /// A cafe with the same (name, location) pair already exists
    #[error("Cafe already exists")]
    AlreadyExists,

    /// A required form field was absent (distinct from a false-like value)
    #[error("Missing form field: {0}")]
    MissingField(String),

    /// Wrong or absent api_key on the delete route
    #[error("Wrong api_key")]
    Forbidden,

    /// Store failure; detail is logged, never sent to the client
    #[error("Database error: {0}")]
    Database(String),

    /// Startup or infrastructure failure
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                json!({ "error": { "Not Found": msg } }),
            ),
            AppError::AlreadyExists => (
                StatusCode::BAD_REQUEST,
                json!({ "error": { "exists": "Cafe already exists." } }),
            ),
            AppError::MissingField(field) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": { "Missing Field": format!("The '{field}' field is required.") } }),
            ),
            AppError::Forbidden => (
                StatusCode::FORBIDDEN,
                json!({ "error": "No access to this method, wrong api_key" }),
            ),
            AppError::Database(msg) => {
                error!(target: "database", error = %msg, "Database error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Internal server error" }),
                )
            }
            AppError::Internal(msg) => {
                error!(target: "internal", error = %msg, "Internal error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Internal server error" }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::NotFound(msg),
            RepoError::Database(msg) => AppError::Database(msg),
        }
    }
}

// ========== Helper functions ==========

/// Build the `{"response": {"success": msg}}` envelope used by the
/// mutating routes.
pub fn response_success(msg: &str) -> Json<Value> {
    Json(json!({ "response": { "success": msg } }))
}
