//! Error handling for the Aria backend.
//!
//! Store operations only fail on local storage; the API adds lookup and input
//! validation failures on top.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Machine-readable error codes carried in the error envelope.
pub mod codes {
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
    pub const STORAGE_ERROR: &str = "STORAGE_ERROR";
    pub const SNAPSHOT_ENCODING_ERROR: &str = "SNAPSHOT_ENCODING_ERROR";
}

#[derive(Debug)]
pub enum AppError {
    /// A view was asked for an entity that does not exist
    NotFound(String),
    /// Request body failed a field check
    Validation(String),
    /// Reading or writing the key-value table failed
    Storage(String),
    /// The snapshot could not be turned into its persisted JSON form
    SnapshotEncoding(String),
}

impl AppError {
    fn parts(&self) -> (StatusCode, &'static str, &str) {
        match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, codes::NOT_FOUND, msg),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, codes::VALIDATION_ERROR, msg),
            AppError::Storage(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, codes::STORAGE_ERROR, msg)
            }
            AppError::SnapshotEncoding(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                codes::SNAPSHOT_ENCODING_ERROR,
                msg,
            ),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        self.parts().0
    }

    pub fn error_code(&self) -> &'static str {
        self.parts().1
    }

    pub fn message(&self) -> &str {
        self.parts().2
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error_code(), self.message())
    }
}

impl std::error::Error for AppError {}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        tracing::error!(error = %err, "Local storage failure");
        AppError::Storage(format!("Local storage unavailable: {}", err))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!(error = %err, "Snapshot encoding failure");
        AppError::SnapshotEncoding(format!("Failed to encode snapshot: {}", err))
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetails {
    pub code: String,
    pub message: String,
}

/// Failure envelope; `revision_id` is the storage revision before the failed call.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub success: bool,
    pub error: ErrorDetails,
    pub revision_id: i64,
}

impl ErrorResponse {
    pub fn new(error: &AppError, revision_id: i64) -> Self {
        Self {
            success: false,
            error: ErrorDetails {
                code: error.error_code().to_string(),
                message: error.message().to_string(),
            },
            revision_id,
        }
    }
}

/// An `AppError` paired with the revision the client last saw.
pub struct AppErrorWithRevision {
    pub error: AppError,
    pub revision_id: i64,
}

impl IntoResponse for AppErrorWithRevision {
    fn into_response(self) -> Response {
        let body = ErrorResponse::new(&self.error, self.revision_id);
        (self.error.status_code(), Json(body)).into_response()
    }
}
