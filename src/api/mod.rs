//! REST API module.
//!
//! One endpoint per store operation, plus the page views and the navigation gate.

mod assistant;
mod calendar;
mod inbox;
mod knowledge;
mod meetings;
mod onboarding;
mod settings;
mod state;
mod workspace;

pub use assistant::*;
pub use calendar::*;
pub use inbox::*;
pub use knowledge::*;
pub use meetings::*;
pub use onboarding::*;
pub use settings::*;
pub use state::*;
pub use workspace::*;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::errors::{AppError, AppErrorWithRevision};
use crate::models::AppSnapshot;
use crate::store::Applied;
use crate::AppState;

/// Success response envelope.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
    pub revision_id: i64,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn new(data: T, revision_id: i64) -> Self {
        Self {
            success: true,
            data,
            revision_id,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Response type that can be either success or error.
pub type ApiResult<T> = Result<ApiResponse<T>, AppErrorWithRevision>;

/// Create a successful API response.
pub fn success<T: Serialize>(data: T, revision_id: i64) -> ApiResult<T> {
    Ok(ApiResponse::new(data, revision_id))
}

/// Create an error API response.
pub fn error<T: Serialize>(err: AppError, revision_id: i64) -> ApiResult<T> {
    Err(AppErrorWithRevision {
        error: err,
        revision_id,
    })
}

/// Current storage revision, 0 if it cannot be read.
pub async fn current_revision(state: &AppState) -> i64 {
    state.store.revision().await.unwrap_or(0)
}

/// Map a store result through `view`, attaching the revision written by the mutation.
pub fn respond<T, F>(
    result: Result<Applied, AppError>,
    revision_id: i64,
    view: F,
) -> ApiResult<T>
where
    T: Serialize,
    F: FnOnce(&AppSnapshot) -> T,
{
    match result {
        Ok(applied) => success(view(&applied), applied.revision),
        Err(e) => error(e, revision_id),
    }
}

/// Use the caller's id or mint a fresh one.
fn id_or_new(id: Option<String>) -> String {
    id.filter(|id| !id.trim().is_empty())
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string())
}

fn require(value: &str, field: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{} is required", field)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_or_new() {
        assert_eq!(id_or_new(Some("t-9".to_string())), "t-9");
        assert_eq!(id_or_new(Some("  ".to_string())).len(), 36);
        assert_eq!(id_or_new(None).len(), 36);
    }

    #[test]
    fn test_require() {
        assert!(require("Board deck", "Title").is_ok());
        let err = require(" ", "Title").unwrap_err();
        assert_eq!(err.message(), "Title is required");
    }
}
