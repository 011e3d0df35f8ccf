//! Whole-state endpoints: snapshot, revision, export, reset and the navigation gate.

use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
};

use super::{current_revision, error, success, ApiResult};
use crate::errors::{AppError, AppErrorWithRevision};
use crate::gate::{self, Navigation};
use crate::models::{AppSnapshot, GateQuery, RevisionInfo};
use crate::AppState;

/// File name offered for the exported snapshot.
pub const EXPORT_FILE_NAME: &str = "aria-demo-data.json";

/// GET /api/state - Get the full snapshot.
pub async fn get_state(State(state): State<AppState>) -> ApiResult<AppSnapshot> {
    let revision_id = current_revision(&state).await;
    success(state.store.snapshot().as_ref().clone(), revision_id)
}

/// GET /api/state/revision - Get the current revision info.
pub async fn get_revision(State(state): State<AppState>) -> ApiResult<RevisionInfo> {
    match state.store.revision_info().await {
        Ok(info) => {
            let revision_id = info.revision_id;
            success(info, revision_id)
        }
        Err(e) => error(e, 0),
    }
}

/// GET /api/export - Download the persisted snapshot verbatim.
pub async fn export_state(State(state): State<AppState>) -> Result<Response, AppErrorWithRevision> {
    let revision_id = current_revision(&state).await;

    match state.store.export().await {
        Ok(Some(raw)) => Ok((
            [
                (header::CONTENT_TYPE, "application/json".to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", EXPORT_FILE_NAME),
                ),
            ],
            raw,
        )
            .into_response()),
        Ok(None) => Err(AppErrorWithRevision {
            error: AppError::NotFound("No saved data to export yet".to_string()),
            revision_id,
        }),
        Err(e) => Err(AppErrorWithRevision {
            error: e,
            revision_id,
        }),
    }
}

/// POST /api/reset - Reset everything to the demo defaults.
pub async fn reset_state(State(state): State<AppState>) -> ApiResult<AppSnapshot> {
    let revision_id = current_revision(&state).await;

    match state.store.reset_demo_data().await {
        Ok(applied) => success(applied.snapshot.as_ref().clone(), applied.revision),
        Err(e) => error(e, revision_id),
    }
}

/// GET /api/gate?path=... - Resolve a navigation path against onboarding progress.
pub async fn resolve_gate(
    State(state): State<AppState>,
    Query(query): Query<GateQuery>,
) -> ApiResult<Navigation> {
    let revision_id = current_revision(&state).await;
    let completed = state.store.snapshot().is_onboarding_complete();
    success(gate::resolve(&query.path, completed), revision_id)
}
