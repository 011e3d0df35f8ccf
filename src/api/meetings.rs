//! Meeting endpoints.

use axum::{
    extract::{Path, State},
    Json,
};

use super::{current_revision, respond, success, ApiResult};
use crate::models::{Meeting, UpdateMeetingStatusRequest};
use crate::views::{self, MeetingsView};
use crate::AppState;

/// GET /api/meetings - Upcoming and past meetings.
pub async fn get_meetings(State(state): State<AppState>) -> ApiResult<MeetingsView> {
    let revision_id = current_revision(&state).await;
    success(views::meetings(&state.store.snapshot()), revision_id)
}

/// PUT /api/meetings/:id/status - Set a meeting's status.
pub async fn update_meeting_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateMeetingStatusRequest>,
) -> ApiResult<Option<Meeting>> {
    let revision_id = current_revision(&state).await;
    let result = state.store.update_meeting_status(&id, request.status).await;
    respond(result, revision_id, |s| {
        s.meetings.iter().find(|m| m.id == id).cloned()
    })
}

/// POST /api/meetings/:id/minutes/confirm - Confirm a meeting's minutes.
pub async fn confirm_minutes(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Option<Meeting>> {
    let revision_id = current_revision(&state).await;
    let result = state.store.confirm_minutes(&id).await;
    respond(result, revision_id, |s| {
        s.meetings.iter().find(|m| m.id == id).cloned()
    })
}
