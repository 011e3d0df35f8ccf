//! Calendar endpoints.

use axum::{
    extract::{Path, State},
    Json,
};

use super::{current_revision, respond, success, ApiResult};
use crate::models::{CalendarEvent, CalendarEventPatch, ResolveConflictRequest};
use crate::AppState;

/// GET /api/calendar - List calendar events.
pub async fn list_calendar(State(state): State<AppState>) -> ApiResult<Vec<CalendarEvent>> {
    let revision_id = current_revision(&state).await;
    success(state.store.snapshot().calendar.clone(), revision_id)
}

/// PATCH /api/calendar/:id - Shallow-merge fields into an event.
pub async fn update_calendar_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<CalendarEventPatch>,
) -> ApiResult<Option<CalendarEvent>> {
    let revision_id = current_revision(&state).await;
    let result = state.store.update_calendar_event(&id, &patch).await;
    respond(result, revision_id, |s| {
        s.calendar.iter().find(|e| e.id == id).cloned()
    })
}

/// POST /api/calendar/:id/resolve - Move a conflicting event to a new slot.
pub async fn resolve_conflict(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<ResolveConflictRequest>,
) -> ApiResult<Option<CalendarEvent>> {
    let revision_id = current_revision(&state).await;
    let result = state
        .store
        .resolve_conflict(&id, request.start, request.end)
        .await;
    respond(result, revision_id, |s| {
        s.calendar.iter().find(|e| e.id == id).cloned()
    })
}
