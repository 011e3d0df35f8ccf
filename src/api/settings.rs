//! Settings endpoints.

use axum::{extract::State, Json};

use super::{current_revision, respond, success, ApiResult};
use crate::models::{NotificationPreferencesPatch, SelectAvatarRequest, UserSettings};
use crate::AppState;

/// GET /api/settings - Get user settings.
pub async fn get_settings(State(state): State<AppState>) -> ApiResult<UserSettings> {
    let revision_id = current_revision(&state).await;
    success(state.store.snapshot().settings.clone(), revision_id)
}

/// PATCH /api/settings/notifications - Merge notification toggles.
pub async fn update_notification_preferences(
    State(state): State<AppState>,
    Json(patch): Json<NotificationPreferencesPatch>,
) -> ApiResult<UserSettings> {
    let revision_id = current_revision(&state).await;
    let result = state.store.update_notification_preferences(&patch).await;
    respond(result, revision_id, |s| s.settings.clone())
}

/// PUT /api/settings/avatar - Change the assistant avatar.
pub async fn update_avatar(
    State(state): State<AppState>,
    Json(request): Json<SelectAvatarRequest>,
) -> ApiResult<UserSettings> {
    let revision_id = current_revision(&state).await;
    let result = state.store.set_selected_avatar(&request.avatar_id).await;
    respond(result, revision_id, |s| s.settings.clone())
}
