//! Notification and suggestion endpoints.

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;

use super::{current_revision, error, id_or_new, require, respond, success, ApiResult};
use crate::models::{AiSuggestion, CreateNotificationRequest, Notification};
use crate::views::{self, NotificationInbox};
use crate::AppState;

/// GET /api/notifications - Unread and read notifications.
pub async fn get_notifications(State(state): State<AppState>) -> ApiResult<NotificationInbox> {
    let revision_id = current_revision(&state).await;
    success(views::notification_inbox(&state.store.snapshot()), revision_id)
}

/// POST /api/notifications - Push a notification to the top of the feed.
pub async fn create_notification(
    State(state): State<AppState>,
    Json(request): Json<CreateNotificationRequest>,
) -> ApiResult<Notification> {
    let revision_id = current_revision(&state).await;

    if let Err(e) = require(&request.title, "Title") {
        return error(e, revision_id);
    }

    let notification = Notification {
        id: id_or_new(request.id),
        kind: request.kind,
        title: request.title,
        message: request.message,
        timestamp: Utc::now(),
        is_read: false,
        action_url: request.action_url,
        context_briefing: request.context_briefing,
    };

    let result = state.store.add_notification(notification.clone()).await;
    respond(result, revision_id, |_| notification)
}

/// POST /api/notifications/:id/read - Mark a notification as read.
pub async fn mark_notification_as_read(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Option<Notification>> {
    let revision_id = current_revision(&state).await;
    let result = state.store.mark_notification_as_read(&id).await;
    respond(result, revision_id, |s| {
        s.notifications.iter().find(|n| n.id == id).cloned()
    })
}

/// GET /api/suggestions - List suggestions still in the collection.
pub async fn list_suggestions(State(state): State<AppState>) -> ApiResult<Vec<AiSuggestion>> {
    let revision_id = current_revision(&state).await;
    success(state.store.snapshot().suggestions.clone(), revision_id)
}

/// POST /api/suggestions/:id/accept - Accept a suggestion.
pub async fn accept_suggestion(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Option<AiSuggestion>> {
    let revision_id = current_revision(&state).await;
    let result = state.store.accept_suggestion(&id).await;
    respond(result, revision_id, |s| {
        s.suggestions.iter().find(|x| x.id == id).cloned()
    })
}

/// POST /api/suggestions/:id/reject - Reject and drop a suggestion.
pub async fn reject_suggestion(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Vec<AiSuggestion>> {
    let revision_id = current_revision(&state).await;
    let result = state.store.reject_suggestion(&id).await;
    respond(result, revision_id, |s| s.suggestions.clone())
}
