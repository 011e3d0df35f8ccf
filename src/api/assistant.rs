//! Assistant conversation endpoints.

use axum::{extract::State, Json};
use chrono::Utc;

use super::{current_revision, id_or_new, respond, success, ApiResult};
use crate::models::{
    AssistantMessage, AssistantMode, AssistantModeRequest, CreateAssistantMessageRequest,
};
use crate::AppState;

/// GET /api/assistant/messages - The conversation log.
pub async fn list_assistant_messages(
    State(state): State<AppState>,
) -> ApiResult<Vec<AssistantMessage>> {
    let revision_id = current_revision(&state).await;
    success(state.store.snapshot().assistant_messages.clone(), revision_id)
}

/// POST /api/assistant/messages - Append to the conversation log.
pub async fn add_assistant_message(
    State(state): State<AppState>,
    Json(request): Json<CreateAssistantMessageRequest>,
) -> ApiResult<AssistantMessage> {
    let revision_id = current_revision(&state).await;

    let message = AssistantMessage {
        id: id_or_new(request.id),
        role: request.role,
        content: request.content,
        timestamp: Utc::now(),
        sources: request.sources,
    };

    let result = state.store.add_assistant_message(message.clone()).await;
    respond(result, revision_id, |_| message)
}

/// DELETE /api/assistant/messages - Empty the conversation log.
pub async fn clear_assistant_messages(
    State(state): State<AppState>,
) -> ApiResult<Vec<AssistantMessage>> {
    let revision_id = current_revision(&state).await;
    let result = state.store.clear_assistant_messages().await;
    respond(result, revision_id, |s| s.assistant_messages.clone())
}

/// PUT /api/assistant/mode - Switch between chat and avatar presentation.
pub async fn set_assistant_mode(
    State(state): State<AppState>,
    Json(request): Json<AssistantModeRequest>,
) -> ApiResult<AssistantMode> {
    let revision_id = current_revision(&state).await;
    let result = state.store.set_assistant_mode(request.mode).await;
    respond(result, revision_id, |s| s.assistant_mode)
}
