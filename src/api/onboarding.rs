//! Onboarding API endpoints.

use axum::{
    extract::{Path, State},
    Json,
};

use super::{current_revision, respond, success, ApiResult};
use crate::models::{
    ConnectSourceRequest, FirstProjectRequest, PriorityContactRequest, SelectAvatarRequest,
    SetOnboardingStepRequest,
};
use crate::views::{self, OnboardingView};
use crate::AppState;

/// GET /api/onboarding - Get onboarding progress.
pub async fn get_onboarding(State(state): State<AppState>) -> ApiResult<OnboardingView> {
    let revision_id = current_revision(&state).await;
    success(views::onboarding(&state.store.snapshot()), revision_id)
}

/// PUT /api/onboarding/step - Set the current wizard step.
pub async fn set_onboarding_step(
    State(state): State<AppState>,
    Json(request): Json<SetOnboardingStepRequest>,
) -> ApiResult<OnboardingView> {
    let revision_id = current_revision(&state).await;
    let result = state.store.set_onboarding_step(request.step).await;
    respond(result, revision_id, views::onboarding)
}

/// POST /api/onboarding/complete - Finish onboarding.
pub async fn complete_onboarding(State(state): State<AppState>) -> ApiResult<OnboardingView> {
    let revision_id = current_revision(&state).await;
    let result = state.store.complete_onboarding().await;
    respond(result, revision_id, views::onboarding)
}

/// PUT /api/onboarding/avatar - Choose the assistant avatar.
pub async fn select_avatar(
    State(state): State<AppState>,
    Json(request): Json<SelectAvatarRequest>,
) -> ApiResult<OnboardingView> {
    let revision_id = current_revision(&state).await;
    let result = state.store.set_selected_avatar(&request.avatar_id).await;
    respond(result, revision_id, views::onboarding)
}

/// POST /api/onboarding/sources - Record a connected data source.
pub async fn add_connected_source(
    State(state): State<AppState>,
    Json(request): Json<ConnectSourceRequest>,
) -> ApiResult<OnboardingView> {
    let revision_id = current_revision(&state).await;
    let result = state.store.add_connected_source(&request.source_id).await;
    respond(result, revision_id, views::onboarding)
}

/// PUT /api/onboarding/first-project - Record the first project picked.
pub async fn set_first_project(
    State(state): State<AppState>,
    Json(request): Json<FirstProjectRequest>,
) -> ApiResult<OnboardingView> {
    let revision_id = current_revision(&state).await;
    let result = state.store.set_first_project(&request.project_id).await;
    respond(result, revision_id, views::onboarding)
}

/// POST /api/onboarding/priority-contacts - Mark a contact as priority.
pub async fn add_priority_contact(
    State(state): State<AppState>,
    Json(request): Json<PriorityContactRequest>,
) -> ApiResult<OnboardingView> {
    let revision_id = current_revision(&state).await;
    let result = state.store.add_priority_contact(&request.contact_id).await;
    respond(result, revision_id, views::onboarding)
}

/// DELETE /api/onboarding/priority-contacts/:id - Unmark a priority contact.
pub async fn remove_priority_contact(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<OnboardingView> {
    let revision_id = current_revision(&state).await;
    let result = state.store.remove_priority_contact(&id).await;
    respond(result, revision_id, views::onboarding)
}
