//! Dashboard, project context, message and task endpoints.

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;

use super::{current_revision, error, id_or_new, require, respond, success, ApiResult};
use crate::errors::AppError;
use crate::models::{
    CreateProjectRequest, CreateTaskRequest, CurrentProjectRequest, Message, Project, Task,
    UpdateTaskStatusRequest,
};
use crate::views::{self, ContextView, DashboardView, ProjectOverview};
use crate::AppState;

/// GET /api/dashboard - Dashboard widgets.
pub async fn get_dashboard(State(state): State<AppState>) -> ApiResult<DashboardView> {
    let revision_id = current_revision(&state).await;
    success(
        views::dashboard(&state.store.snapshot(), Utc::now()),
        revision_id,
    )
}

/// GET /api/context - Current project context.
pub async fn get_context(State(state): State<AppState>) -> ApiResult<ContextView> {
    let revision_id = current_revision(&state).await;
    success(views::context(&state.store.snapshot()), revision_id)
}

/// PUT /api/context - Set or clear the current project.
pub async fn set_current_project(
    State(state): State<AppState>,
    Json(request): Json<CurrentProjectRequest>,
) -> ApiResult<ContextView> {
    let revision_id = current_revision(&state).await;
    let result = state.store.set_current_project(request.project_id).await;
    respond(result, revision_id, views::context)
}

/// POST /api/messages/:id/read - Mark a message as read.
pub async fn mark_message_as_read(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Option<Message>> {
    let revision_id = current_revision(&state).await;
    let result = state.store.mark_message_as_read(&id).await;
    respond(result, revision_id, |s| {
        s.messages.iter().find(|m| m.id == id).cloned()
    })
}

/// POST /api/tasks - Add a task.
pub async fn create_task(
    State(state): State<AppState>,
    Json(request): Json<CreateTaskRequest>,
) -> ApiResult<Task> {
    let revision_id = current_revision(&state).await;

    if let Err(e) = require(&request.title, "Title").and(require(&request.project_id, "Project id")) {
        return error(e, revision_id);
    }

    let now = Utc::now();
    let task = Task {
        id: id_or_new(request.id),
        title: request.title,
        description: request.description,
        status: request.status,
        priority: request.priority,
        due_date: request.due_date,
        project_id: request.project_id,
        assignee: request.assignee,
        created_at: now,
        completed_at: None,
        source_type: request.source_type,
        source_id: request.source_id,
    }
    .with_status(request.status, now);

    let result = state.store.add_task(task.clone()).await;
    respond(result, revision_id, |_| task)
}

/// PUT /api/tasks/:id/status - Change a task's status.
pub async fn update_task_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateTaskStatusRequest>,
) -> ApiResult<Option<Task>> {
    let revision_id = current_revision(&state).await;
    let result = state.store.update_task_status(&id, request.status).await;
    respond(result, revision_id, |s| {
        s.tasks.iter().find(|t| t.id == id).cloned()
    })
}

/// POST /api/projects - Add a project.
pub async fn create_project(
    State(state): State<AppState>,
    Json(request): Json<CreateProjectRequest>,
) -> ApiResult<Project> {
    let revision_id = current_revision(&state).await;

    if let Err(e) = require(&request.name, "Name") {
        return error(e, revision_id);
    }

    let project = Project {
        id: id_or_new(request.id),
        name: request.name,
        description: request.description,
        priority: request.priority,
        color: request.color,
        participants: request.participants,
        created_at: Utc::now(),
    };

    let result = state.store.add_project(project.clone()).await;
    respond(result, revision_id, |_| project)
}

/// GET /api/projects/:id - Project with its tasks, messages, meetings and documents.
pub async fn get_project_overview(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<ProjectOverview> {
    let revision_id = current_revision(&state).await;

    match views::project_overview(&state.store.snapshot(), &id) {
        Some(overview) => success(overview, revision_id),
        None => error(
            AppError::NotFound(format!("Project {} not found", id)),
            revision_id,
        ),
    }
}
