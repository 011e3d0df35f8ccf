//! Knowledge base endpoints.

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::Utc;

use super::{current_revision, error, id_or_new, require, respond, success, ApiResult};
use crate::errors::AppError;
use crate::models::{
    AppSnapshot, CreateDocumentRequest, CreateFolderRequest, Document, Folder, KnowledgeQuery,
};
use crate::views::{self, KnowledgeView};
use crate::AppState;

fn ensure_folder_exists(snapshot: &AppSnapshot, folder_id: Option<&str>) -> Result<(), AppError> {
    match folder_id {
        Some(id) if !snapshot.folders.iter().any(|f| f.id == id) => Err(AppError::Validation(
            format!("Folder {} does not exist", id),
        )),
        _ => Ok(()),
    }
}

/// GET /api/knowledge?search=... - Folder tree and optional document search.
pub async fn get_knowledge(
    State(state): State<AppState>,
    Query(query): Query<KnowledgeQuery>,
) -> ApiResult<KnowledgeView> {
    let revision_id = current_revision(&state).await;
    let view = views::knowledge(&state.store.snapshot(), query.search.as_deref());
    success(view, revision_id)
}

/// POST /api/folders - Add a folder.
pub async fn create_folder(
    State(state): State<AppState>,
    Json(request): Json<CreateFolderRequest>,
) -> ApiResult<Folder> {
    let revision_id = current_revision(&state).await;

    let snapshot = state.store.snapshot();
    let checked = require(&request.name, "Name")
        .and_then(|_| ensure_folder_exists(&snapshot, request.parent_id.as_deref()));
    if let Err(e) = checked {
        return error(e, revision_id);
    }

    let folder = Folder {
        id: id_or_new(request.id),
        name: request.name,
        parent_id: request.parent_id,
        project_id: request.project_id,
    };

    let result = state.store.add_folder(folder.clone()).await;
    respond(result, revision_id, |_| folder)
}

/// POST /api/documents - Add a document.
pub async fn create_document(
    State(state): State<AppState>,
    Json(request): Json<CreateDocumentRequest>,
) -> ApiResult<Document> {
    let revision_id = current_revision(&state).await;

    let snapshot = state.store.snapshot();
    let checked = require(&request.title, "Title")
        .and_then(|_| ensure_folder_exists(&snapshot, request.folder_id.as_deref()));
    if let Err(e) = checked {
        return error(e, revision_id);
    }

    let document = Document {
        id: id_or_new(request.id),
        title: request.title,
        doc_type: request.doc_type,
        folder_id: request.folder_id,
        project_id: request.project_id,
        last_updated: Utc::now(),
        size: request.size,
        preview: request.preview,
        tags: request.tags,
        linked_contacts: request.linked_contacts,
    };

    let result = state.store.add_document(document.clone()).await;
    respond(result, revision_id, |_| document)
}
