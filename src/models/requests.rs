//! Request bodies accepted by the HTTP API.
//!
//! Create requests take an optional `id`; the API fills in a UUID when it is absent.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::{
    AssistantMode, AssistantRole, Contact, DocumentType, MeetingStatus, MessageSource,
    NotificationType, Priority, TaskSource, TaskStatus,
};

#[derive(Debug, Clone, Deserialize)]
pub struct SetOnboardingStepRequest {
    pub step: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectAvatarRequest {
    pub avatar_id: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectSourceRequest {
    pub source_id: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FirstProjectRequest {
    pub project_id: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriorityContactRequest {
    pub contact_id: String,
}

/// `projectId: null` clears the current project.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentProjectRequest {
    #[serde(default)]
    pub project_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTaskStatusRequest {
    pub status: TaskStatus,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskRequest {
    #[serde(default)]
    pub id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_task_status")]
    pub status: TaskStatus,
    #[serde(default = "default_priority")]
    pub priority: Priority,
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
    pub project_id: String,
    #[serde(default)]
    pub assignee: Option<Contact>,
    #[serde(default)]
    pub source_type: Option<TaskSource>,
    #[serde(default)]
    pub source_id: Option<String>,
}

fn default_task_status() -> TaskStatus {
    TaskStatus::Todo
}

fn default_priority() -> Priority {
    Priority::Medium
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectRequest {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_priority")]
    pub priority: Priority,
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default)]
    pub participants: Vec<Contact>,
}

fn default_color() -> String {
    "#6366F1".to_string()
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFolderRequest {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub parent_id: Option<String>,
    #[serde(default)]
    pub project_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDocumentRequest {
    #[serde(default)]
    pub id: Option<String>,
    pub title: String,
    #[serde(rename = "type")]
    pub doc_type: DocumentType,
    #[serde(default)]
    pub folder_id: Option<String>,
    #[serde(default)]
    pub project_id: Option<String>,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub preview: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub linked_contacts: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResolveConflictRequest {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNotificationRequest {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub kind: NotificationType,
    pub title: String,
    pub message: String,
    #[serde(default)]
    pub action_url: Option<String>,
    #[serde(default)]
    pub context_briefing: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateMeetingStatusRequest {
    pub status: MeetingStatus,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AssistantModeRequest {
    pub mode: AssistantMode,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateAssistantMessageRequest {
    #[serde(default)]
    pub id: Option<String>,
    pub role: AssistantRole,
    pub content: String,
    #[serde(default)]
    pub sources: Option<Vec<MessageSource>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct KnowledgeQuery {
    #[serde(default)]
    pub search: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GateQuery {
    pub path: String,
}
