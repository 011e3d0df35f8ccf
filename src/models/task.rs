//! Task model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Contact, Priority};

/// Workflow state of a task.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Todo,
    InProgress,
    Done,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "todo",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::Done => "done",
        }
    }
}

/// Where a task was extracted from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TaskSource {
    Meeting,
    Email,
    Manual,
}

/// A unit of work belonging to a project.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub status: TaskStatus,
    pub priority: Priority,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    pub project_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<Contact>,
    pub created_at: DateTime<Utc>,
    /// Present iff `status` is `Done`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_type: Option<TaskSource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_id: Option<String>,
}

impl Task {
    /// Copy of this task moved to `status`, stamping or clearing `completed_at`.
    pub fn with_status(&self, status: TaskStatus, now: DateTime<Utc>) -> Self {
        Self {
            status,
            completed_at: (status == TaskStatus::Done).then_some(now),
            ..self.clone()
        }
    }
}
