//! Notification model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NotificationType {
    MeetingReminder,
    CriticalMessage,
    TaskDeadline,
    TaskCompleted,
    DailySummary,
}

/// An entry in the notification feed, kept most-recent-first.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NotificationType,
    pub title: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub is_read: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_briefing: Option<String>,
}

impl Notification {
    /// Notification raised when a task is moved to done.
    pub fn task_completed(task_title: &str, now: DateTime<Utc>) -> Self {
        Self {
            id: format!("n-{}", now.timestamp_millis()),
            kind: NotificationType::TaskCompleted,
            title: "Task Completed".to_string(),
            message: format!("\"{}\" has been completed", task_title),
            timestamp: now,
            is_read: false,
            action_url: None,
            context_briefing: None,
        }
    }
}
