//! Read-only projections of a snapshot, one per client page.

use std::collections::HashSet;

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::models::{
    AiSuggestion, AppSnapshot, CalendarEvent, Document, Folder, Meeting, MeetingStatus, Message,
    Notification, OnboardingState, Priority, Project, Task, TaskStatus,
};

const DASHBOARD_HORIZON_DAYS: i64 = 7;
const DASHBOARD_MAX_MESSAGES: usize = 5;
const DASHBOARD_MAX_TASKS: usize = 8;
const DASHBOARD_MAX_SUGGESTIONS: usize = 3;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub upcoming_events: Vec<CalendarEvent>,
    pub priority_messages: Vec<Message>,
    pub pending_tasks: Vec<Task>,
    pub active_suggestions: Vec<AiSuggestion>,
    pub conflicts: Vec<CalendarEvent>,
}

/// Widgets on the dashboard. Collection order is preserved; lists are truncated, not sorted.
pub fn dashboard(snapshot: &AppSnapshot, now: DateTime<Utc>) -> DashboardView {
    let horizon = now + Duration::days(DASHBOARD_HORIZON_DAYS);

    DashboardView {
        upcoming_events: snapshot
            .calendar
            .iter()
            .filter(|e| e.start <= horizon)
            .cloned()
            .collect(),
        priority_messages: snapshot
            .messages
            .iter()
            .filter(|m| m.priority == Priority::High && !m.is_read)
            .take(DASHBOARD_MAX_MESSAGES)
            .cloned()
            .collect(),
        pending_tasks: snapshot
            .tasks
            .iter()
            .filter(|t| t.status != TaskStatus::Done)
            .take(DASHBOARD_MAX_TASKS)
            .cloned()
            .collect(),
        active_suggestions: snapshot
            .suggestions
            .iter()
            .filter(|s| s.is_pending())
            .take(DASHBOARD_MAX_SUGGESTIONS)
            .cloned()
            .collect(),
        conflicts: snapshot
            .calendar
            .iter()
            .filter(|e| e.is_conflict == Some(true))
            .cloned()
            .collect(),
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectOverview {
    pub project: Project,
    pub tasks: Vec<Task>,
    pub messages: Vec<Message>,
    pub meetings: Vec<Meeting>,
    pub documents: Vec<Document>,
}

/// Everything linked to one project, or `None` if the project does not exist.
pub fn project_overview(snapshot: &AppSnapshot, project_id: &str) -> Option<ProjectOverview> {
    let project = snapshot.projects.iter().find(|p| p.id == project_id)?;
    let in_project = |id: Option<&String>| id.map(String::as_str) == Some(project_id);

    Some(ProjectOverview {
        project: project.clone(),
        tasks: snapshot
            .tasks
            .iter()
            .filter(|t| t.project_id == project_id)
            .cloned()
            .collect(),
        messages: snapshot
            .messages
            .iter()
            .filter(|m| in_project(m.project_id.as_ref()))
            .cloned()
            .collect(),
        meetings: snapshot
            .meetings
            .iter()
            .filter(|m| in_project(m.project_id.as_ref()))
            .cloned()
            .collect(),
        documents: snapshot
            .documents
            .iter()
            .filter(|d| in_project(d.project_id.as_ref()))
            .cloned()
            .collect(),
    })
}

/// The project currently used as cross-page context.
pub fn current_project(snapshot: &AppSnapshot) -> Option<&Project> {
    let id = snapshot.current_project_id.as_deref()?;
    snapshot.projects.iter().find(|p| p.id == id)
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextView {
    pub current_project_id: Option<String>,
    pub current_project: Option<Project>,
}

pub fn context(snapshot: &AppSnapshot) -> ContextView {
    ContextView {
        current_project_id: snapshot.current_project_id.clone(),
        current_project: current_project(snapshot).cloned(),
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderNode {
    #[serde(flatten)]
    pub folder: Folder,
    pub documents: Vec<Document>,
    pub subfolders: Vec<FolderNode>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KnowledgeView {
    pub folders: Vec<FolderNode>,
    /// Documents outside any folder.
    pub unfiled: Vec<Document>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<Document>>,
}

/// Folder tree from the root folders down, plus optional search results.
///
/// Folders only reachable through a parent cycle never appear under a root,
/// and a cycle below a root is cut at the first revisit.
pub fn knowledge(snapshot: &AppSnapshot, search: Option<&str>) -> KnowledgeView {
    let mut visited = HashSet::new();
    let folders = snapshot
        .folders
        .iter()
        .filter(|f| f.parent_id.is_none())
        .filter_map(|f| folder_node(snapshot, f, &mut visited))
        .collect();

    let unfiled = snapshot
        .documents
        .iter()
        .filter(|d| d.folder_id.is_none())
        .cloned()
        .collect();

    let results = search
        .map(str::trim)
        .filter(|needle| !needle.is_empty())
        .map(|needle| {
            snapshot
                .documents
                .iter()
                .filter(|d| d.matches(needle))
                .cloned()
                .collect()
        });

    KnowledgeView {
        folders,
        unfiled,
        results,
    }
}

fn folder_node<'a>(
    snapshot: &'a AppSnapshot,
    folder: &'a Folder,
    visited: &mut HashSet<&'a str>,
) -> Option<FolderNode> {
    if !visited.insert(folder.id.as_str()) {
        return None;
    }

    let subfolders = snapshot
        .folders
        .iter()
        .filter(|f| f.parent_id.as_deref() == Some(folder.id.as_str()))
        .filter_map(|f| folder_node(snapshot, f, visited))
        .collect();

    Some(FolderNode {
        folder: folder.clone(),
        documents: snapshot
            .documents
            .iter()
            .filter(|d| d.folder_id.as_deref() == Some(folder.id.as_str()))
            .cloned()
            .collect(),
        subfolders,
    })
}

#[derive(Debug, Clone, Serialize)]
pub struct MeetingsView {
    pub upcoming: Vec<Meeting>,
    pub past: Vec<Meeting>,
}

pub fn meetings(snapshot: &AppSnapshot) -> MeetingsView {
    let with_status = |status: MeetingStatus| -> Vec<Meeting> {
        snapshot
            .meetings
            .iter()
            .filter(|m| m.status == status)
            .cloned()
            .collect()
    };

    MeetingsView {
        upcoming: with_status(MeetingStatus::Upcoming),
        past: with_status(MeetingStatus::Completed),
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationInbox {
    pub unread_count: usize,
    pub unread: Vec<Notification>,
    pub read: Vec<Notification>,
}

pub fn notification_inbox(snapshot: &AppSnapshot) -> NotificationInbox {
    let (read, unread): (Vec<_>, Vec<_>) = snapshot
        .notifications
        .iter()
        .cloned()
        .partition(|n| n.is_read);

    NotificationInbox {
        unread_count: unread.len(),
        unread,
        read,
    }
}

/// Onboarding progress as the client sees it, with the avatar read from settings.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingView {
    #[serde(flatten)]
    pub state: OnboardingState,
    pub selected_avatar_id: String,
}

pub fn onboarding(snapshot: &AppSnapshot) -> OnboardingView {
    OnboardingView {
        state: snapshot.onboarding.clone(),
        selected_avatar_id: snapshot.selected_avatar_id().to_string(),
    }
}
