//! The whole-application snapshot and its persisted subset.

use serde::{Deserialize, Serialize};

use super::{
    AiSuggestion, AssistantMessage, AssistantMode, Avatar, CalendarEvent, Contact, Document,
    Folder, Meeting, Message, MessageThread, Notification, OnboardingState, Project, Task, User,
    UserSettings,
};

/// Version tag written into the persisted envelope.
pub const PERSISTED_VERSION: u32 = 0;

/// Complete, immutable state of the store at one instant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AppSnapshot {
    pub user: User,
    pub onboarding: OnboardingState,
    pub settings: UserSettings,
    pub current_project_id: Option<String>,
    pub contacts: Vec<Contact>,
    pub messages: Vec<Message>,
    pub threads: Vec<MessageThread>,
    pub calendar: Vec<CalendarEvent>,
    pub tasks: Vec<Task>,
    pub projects: Vec<Project>,
    pub documents: Vec<Document>,
    pub folders: Vec<Folder>,
    pub meetings: Vec<Meeting>,
    pub notifications: Vec<Notification>,
    pub suggestions: Vec<AiSuggestion>,
    pub avatars: Vec<Avatar>,
    pub assistant_messages: Vec<AssistantMessage>,
    pub assistant_mode: AssistantMode,
}

impl AppSnapshot {
    /// Avatar chosen during onboarding or later in settings.
    pub fn selected_avatar_id(&self) -> &str {
        &self.settings.selected_avatar_id
    }

    pub fn is_onboarding_complete(&self) -> bool {
        self.onboarding.completed
    }

    /// Overlay the persisted fields present in `persisted` onto this snapshot.
    ///
    /// Seed-only collections (contacts, projects, documents, folders, avatars,
    /// threads, user) are never taken from storage.
    pub fn merged_with(self, persisted: PersistedState) -> Self {
        Self {
            onboarding: persisted.onboarding.unwrap_or(self.onboarding),
            settings: persisted.settings.unwrap_or(self.settings),
            current_project_id: persisted
                .current_project_id
                .unwrap_or(self.current_project_id),
            messages: persisted.messages.unwrap_or(self.messages),
            tasks: persisted.tasks.unwrap_or(self.tasks),
            notifications: persisted.notifications.unwrap_or(self.notifications),
            suggestions: persisted.suggestions.unwrap_or(self.suggestions),
            meetings: persisted.meetings.unwrap_or(self.meetings),
            calendar: persisted.calendar.unwrap_or(self.calendar),
            assistant_messages: persisted
                .assistant_messages
                .unwrap_or(self.assistant_messages),
            assistant_mode: persisted.assistant_mode.unwrap_or(self.assistant_mode),
            ..self
        }
    }
}

/// The subset of [`AppSnapshot`] that survives a restart.
///
/// Every field is optional on read so a partial snapshot only overrides what it
/// carries. `current_project_id` distinguishes an explicit `null` from absence.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PersistedState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub onboarding: Option<OnboardingState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<UserSettings>,
    #[serde(
        default,
        deserialize_with = "super::common::present",
        skip_serializing_if = "Option::is_none"
    )]
    pub current_project_id: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub messages: Option<Vec<Message>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tasks: Option<Vec<Task>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notifications: Option<Vec<Notification>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<Vec<AiSuggestion>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meetings: Option<Vec<Meeting>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calendar: Option<Vec<CalendarEvent>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assistant_messages: Option<Vec<AssistantMessage>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assistant_mode: Option<AssistantMode>,
}

impl PersistedState {
    /// Capture the persisted fields of a snapshot.
    pub fn capture(snapshot: &AppSnapshot) -> Self {
        Self {
            onboarding: Some(snapshot.onboarding.clone()),
            settings: Some(snapshot.settings.clone()),
            current_project_id: Some(snapshot.current_project_id.clone()),
            messages: Some(snapshot.messages.clone()),
            tasks: Some(snapshot.tasks.clone()),
            notifications: Some(snapshot.notifications.clone()),
            suggestions: Some(snapshot.suggestions.clone()),
            meetings: Some(snapshot.meetings.clone()),
            calendar: Some(snapshot.calendar.clone()),
            assistant_messages: Some(snapshot.assistant_messages.clone()),
            assistant_mode: Some(snapshot.assistant_mode),
        }
    }
}

/// On-disk wrapper around [`PersistedState`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersistedEnvelope {
    pub state: PersistedState,
    #[serde(default)]
    pub version: u32,
}

impl PersistedEnvelope {
    pub fn new(state: PersistedState) -> Self {
        Self {
            state,
            version: PERSISTED_VERSION,
        }
    }
}

/// Revision information for change detection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevisionInfo {
    pub revision_id: i64,
    pub updated_at: Option<String>,
}
