//! Application state store.
//!
//! Single source of truth for every domain entity. Each operation derives a new
//! snapshot from the current one, writes the persisted subset to local storage,
//! and only then publishes it to readers and subscribers. Operations naming an
//! id that does not exist leave the state unchanged and do not fail.

use std::ops::Deref;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::{watch, Mutex};

use crate::db::Repository;
use crate::errors::AppError;
use crate::models::{
    AppSnapshot, AssistantMessage, AssistantMode, CalendarEventPatch, Document, Folder,
    MeetingStatus, Notification, NotificationPreferencesPatch, PersistedEnvelope,
    PersistedState, Project, RevisionInfo, Task, TaskStatus,
};
use crate::seed::Seed;

/// Name of the local storage entry holding the persisted snapshot.
pub const STORAGE_KEY: &str = "exec-assistant-storage";

/// Title used in the completion notice when the task id is unknown.
const UNKNOWN_TASK_TITLE: &str = "Unknown task";

/// A published snapshot and the storage revision that holds it.
#[derive(Debug, Clone)]
pub struct Applied {
    pub snapshot: Arc<AppSnapshot>,
    pub revision: i64,
}

impl Deref for Applied {
    type Target = AppSnapshot;

    fn deref(&self) -> &AppSnapshot {
        &self.snapshot
    }
}

pub struct Store {
    repo: Repository,
    seed: Arc<AppSnapshot>,
    state: watch::Sender<Arc<AppSnapshot>>,
    write_lock: Mutex<()>,
}

impl Store {
    /// Build the store from the seed, overlaying whatever local storage holds.
    pub async fn open(repo: Repository, seed: &Seed) -> Result<Self, AppError> {
        let seed = Arc::new(seed.snapshot());

        let initial = match repo.get(STORAGE_KEY).await? {
            Some(raw) => match serde_json::from_str::<PersistedEnvelope>(&raw) {
                Ok(envelope) => {
                    tracing::info!("Rehydrated state from local storage");
                    seed.as_ref().clone().merged_with(envelope.state)
                }
                Err(e) => {
                    tracing::warn!("Ignoring unreadable stored snapshot: {}", e);
                    seed.as_ref().clone()
                }
            },
            None => {
                tracing::info!("No stored snapshot, starting from seed data");
                seed.as_ref().clone()
            }
        };

        let (state, _) = watch::channel(Arc::new(initial));

        Ok(Self {
            repo,
            seed,
            state,
            write_lock: Mutex::new(()),
        })
    }

    /// Current snapshot.
    pub fn snapshot(&self) -> Arc<AppSnapshot> {
        self.state.borrow().clone()
    }

    /// Receiver notified with every published snapshot.
    pub fn subscribe(&self) -> watch::Receiver<Arc<AppSnapshot>> {
        self.state.subscribe()
    }

    pub async fn revision(&self) -> Result<i64, AppError> {
        self.repo.get_revision_id(STORAGE_KEY).await
    }

    pub async fn revision_info(&self) -> Result<RevisionInfo, AppError> {
        self.repo.get_revision_info(STORAGE_KEY).await
    }

    /// The stored snapshot text exactly as written, if anything was written yet.
    pub async fn export(&self) -> Result<Option<String>, AppError> {
        self.repo.get(STORAGE_KEY).await
    }

    async fn apply<F>(&self, op: &'static str, f: F) -> Result<Applied, AppError>
    where
        F: FnOnce(&AppSnapshot) -> AppSnapshot,
    {
        let _guard = self.write_lock.lock().await;

        let current = self.snapshot();
        let next = Arc::new(f(&current));

        let envelope = PersistedEnvelope::new(PersistedState::capture(&next));
        let raw = serde_json::to_string(&envelope)?;
        let revision = self.repo.put(STORAGE_KEY, &raw).await?;

        self.state.send_replace(next.clone());
        tracing::debug!(op, revision, "Store mutation applied");

        Ok(Applied {
            snapshot: next,
            revision,
        })
    }

    // ==================== ONBOARDING ====================

    pub async fn set_onboarding_step(&self, step: u32) -> Result<Applied, AppError> {
        self.apply("set_onboarding_step", |s| {
            let mut next = s.clone();
            next.onboarding.current_step = step;
            next
        })
        .await
    }

    /// One-way: nothing in the store sets `completed` back to false.
    pub async fn complete_onboarding(&self) -> Result<Applied, AppError> {
        self.apply("complete_onboarding", |s| {
            let mut next = s.clone();
            next.onboarding.completed = true;
            next
        })
        .await
    }

    pub async fn set_selected_avatar(&self, avatar_id: &str) -> Result<Applied, AppError> {
        self.apply("set_selected_avatar", |s| {
            let mut next = s.clone();
            next.settings.selected_avatar_id = avatar_id.to_string();
            next
        })
        .await
    }

    pub async fn add_connected_source(&self, source_id: &str) -> Result<Applied, AppError> {
        self.apply("add_connected_source", |s| {
            let mut next = s.clone();
            next.onboarding.connected_sources.push(source_id.to_string());
            next
        })
        .await
    }

    pub async fn set_first_project(&self, project_id: &str) -> Result<Applied, AppError> {
        self.apply("set_first_project", |s| {
            let mut next = s.clone();
            next.onboarding.first_project_id = Some(project_id.to_string());
            next
        })
        .await
    }

    pub async fn add_priority_contact(&self, contact_id: &str) -> Result<Applied, AppError> {
        self.apply("add_priority_contact", |s| {
            let mut next = s.clone();
            next.onboarding.priority_contact_ids.push(contact_id.to_string());
            next
        })
        .await
    }

    pub async fn remove_priority_contact(
        &self,
        contact_id: &str,
    ) -> Result<Applied, AppError> {
        self.apply("remove_priority_contact", |s| {
            let mut next = s.clone();
            next.onboarding.priority_contact_ids.retain(|id| id != contact_id);
            next
        })
        .await
    }

    // ==================== CONTEXT ====================

    pub async fn set_current_project(
        &self,
        project_id: Option<String>,
    ) -> Result<Applied, AppError> {
        self.apply("set_current_project", move |s| {
            let mut next = s.clone();
            next.current_project_id = project_id;
            next
        })
        .await
    }

    // ==================== MESSAGES ====================

    pub async fn mark_message_as_read(&self, message_id: &str) -> Result<Applied, AppError> {
        self.apply("mark_message_as_read", |s| {
            let mut next = s.clone();
            update_matching(&mut next.messages, "message", message_id, |m| &m.id, |m| {
                m.is_read = true
            });
            next
        })
        .await
    }

    // ==================== TASKS ====================

    /// Move a task to `status`. Moving to done stamps `completed_at` (again, on
    /// every call) and prepends a task-completed notification.
    pub async fn update_task_status(
        &self,
        task_id: &str,
        status: TaskStatus,
    ) -> Result<Applied, AppError> {
        let now = Utc::now();
        self.apply("update_task_status", |s| {
            let mut next = s.clone();
            let title = s
                .tasks
                .iter()
                .find(|t| t.id == task_id)
                .map(|t| t.title.clone());

            update_matching(&mut next.tasks, "task", task_id, |t| &t.id, |t| {
                *t = t.with_status(status, now)
            });

            if status == TaskStatus::Done {
                let title = title.as_deref().unwrap_or(UNKNOWN_TASK_TITLE);
                next.notifications.insert(0, Notification::task_completed(title, now));
            }
            tracing::debug!(task_id, status = status.as_str(), "Task status updated");
            next
        })
        .await
    }

    pub async fn add_task(&self, task: Task) -> Result<Applied, AppError> {
        self.apply("add_task", move |s| {
            let mut next = s.clone();
            next.tasks.push(task);
            next
        })
        .await
    }

    // ==================== PROJECTS & KNOWLEDGE ====================

    pub async fn add_project(&self, project: Project) -> Result<Applied, AppError> {
        self.apply("add_project", move |s| {
            let mut next = s.clone();
            next.projects.push(project);
            next
        })
        .await
    }

    pub async fn add_folder(&self, folder: Folder) -> Result<Applied, AppError> {
        self.apply("add_folder", move |s| {
            let mut next = s.clone();
            next.folders.push(folder);
            next
        })
        .await
    }

    pub async fn add_document(&self, document: Document) -> Result<Applied, AppError> {
        self.apply("add_document", move |s| {
            let mut next = s.clone();
            next.documents.push(document);
            next
        })
        .await
    }

    // ==================== CALENDAR ====================

    pub async fn update_calendar_event(
        &self,
        event_id: &str,
        patch: &CalendarEventPatch,
    ) -> Result<Applied, AppError> {
        self.apply("update_calendar_event", |s| {
            let mut next = s.clone();
            update_matching(&mut next.calendar, "calendar event", event_id, |e| &e.id, |e| {
                *e = e.merged(patch)
            });
            next
        })
        .await
    }

    /// Move an event and mark it conflict-free. The new slot is not checked
    /// against other events.
    pub async fn resolve_conflict(
        &self,
        event_id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Applied, AppError> {
        self.apply("resolve_conflict", |s| {
            let mut next = s.clone();
            update_matching(&mut next.calendar, "calendar event", event_id, |e| &e.id, |e| {
                e.start = start;
                e.end = end;
                e.is_conflict = Some(false);
                e.conflict_with = None;
            });
            next
        })
        .await
    }

    // ==================== NOTIFICATIONS ====================

    pub async fn mark_notification_as_read(
        &self,
        notification_id: &str,
    ) -> Result<Applied, AppError> {
        self.apply("mark_notification_as_read", |s| {
            let mut next = s.clone();
            update_matching(
                &mut next.notifications,
                "notification",
                notification_id,
                |n| &n.id,
                |n| n.is_read = true,
            );
            next
        })
        .await
    }

    /// Prepend, keeping the feed most-recent-first.
    pub async fn add_notification(
        &self,
        notification: Notification,
    ) -> Result<Applied, AppError> {
        self.apply("add_notification", move |s| {
            let mut next = s.clone();
            next.notifications.insert(0, notification);
            next
        })
        .await
    }

    // ==================== SUGGESTIONS ====================

    pub async fn accept_suggestion(&self, suggestion_id: &str) -> Result<Applied, AppError> {
        self.apply("accept_suggestion", |s| {
            let mut next = s.clone();
            update_matching(&mut next.suggestions, "suggestion", suggestion_id, |x| &x.id, |x| {
                x.accepted = Some(true)
            });
            next
        })
        .await
    }

    /// Drops the suggestion from the collection for good.
    pub async fn reject_suggestion(&self, suggestion_id: &str) -> Result<Applied, AppError> {
        self.apply("reject_suggestion", |s| {
            let mut next = s.clone();
            next.suggestions.retain(|x| x.id != suggestion_id);
            next
        })
        .await
    }

    // ==================== MEETINGS ====================

    /// Any status may follow any other.
    pub async fn update_meeting_status(
        &self,
        meeting_id: &str,
        status: MeetingStatus,
    ) -> Result<Applied, AppError> {
        self.apply("update_meeting_status", |s| {
            let mut next = s.clone();
            update_matching(&mut next.meetings, "meeting", meeting_id, |m| &m.id, |m| {
                m.status = status
            });
            next
        })
        .await
    }

    pub async fn confirm_minutes(&self, meeting_id: &str) -> Result<Applied, AppError> {
        self.apply("confirm_minutes", |s| {
            let mut next = s.clone();
            update_matching(&mut next.meetings, "meeting", meeting_id, |m| &m.id, |m| {
                if let Some(minutes) = m.minutes.as_mut() {
                    minutes.is_confirmed = true;
                }
            });
            next
        })
        .await
    }

    // ==================== SETTINGS ====================

    pub async fn update_notification_preferences(
        &self,
        patch: &NotificationPreferencesPatch,
    ) -> Result<Applied, AppError> {
        self.apply("update_notification_preferences", |s| {
            let mut next = s.clone();
            next.settings.notification_preferences =
                s.settings.notification_preferences.merged(patch);
            next
        })
        .await
    }

    /// Factory reset: everything goes back to the seed, including the assistant log.
    pub async fn reset_demo_data(&self) -> Result<Applied, AppError> {
        let snapshot = self
            .apply("reset_demo_data", |_| self.seed.as_ref().clone())
            .await?;
        tracing::info!("Demo data reset to defaults");
        Ok(snapshot)
    }

    // ==================== ASSISTANT ====================

    pub async fn set_assistant_mode(&self, mode: AssistantMode) -> Result<Applied, AppError> {
        self.apply("set_assistant_mode", |s| {
            let mut next = s.clone();
            next.assistant_mode = mode;
            next
        })
        .await
    }

    pub async fn add_assistant_message(
        &self,
        message: AssistantMessage,
    ) -> Result<Applied, AppError> {
        self.apply("add_assistant_message", move |s| {
            let mut next = s.clone();
            next.assistant_messages.push(message);
            next
        })
        .await
    }

    pub async fn clear_assistant_messages(&self) -> Result<Applied, AppError> {
        self.apply("clear_assistant_messages", |s| {
            let mut next = s.clone();
            next.assistant_messages.clear();
            next
        })
        .await
    }
}

/// Apply `update` to every item whose id equals `id`. Unknown ids are logged, not failed.
fn update_matching<T>(
    items: &mut [T],
    kind: &str,
    id: &str,
    id_of: impl Fn(&T) -> &String,
    mut update: impl FnMut(&mut T),
) {
    let mut matched = false;
    for item in items.iter_mut() {
        if id_of(item) == id {
            update(item);
            matched = true;
        }
    }
    if !matched {
        tracing::debug!("No {} with id {}, nothing to update", kind, id);
    }
}

#[cfg(test)]
mod tests;
