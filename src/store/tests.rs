use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tempfile::TempDir;

use super::*;
use crate::db::init_database;
use crate::models::{
    AssistantRole, DocumentType, NotificationType, Priority, TaskSource,
};

fn anchor() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z")
        .unwrap()
        .with_timezone(&Utc)
}

fn ts(raw: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(raw).unwrap().with_timezone(&Utc)
}

/// Test fixture owning a throwaway SQLite file.
struct Fixture {
    repo: Repository,
    seed: Seed,
    _temp_dir: TempDir,
}

impl Fixture {
    async fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let pool = init_database(&temp_dir.path().join("store.sqlite"))
            .await
            .expect("Failed to init DB");
        Fixture {
            repo: Repository::new(pool),
            seed: Seed::new(anchor()),
            _temp_dir: temp_dir,
        }
    }

    /// Simulates a fresh process start against the same local storage.
    async fn open(&self) -> Store {
        Store::open(self.repo.clone(), &self.seed).await.unwrap()
    }
}

fn new_task(id: &str) -> Task {
    Task {
        id: id.to_string(),
        title: "Prepare audit committee notes".to_string(),
        description: None,
        status: TaskStatus::Todo,
        priority: Priority::Medium,
        due_date: Some(ts("2024-01-05T17:00:00Z")),
        project_id: "p1".to_string(),
        assignee: None,
        created_at: ts("2024-01-01T08:00:00Z"),
        completed_at: None,
        source_type: Some(TaskSource::Manual),
        source_id: None,
    }
}

fn new_notification(id: &str) -> Notification {
    Notification {
        id: id.to_string(),
        kind: NotificationType::CriticalMessage,
        title: "Wire approval needed".to_string(),
        message: "Treasury needs sign-off before 3pm".to_string(),
        timestamp: ts("2024-01-01T12:00:00Z"),
        is_read: false,
        action_url: None,
        context_briefing: None,
    }
}

#[tokio::test]
async fn test_fresh_store_matches_seed() {
    let fixture = Fixture::new().await;
    let store = fixture.open().await;

    assert_eq!(*store.snapshot(), fixture.seed.snapshot());
    assert_eq!(store.revision().await.unwrap(), 0);
    assert_eq!(store.export().await.unwrap(), None);
}

#[tokio::test]
async fn test_task_completion_scenario() {
    let fixture = Fixture::new().await;
    let store = fixture.open().await;
    let before = store.snapshot();
    let t1 = before.tasks.iter().find(|t| t.id == "t1").unwrap();
    assert_eq!(t1.status, TaskStatus::Todo);

    let called_at = Utc::now();
    let after = store.update_task_status("t1", TaskStatus::Done).await.unwrap();

    let t1_after = after.tasks.iter().find(|t| t.id == "t1").unwrap();
    assert_eq!(t1_after.status, TaskStatus::Done);
    assert!(t1_after.completed_at.unwrap() >= called_at);

    assert_eq!(after.notifications.len(), before.notifications.len() + 1);
    assert_eq!(after.notifications[0].kind, NotificationType::TaskCompleted);
    assert!(after.notifications[0].message.contains(&t1.title));
    assert!(!after.notifications[0].is_read);
    assert_eq!(&after.notifications[1..], &before.notifications[..]);
}

#[tokio::test]
async fn test_task_done_restamps_and_reopen_clears() {
    let fixture = Fixture::new().await;
    let store = fixture.open().await;

    let first = store.update_task_status("t1", TaskStatus::Done).await.unwrap();
    let first_stamp = first.tasks[0].completed_at.unwrap();
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    let second = store.update_task_status("t1", TaskStatus::Done).await.unwrap();
    let second_stamp = second.tasks[0].completed_at.unwrap();

    assert!(second_stamp > first_stamp);
    let completed = second
        .notifications
        .iter()
        .filter(|n| n.kind == NotificationType::TaskCompleted)
        .count();
    assert_eq!(completed, 2);

    let reopened = store
        .update_task_status("t1", TaskStatus::InProgress)
        .await
        .unwrap();
    assert_eq!(reopened.tasks[0].status, TaskStatus::InProgress);
    assert!(reopened.tasks[0].completed_at.is_none());
    assert_eq!(reopened.notifications, second.notifications);
}

#[tokio::test]
async fn test_resolve_conflict_scenario() {
    let fixture = Fixture::new().await;
    let store = fixture.open().await;
    let before = store.snapshot();
    assert_eq!(
        before.calendar.iter().find(|e| e.id == "e2").unwrap().is_conflict,
        Some(true)
    );

    let start = ts("2024-01-01T14:00:00Z");
    let end = ts("2024-01-01T15:00:00Z");
    let after = store.resolve_conflict("e2", start, end).await.unwrap();

    for (old, new) in before.calendar.iter().zip(after.calendar.iter()) {
        if new.id == "e2" {
            assert_eq!(new.start, start);
            assert_eq!(new.end, end);
            assert_eq!(new.is_conflict, Some(false));
            assert_eq!(new.conflict_with, None);
            assert_eq!(new.title, old.title);
        } else {
            assert_eq!(new, old);
        }
    }
}

#[tokio::test]
async fn test_update_calendar_event_shallow_merge() {
    let fixture = Fixture::new().await;
    let store = fixture.open().await;
    let before = store.snapshot();
    let e1 = before.calendar.iter().find(|e| e.id == "e1").unwrap();

    let patch = CalendarEventPatch {
        title: Some("Board deck dry run".to_string()),
        location: Some(Some("Zoom".to_string())),
        ..Default::default()
    };
    let after = store.update_calendar_event("e1", &patch).await.unwrap();
    let e1_after = after.calendar.iter().find(|e| e.id == "e1").unwrap();

    assert_eq!(e1_after.title, "Board deck dry run");
    assert_eq!(e1_after.location.as_deref(), Some("Zoom"));
    assert_eq!(e1_after.start, e1.start);
    assert_eq!(e1_after.participants, e1.participants);
}

#[tokio::test]
async fn test_update_calendar_event_null_clears_field() {
    let fixture = Fixture::new().await;
    let store = fixture.open().await;

    let patch: CalendarEventPatch =
        serde_json::from_str(r#"{"location":null,"conflictWith":null,"isConflict":false}"#)
            .unwrap();
    let after = store.update_calendar_event("e1", &patch).await.unwrap();
    let e1 = after.calendar.iter().find(|e| e.id == "e1").unwrap();
    assert_eq!(e1.location, None);
    assert_eq!(e1.is_conflict, Some(false));

    let after = store.update_calendar_event("e2", &patch).await.unwrap();
    let e2 = after.calendar.iter().find(|e| e.id == "e2").unwrap();
    assert_eq!(e2.conflict_with, None);
    assert_eq!(e2.title, "Term sheet call");

    let reloaded = fixture.open().await.snapshot();
    assert_eq!(reloaded.calendar, after.calendar);
}

#[tokio::test]
async fn test_reject_suggestion_is_irreversible() {
    let fixture = Fixture::new().await;
    let store = fixture.open().await;

    let after = store.reject_suggestion("s1").await.unwrap();
    assert!(after.suggestions.iter().all(|s| s.id != "s1"));

    let again = store.reject_suggestion("s1").await.unwrap();
    assert_eq!(again.suggestions, after.suggestions);

    let accepted = store.accept_suggestion("s1").await.unwrap();
    assert!(accepted.suggestions.iter().all(|s| s.id != "s1"));
}

#[tokio::test]
async fn test_accept_suggestion_keeps_it() {
    let fixture = Fixture::new().await;
    let store = fixture.open().await;

    let after = store.accept_suggestion("s2").await.unwrap();
    let s2 = after.suggestions.iter().find(|s| s.id == "s2").unwrap();
    assert_eq!(s2.accepted, Some(true));
    assert_eq!(after.suggestions.len(), fixture.seed.snapshot().suggestions.len());
}

#[tokio::test]
async fn test_onboarding_completion_is_monotonic() {
    let fixture = Fixture::new().await;
    let store = fixture.open().await;

    store.complete_onboarding().await.unwrap();
    store.set_onboarding_step(0).await.unwrap();
    store.add_connected_source("gmail").await.unwrap();
    store.set_current_project(None).await.unwrap();
    store.complete_onboarding().await.unwrap();

    assert!(store.snapshot().is_onboarding_complete());
    assert!(fixture.open().await.snapshot().is_onboarding_complete());
}

#[tokio::test]
async fn test_onboarding_lists_keep_duplicates() {
    let fixture = Fixture::new().await;
    let store = fixture.open().await;

    store.add_connected_source("gmail").await.unwrap();
    store.add_connected_source("gmail").await.unwrap();
    store.add_priority_contact("c1").await.unwrap();
    store.add_priority_contact("c3").await.unwrap();
    store.add_priority_contact("c1").await.unwrap();

    let snapshot = store.snapshot();
    assert_eq!(snapshot.onboarding.connected_sources, vec!["gmail", "gmail"]);
    assert_eq!(snapshot.onboarding.priority_contact_ids, vec!["c1", "c3", "c1"]);

    let removed = store.remove_priority_contact("c1").await.unwrap();
    assert_eq!(removed.onboarding.priority_contact_ids, vec!["c3"]);
}

#[tokio::test]
async fn test_selected_avatar_single_source() {
    let fixture = Fixture::new().await;
    let store = fixture.open().await;

    let after = store.set_selected_avatar("victoria").await.unwrap();
    assert_eq!(after.settings.selected_avatar_id, "victoria");
    assert_eq!(after.selected_avatar_id(), "victoria");
}

#[tokio::test]
async fn test_confirm_minutes() {
    let fixture = Fixture::new().await;
    let store = fixture.open().await;
    let before = store.snapshot();

    let after = store.confirm_minutes("mt2").await.unwrap();
    let mt2 = after.meetings.iter().find(|m| m.id == "mt2").unwrap();
    assert!(mt2.minutes.as_ref().unwrap().is_confirmed);

    // mt1 has no minutes, so confirming it changes nothing.
    let after = store.confirm_minutes("mt1").await.unwrap();
    let mt1_before = before.meetings.iter().find(|m| m.id == "mt1").unwrap();
    let mt1_after = after.meetings.iter().find(|m| m.id == "mt1").unwrap();
    assert_eq!(mt1_after, mt1_before);
}

#[tokio::test]
async fn test_meeting_status_accepts_any_transition() {
    let fixture = Fixture::new().await;
    let store = fixture.open().await;

    store
        .update_meeting_status("mt2", MeetingStatus::Upcoming)
        .await
        .unwrap();
    let after = store
        .update_meeting_status("mt2", MeetingStatus::Cancelled)
        .await
        .unwrap();
    let mt2 = after.meetings.iter().find(|m| m.id == "mt2").unwrap();
    assert_eq!(mt2.status, MeetingStatus::Cancelled);
}

#[tokio::test]
async fn test_notifications_prepend_and_mark_read() {
    let fixture = Fixture::new().await;
    let store = fixture.open().await;

    let after = store.add_notification(new_notification("n-x")).await.unwrap();
    assert_eq!(after.notifications[0].id, "n-x");

    let after = store.mark_notification_as_read("n-x").await.unwrap();
    assert!(after.notifications[0].is_read);

    let after = store.mark_message_as_read("m1").await.unwrap();
    assert!(after.messages.iter().find(|m| m.id == "m1").unwrap().is_read);
}

#[tokio::test]
async fn test_notification_preferences_merge() {
    let fixture = Fixture::new().await;
    let store = fixture.open().await;
    let before = store.snapshot().settings.notification_preferences.clone();

    let patch = NotificationPreferencesPatch {
        meeting_reminder_5min: Some(true),
        desktop: Some(false),
        ..Default::default()
    };
    let after = store.update_notification_preferences(&patch).await.unwrap();
    let prefs = &after.settings.notification_preferences;

    assert!(prefs.meeting_reminder_5min);
    assert!(!prefs.desktop);
    assert_eq!(prefs.mobile, before.mobile);
    assert_eq!(prefs.critical_messages, before.critical_messages);
}

#[tokio::test]
async fn test_unknown_ids_are_noops() {
    let fixture = Fixture::new().await;
    let store = fixture.open().await;
    let before = store.snapshot();
    let when = ts("2024-01-01T14:00:00Z");

    store.mark_message_as_read("nope").await.unwrap();
    store.update_task_status("nope", TaskStatus::InProgress).await.unwrap();
    store
        .update_calendar_event("nope", &CalendarEventPatch::default())
        .await
        .unwrap();
    store.resolve_conflict("nope", when, when + Duration::hours(1)).await.unwrap();
    store.mark_notification_as_read("nope").await.unwrap();
    store.accept_suggestion("nope").await.unwrap();
    store.reject_suggestion("nope").await.unwrap();
    store
        .update_meeting_status("nope", MeetingStatus::Completed)
        .await
        .unwrap();
    store.confirm_minutes("nope").await.unwrap();
    store.remove_priority_contact("nope").await.unwrap();

    assert_eq!(*store.snapshot(), *before);
}

#[tokio::test]
async fn test_unknown_task_done_still_notifies() {
    let fixture = Fixture::new().await;
    let store = fixture.open().await;
    let before = store.snapshot();

    let after = store.update_task_status("nope", TaskStatus::Done).await.unwrap();
    assert_eq!(after.tasks, before.tasks);
    assert_eq!(after.notifications.len(), before.notifications.len() + 1);
    assert!(after.notifications[0].message.contains("Unknown task"));
}

#[tokio::test]
async fn test_persistence_round_trip() {
    let fixture = Fixture::new().await;
    let store = fixture.open().await;

    store.set_onboarding_step(3).await.unwrap();
    store.set_selected_avatar("sarah").await.unwrap();
    store.add_connected_source("gdrive").await.unwrap();
    store.set_first_project("p2").await.unwrap();
    store.add_priority_contact("c6").await.unwrap();
    store.add_priority_contact("c2").await.unwrap();
    store.remove_priority_contact("c6").await.unwrap();
    store.complete_onboarding().await.unwrap();
    store.set_current_project(Some("p2".to_string())).await.unwrap();
    store.mark_message_as_read("m3").await.unwrap();
    store.update_task_status("t3", TaskStatus::Done).await.unwrap();
    store.add_task(new_task("t-new")).await.unwrap();
    store
        .resolve_conflict("e3", ts("2024-01-01T16:00:00Z"), ts("2024-01-01T17:00:00Z"))
        .await
        .unwrap();
    store
        .update_calendar_event(
            "e1",
            &CalendarEventPatch {
                title: Some("Board deck dry run".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    store.add_notification(new_notification("n-x")).await.unwrap();
    store.mark_notification_as_read("n2").await.unwrap();
    store.accept_suggestion("s2").await.unwrap();
    store.reject_suggestion("s3").await.unwrap();
    store
        .update_meeting_status("mt1", MeetingStatus::InProgress)
        .await
        .unwrap();
    store.confirm_minutes("mt2").await.unwrap();
    store
        .update_notification_preferences(&NotificationPreferencesPatch {
            daily_summary: Some(false),
            ..Default::default()
        })
        .await
        .unwrap();
    store.set_assistant_mode(AssistantMode::Avatar).await.unwrap();
    store
        .add_assistant_message(AssistantMessage {
            id: "a0".to_string(),
            role: AssistantRole::User,
            content: "Draft a reply to James".to_string(),
            timestamp: Utc::now(),
            sources: None,
        })
        .await
        .unwrap();
    store.clear_assistant_messages().await.unwrap();
    let last = store
        .add_assistant_message(AssistantMessage {
            id: "a1".to_string(),
            role: AssistantRole::User,
            content: "What are my priorities today?".to_string(),
            timestamp: Utc::now(),
            sources: None,
        })
        .await
        .unwrap();

    let reloaded = fixture.open().await.snapshot();
    assert_eq!(*reloaded, *last);
    assert_eq!(reloaded.onboarding.priority_contact_ids, vec!["c2".to_string()]);
    assert_eq!(reloaded.assistant_messages.len(), 1);
    assert_eq!(reloaded.assistant_messages[0].id, "a1");
    let e1 = reloaded.calendar.iter().find(|e| e.id == "e1").unwrap();
    assert_eq!(e1.title, "Board deck dry run");
    assert!(store.revision().await.unwrap() >= 25);
}

#[tokio::test]
async fn test_cleared_current_project_survives_reload() {
    let fixture = Fixture::new().await;
    let store = fixture.open().await;

    store.set_current_project(Some("p1".to_string())).await.unwrap();
    store.set_current_project(None).await.unwrap();

    assert_eq!(fixture.open().await.snapshot().current_project_id, None);
}

#[tokio::test]
async fn test_seed_collections_are_not_persisted() {
    let fixture = Fixture::new().await;
    let store = fixture.open().await;
    let seed = fixture.seed.snapshot();

    store
        .add_project(Project {
            id: "p-new".to_string(),
            name: "Audit".to_string(),
            description: "Year-end audit".to_string(),
            priority: Priority::Medium,
            color: "#EF4444".to_string(),
            participants: Vec::new(),
            created_at: ts("2024-01-01T09:00:00Z"),
        })
        .await
        .unwrap();
    store
        .add_folder(Folder {
            id: "f-new".to_string(),
            name: "Audit".to_string(),
            parent_id: None,
            project_id: Some("p-new".to_string()),
        })
        .await
        .unwrap();
    let live = store
        .add_document(Document {
            id: "d-new".to_string(),
            title: "Audit plan".to_string(),
            doc_type: DocumentType::Docx,
            folder_id: Some("f-new".to_string()),
            project_id: Some("p-new".to_string()),
            last_updated: ts("2024-01-01T09:30:00Z"),
            size: None,
            preview: None,
            tags: vec!["audit".to_string()],
            linked_contacts: Vec::new(),
        })
        .await
        .unwrap();
    assert_eq!(live.projects.len(), seed.projects.len() + 1);

    let reloaded = fixture.open().await.snapshot();
    assert_eq!(reloaded.contacts, seed.contacts);
    assert_eq!(reloaded.projects, seed.projects);
    assert_eq!(reloaded.documents, seed.documents);
    assert_eq!(reloaded.folders, seed.folders);
    assert_eq!(reloaded.avatars, seed.avatars);
}

#[tokio::test]
async fn test_reset_demo_data() {
    let fixture = Fixture::new().await;
    let store = fixture.open().await;

    store.complete_onboarding().await.unwrap();
    store.set_assistant_mode(AssistantMode::Avatar).await.unwrap();
    store
        .add_assistant_message(AssistantMessage {
            id: "a1".to_string(),
            role: AssistantRole::Assistant,
            content: "Here is your day.".to_string(),
            timestamp: Utc::now(),
            sources: None,
        })
        .await
        .unwrap();
    store.reject_suggestion("s1").await.unwrap();

    let reset = store.reset_demo_data().await.unwrap();
    assert_eq!(*reset, fixture.seed.snapshot());
    assert!(reset.assistant_messages.is_empty());
    assert_eq!(reset.assistant_mode, AssistantMode::Chat);

    assert_eq!(*fixture.open().await.snapshot(), fixture.seed.snapshot());
}

#[tokio::test]
async fn test_clear_assistant_messages() {
    let fixture = Fixture::new().await;
    let store = fixture.open().await;

    for (i, role) in [AssistantRole::User, AssistantRole::Assistant].into_iter().enumerate() {
        store
            .add_assistant_message(AssistantMessage {
                id: format!("a{}", i),
                role,
                content: "hello".to_string(),
                timestamp: Utc::now(),
                sources: None,
            })
            .await
            .unwrap();
    }
    assert_eq!(store.snapshot().assistant_messages.len(), 2);
    assert_eq!(store.snapshot().assistant_messages[1].id, "a1");

    let cleared = store.clear_assistant_messages().await.unwrap();
    assert!(cleared.assistant_messages.is_empty());
}

#[tokio::test]
async fn test_mutations_report_their_own_revision() {
    let fixture = Fixture::new().await;
    let store = Arc::new(fixture.open().await);

    let first = store.set_onboarding_step(1).await.unwrap();
    assert_eq!(first.revision, 1);

    let (a, b) = tokio::join!(
        {
            let store = store.clone();
            async move { store.mark_message_as_read("m1").await.unwrap() }
        },
        {
            let store = store.clone();
            async move { store.accept_suggestion("s1").await.unwrap() }
        }
    );
    let mut revisions = vec![a.revision, b.revision];
    revisions.sort();
    assert_eq!(revisions, vec![2, 3]);
    assert_eq!(store.revision().await.unwrap(), 3);
}

#[tokio::test]
async fn test_subscribers_see_published_snapshots() {
    let fixture = Fixture::new().await;
    let store = fixture.open().await;
    let mut rx = store.subscribe();

    store.complete_onboarding().await.unwrap();

    rx.changed().await.unwrap();
    assert!(rx.borrow_and_update().onboarding.completed);
}

#[tokio::test]
async fn test_unreadable_snapshot_falls_back_to_seed() {
    let fixture = Fixture::new().await;
    fixture.repo.put(STORAGE_KEY, "{not json").await.unwrap();

    let store = fixture.open().await;
    assert_eq!(*store.snapshot(), fixture.seed.snapshot());
}

#[tokio::test]
async fn test_partial_snapshot_overrides_only_present_fields() {
    let fixture = Fixture::new().await;
    let raw = r#"{"state":{"assistantMode":"avatar","onboarding":{"completed":true,"currentStep":4,"connectedSources":["gmail"],"priorityContactIds":[]}},"version":0}"#;
    fixture.repo.put(STORAGE_KEY, raw).await.unwrap();

    let snapshot = fixture.open().await.snapshot();
    let seed = fixture.seed.snapshot();
    assert_eq!(snapshot.assistant_mode, AssistantMode::Avatar);
    assert!(snapshot.onboarding.completed);
    assert_eq!(snapshot.onboarding.current_step, 4);
    assert_eq!(snapshot.tasks, seed.tasks);
    assert_eq!(snapshot.settings, seed.settings);
}

#[tokio::test]
async fn test_export_is_persisted_envelope() {
    let fixture = Fixture::new().await;
    let store = fixture.open().await;

    store.set_onboarding_step(2).await.unwrap();
    let raw = store.export().await.unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();

    assert_eq!(value["version"], 0);
    assert_eq!(value["state"]["onboarding"]["currentStep"], 2);
    assert!(value["state"]["currentProjectId"].is_null());
    assert!(value["state"].get("contacts").is_none());
    assert!(value["state"]["tasks"][0]["createdAt"].is_string());

    let mt2 = value["state"]["meetings"]
        .as_array()
        .unwrap()
        .iter()
        .find(|m| m["id"] == "mt2")
        .unwrap();
    assert_eq!(mt2["followUpDrafts"][0]["type"], "email");
}
