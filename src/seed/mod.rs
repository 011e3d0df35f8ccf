//! Mock dataset the store starts from.
//!
//! Every date is relative to an anchor instant, so two seeds built from the same
//! anchor are equal field-for-field.

use chrono::{DateTime, Duration, Utc};

use crate::models::*;

/// Source of the initial dataset.
#[derive(Debug, Clone)]
pub struct Seed {
    anchor: DateTime<Utc>,
}

impl Seed {
    pub fn new(anchor: DateTime<Utc>) -> Self {
        Self { anchor }
    }

    pub fn anchor(&self) -> DateTime<Utc> {
        self.anchor
    }

    /// Build the full initial snapshot.
    pub fn snapshot(&self) -> AppSnapshot {
        let contacts = contacts();
        let projects = projects(self.anchor, &contacts);
        let messages = messages(self.anchor, &contacts);
        let threads = threads(&messages);
        let tasks = tasks(self.anchor, &contacts);
        let meetings = meetings(self.anchor, &contacts, &tasks);

        AppSnapshot {
            user: User {
                name: "Alex Morgan".to_string(),
                email: "alex.morgan@meridiancap.com".to_string(),
                role: "Chief Financial Officer".to_string(),
            },
            onboarding: OnboardingState::default(),
            settings: settings(self.anchor),
            current_project_id: None,
            calendar: calendar(self.anchor, &contacts),
            documents: documents(self.anchor),
            folders: folders(),
            notifications: notifications(self.anchor),
            suggestions: suggestions(),
            avatars: avatars(),
            assistant_messages: Vec::new(),
            assistant_mode: AssistantMode::Chat,
            contacts,
            projects,
            messages,
            threads,
            tasks,
            meetings,
        }
    }
}

fn at(anchor: DateTime<Utc>, hours: i64) -> DateTime<Utc> {
    anchor + Duration::hours(hours)
}

fn contact(id: &str, name: &str, email: &str, role: &str, company: &str, priority: bool) -> Contact {
    Contact {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        role: role.to_string(),
        company: company.to_string(),
        is_priority: priority,
        avatar: None,
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn pick(contacts: &[Contact], ids: &[&str]) -> Vec<Contact> {
    contacts
        .iter()
        .filter(|c| ids.contains(&c.id.as_str()))
        .cloned()
        .collect()
}

fn contacts() -> Vec<Contact> {
    vec![
        contact("c1", "Sarah Chen", "sarah.chen@meridiancap.com", "Chief Executive Officer", "Meridian Capital", true),
        contact("c2", "Michael Torres", "m.torres@meridiancap.com", "VP Finance", "Meridian Capital", false),
        contact("c3", "James Wilson", "jwilson@northbridge.vc", "Board Member", "Northbridge Ventures", true),
        contact("c4", "Emily Rodriguez", "emily.r@meridiancap.com", "General Counsel", "Meridian Capital", false),
        contact("c5", "David Kim", "dkim@meridiancap.com", "Financial Controller", "Meridian Capital", false),
        contact("c6", "Priya Patel", "priya@atlaspartners.com", "Managing Director", "Atlas Partners", true),
    ]
}

fn projects(anchor: DateTime<Utc>, contacts: &[Contact]) -> Vec<Project> {
    vec![
        Project {
            id: "p1".to_string(),
            name: "Q4 Board Meeting".to_string(),
            description: "Prepare financials and strategy deck for the quarterly board review".to_string(),
            priority: Priority::High,
            color: "#3B82F6".to_string(),
            participants: pick(contacts, &["c1", "c3", "c5"]),
            created_at: at(anchor, -24 * 30),
        },
        Project {
            id: "p2".to_string(),
            name: "Series C Fundraise".to_string(),
            description: "Coordinate investor diligence and term sheet negotiation".to_string(),
            priority: Priority::High,
            color: "#8B5CF6".to_string(),
            participants: pick(contacts, &["c1", "c4", "c6"]),
            created_at: at(anchor, -24 * 45),
        },
        Project {
            id: "p3".to_string(),
            name: "FY25 Budget Planning".to_string(),
            description: "Consolidate departmental budgets into the annual plan".to_string(),
            priority: Priority::Medium,
            color: "#10B981".to_string(),
            participants: pick(contacts, &["c2", "c5"]),
            created_at: at(anchor, -24 * 20),
        },
        Project {
            id: "p4".to_string(),
            name: "Vendor Consolidation".to_string(),
            description: "Reduce finance tooling vendors and renegotiate contracts".to_string(),
            priority: Priority::Low,
            color: "#F59E0B".to_string(),
            participants: pick(contacts, &["c2"]),
            created_at: at(anchor, -24 * 10),
        },
    ]
}

fn messages(anchor: DateTime<Utc>, contacts: &[Contact]) -> Vec<Message> {
    let me = contact("me", "Alex Morgan", "alex.morgan@meridiancap.com", "Chief Financial Officer", "Meridian Capital", false);
    let from = |id: &str| pick(contacts, &[id]).remove(0);

    vec![
        Message {
            id: "m1".to_string(),
            from: from("c1"),
            to: vec![me.clone()],
            subject: "Board deck: revenue bridge".to_string(),
            preview: "Can we walk through the revenue bridge before Thursday?".to_string(),
            body: "Alex, can we walk through the revenue bridge before Thursday? The board will push on the EMEA variance.".to_string(),
            channel: MessageChannel::Email,
            project_id: Some("p1".to_string()),
            priority: Priority::High,
            priority_reason: Some("From CEO, tied to the board meeting".to_string()),
            timestamp: at(anchor, -2),
            is_read: false,
            has_attachments: true,
            thread_id: "th1".to_string(),
            suggested_replies: Some(strings(&[
                "Yes, I can do 30 minutes tomorrow morning.",
                "I'll send the updated bridge tonight.",
            ])),
        },
        Message {
            id: "m2".to_string(),
            from: from("c5"),
            to: vec![me.clone()],
            subject: "Re: Board deck: revenue bridge".to_string(),
            preview: "Updated EMEA numbers are in the shared model.".to_string(),
            body: "Updated EMEA numbers are in the shared model. The variance is mostly FX.".to_string(),
            channel: MessageChannel::Email,
            project_id: Some("p1".to_string()),
            priority: Priority::Medium,
            priority_reason: None,
            timestamp: at(anchor, -1),
            is_read: false,
            has_attachments: false,
            thread_id: "th1".to_string(),
            suggested_replies: None,
        },
        Message {
            id: "m3".to_string(),
            from: from("c6"),
            to: vec![me.clone()],
            subject: "Term sheet redlines".to_string(),
            preview: "Our counsel returned redlines on the liquidation preference.".to_string(),
            body: "Our counsel returned redlines on the liquidation preference. Can we discuss today?".to_string(),
            channel: MessageChannel::Whatsapp,
            project_id: Some("p2".to_string()),
            priority: Priority::High,
            priority_reason: Some("Lead investor, time-sensitive".to_string()),
            timestamp: at(anchor, -5),
            is_read: false,
            has_attachments: false,
            thread_id: "th2".to_string(),
            suggested_replies: Some(strings(&["Let's talk at 4pm.", "Looping in Emily."])),
        },
        Message {
            id: "m4".to_string(),
            from: from("c2"),
            to: vec![me.clone()],
            subject: "Department budget submissions".to_string(),
            preview: "Four of six departments have submitted.".to_string(),
            body: "Four of six departments have submitted. Marketing and Ops are due Friday.".to_string(),
            channel: MessageChannel::Slack,
            project_id: Some("p3".to_string()),
            priority: Priority::Medium,
            priority_reason: None,
            timestamp: at(anchor, -20),
            is_read: true,
            has_attachments: false,
            thread_id: "th3".to_string(),
            suggested_replies: None,
        },
        Message {
            id: "m5".to_string(),
            from: from("c4"),
            to: vec![me],
            subject: "NDA for data room access".to_string(),
            preview: "Two new funds requested data room access.".to_string(),
            body: "Two new funds requested data room access. NDAs are ready for your signature.".to_string(),
            channel: MessageChannel::Teams,
            project_id: Some("p2".to_string()),
            priority: Priority::High,
            priority_reason: Some("Blocks investor diligence".to_string()),
            timestamp: at(anchor, -8),
            is_read: false,
            has_attachments: true,
            thread_id: "th4".to_string(),
            suggested_replies: None,
        },
    ]
}

fn threads(messages: &[Message]) -> Vec<MessageThread> {
    let mut threads: Vec<MessageThread> = Vec::new();
    for message in messages {
        if let Some(idx) = threads.iter().position(|t| t.id == message.thread_id) {
            let thread = &mut threads[idx];
            thread.messages.push(message.clone());
            if !thread.participants.iter().any(|p| p.id == message.from.id) {
                thread.participants.push(message.from.clone());
            }
        } else {
            threads.push(MessageThread {
                id: message.thread_id.clone(),
                messages: vec![message.clone()],
                subject: message.subject.clone(),
                participants: vec![message.from.clone()],
            });
        }
    }
    threads
}

fn calendar(anchor: DateTime<Utc>, contacts: &[Contact]) -> Vec<CalendarEvent> {
    let event = |id: &str, title: &str, start: i64, hours: i64, project: Option<&str>| CalendarEvent {
        id: id.to_string(),
        title: title.to_string(),
        description: None,
        start: at(anchor, start),
        end: at(anchor, start + hours),
        location: None,
        participants: Vec::new(),
        project_id: project.map(str::to_string),
        meeting_id: None,
        is_conflict: None,
        conflict_with: None,
    };

    vec![
        CalendarEvent {
            participants: pick(contacts, &["c1", "c5"]),
            location: Some("Boardroom".to_string()),
            meeting_id: Some("mt1".to_string()),
            ..event("e1", "Board deck review", 9, 1, Some("p1"))
        },
        CalendarEvent {
            participants: pick(contacts, &["c6", "c4"]),
            is_conflict: Some(true),
            conflict_with: Some("e3".to_string()),
            ..event("e2", "Term sheet call", 14, 1, Some("p2"))
        },
        CalendarEvent {
            participants: pick(contacts, &["c2"]),
            is_conflict: Some(true),
            conflict_with: Some("e2".to_string()),
            ..event("e3", "Budget sync", 14, 1, Some("p3"))
        },
        CalendarEvent {
            participants: pick(contacts, &["c1", "c3", "c5"]),
            location: Some("HQ, Floor 12".to_string()),
            meeting_id: Some("mt3".to_string()),
            ..event("e4", "Q4 Board Meeting", 24 * 3 + 10, 3, Some("p1"))
        },
        event("e5", "Vendor review", 24 * 10 + 11, 1, Some("p4")),
    ]
}

fn task(id: &str, title: &str, status: TaskStatus, priority: Priority, project: &str) -> Task {
    Task {
        id: id.to_string(),
        title: title.to_string(),
        description: None,
        status,
        priority,
        due_date: None,
        project_id: project.to_string(),
        assignee: None,
        created_at: DateTime::<Utc>::UNIX_EPOCH,
        completed_at: None,
        source_type: Some(TaskSource::Manual),
        source_id: None,
    }
}

fn tasks(anchor: DateTime<Utc>, contacts: &[Contact]) -> Vec<Task> {
    let created = at(anchor, -24 * 3);
    vec![
        Task {
            due_date: Some(at(anchor, 24 * 2)),
            created_at: created,
            ..task("t1", "Finalize revenue bridge slide", TaskStatus::Todo, Priority::High, "p1")
        },
        Task {
            due_date: Some(at(anchor, 24)),
            created_at: created,
            assignee: pick(contacts, &["c4"]).pop(),
            source_type: Some(TaskSource::Email),
            source_id: Some("m5".to_string()),
            ..task("t2", "Sign data room NDAs", TaskStatus::InProgress, Priority::High, "p2")
        },
        Task {
            due_date: Some(at(anchor, 24 * 4)),
            created_at: created,
            ..task("t3", "Review term sheet redlines", TaskStatus::Todo, Priority::High, "p2")
        },
        Task {
            due_date: Some(at(anchor, 24 * 5)),
            created_at: created,
            assignee: pick(contacts, &["c2"]).pop(),
            ..task("t4", "Chase Marketing and Ops budgets", TaskStatus::Todo, Priority::Medium, "p3")
        },
        Task {
            created_at: created,
            completed_at: Some(at(anchor, -24)),
            ..task("t5", "Circulate board pre-read", TaskStatus::Done, Priority::Medium, "p1")
        },
        Task {
            due_date: Some(at(anchor, 24 * 14)),
            created_at: created,
            ..task("t6", "Shortlist AP automation vendors", TaskStatus::Todo, Priority::Low, "p4")
        },
    ]
}

fn folders() -> Vec<Folder> {
    let folder = |id: &str, name: &str, parent: Option<&str>, project: Option<&str>| Folder {
        id: id.to_string(),
        name: name.to_string(),
        parent_id: parent.map(str::to_string),
        project_id: project.map(str::to_string),
    };
    vec![
        folder("f1", "Board Materials", None, Some("p1")),
        folder("f2", "Fundraising", None, Some("p2")),
        folder("f3", "Budgets", None, Some("p3")),
        folder("f4", "Q4 Pre-reads", Some("f1"), Some("p1")),
        folder("f5", "Legal", Some("f2"), Some("p2")),
    ]
}

fn documents(anchor: DateTime<Utc>) -> Vec<Document> {
    let doc = |id: &str, title: &str, doc_type: DocumentType, folder: &str, project: &str, tags: &[&str]| Document {
        id: id.to_string(),
        title: title.to_string(),
        doc_type,
        folder_id: Some(folder.to_string()),
        project_id: Some(project.to_string()),
        last_updated: at(anchor, -24),
        size: None,
        preview: None,
        tags: strings(tags),
        linked_contacts: Vec::new(),
    };
    vec![
        Document {
            size: Some("4.2 MB".to_string()),
            linked_contacts: strings(&["c1", "c3"]),
            ..doc("d1", "Q4 Board Deck", DocumentType::Pptx, "f1", "p1", &["board", "strategy"])
        },
        Document {
            preview: Some("Revenue grew 18% year over year, driven by EMEA expansion.".to_string()),
            ..doc("d2", "Q4 Financial Summary", DocumentType::Pdf, "f4", "p1", &["financials", "board"])
        },
        Document {
            size: Some("1.1 MB".to_string()),
            ..doc("d3", "Series C Investor Model", DocumentType::Xlsx, "f2", "p2", &["fundraise", "model"])
        },
        Document {
            linked_contacts: strings(&["c4", "c6"]),
            ..doc("d4", "Term Sheet Draft v3", DocumentType::Docx, "f5", "p2", &["legal", "term sheet"])
        },
        doc("d5", "FY25 Budget Template", DocumentType::Xlsx, "f3", "p3", &["budget", "template"]),
    ]
}

fn meetings(anchor: DateTime<Utc>, contacts: &[Contact], tasks: &[Task]) -> Vec<Meeting> {
    let action_items: Vec<Task> = tasks
        .iter()
        .filter(|t| t.id == "t1" || t.id == "t5")
        .cloned()
        .collect();

    vec![
        Meeting {
            id: "mt1".to_string(),
            title: "Board deck review".to_string(),
            description: Some("Walk through the Q4 deck with the CEO".to_string()),
            start: at(anchor, 9),
            end: at(anchor, 10),
            participants: pick(contacts, &["c1", "c5"]),
            project_id: Some("p1".to_string()),
            status: MeetingStatus::Upcoming,
            transcript: None,
            minutes: None,
            action_items: None,
            follow_up_drafts: None,
        },
        Meeting {
            id: "mt2".to_string(),
            title: "Board prep kickoff".to_string(),
            description: None,
            start: at(anchor, -24 * 2 + 10),
            end: at(anchor, -24 * 2 + 11),
            participants: pick(contacts, &["c1", "c3", "c5"]),
            project_id: Some("p1".to_string()),
            status: MeetingStatus::Completed,
            transcript: Some(vec![
                TranscriptEntry {
                    speaker: "Sarah Chen".to_string(),
                    text: "Let's lock the agenda for the board meeting.".to_string(),
                    timestamp: 0,
                },
                TranscriptEntry {
                    speaker: "Alex Morgan".to_string(),
                    text: "Financials first, then the fundraise update.".to_string(),
                    timestamp: 42,
                },
                TranscriptEntry {
                    speaker: "James Wilson".to_string(),
                    text: "Please include the EMEA variance explanation.".to_string(),
                    timestamp: 97,
                },
            ]),
            minutes: Some(MeetingMinutes {
                agenda: strings(&["Board agenda", "Financial review", "Fundraise update"]),
                discussion: strings(&["EMEA variance driven mostly by FX"]),
                decisions: strings(&["Financials lead the board agenda"]),
                risks: strings(&["Term sheet timing may slip past the board date"]),
                next_steps: strings(&["Finalize revenue bridge", "Circulate pre-read"]),
                is_confirmed: false,
            }),
            action_items: Some(action_items),
            follow_up_drafts: Some(vec![FollowUpDraft {
                id: "fu1".to_string(),
                draft_type: FollowUpType::Email,
                title: "Board prep recap".to_string(),
                content: "Thanks all. Financials lead the agenda; pre-read goes out Tuesday.".to_string(),
                recipient: pick(contacts, &["c1"]).pop(),
            }]),
        },
        Meeting {
            id: "mt3".to_string(),
            title: "Q4 Board Meeting".to_string(),
            description: None,
            start: at(anchor, 24 * 3 + 10),
            end: at(anchor, 24 * 3 + 13),
            participants: pick(contacts, &["c1", "c3", "c5"]),
            project_id: Some("p1".to_string()),
            status: MeetingStatus::Upcoming,
            transcript: None,
            minutes: None,
            action_items: None,
            follow_up_drafts: None,
        },
    ]
}

fn notifications(anchor: DateTime<Utc>) -> Vec<Notification> {
    let note = |id: &str, kind: NotificationType, title: &str, message: &str, hours: i64, read: bool| Notification {
        id: id.to_string(),
        kind,
        title: title.to_string(),
        message: message.to_string(),
        timestamp: at(anchor, hours),
        is_read: read,
        action_url: None,
        context_briefing: None,
    };
    vec![
        Notification {
            action_url: Some("/meetings/mt1".to_string()),
            context_briefing: Some("Sarah wants to focus on the EMEA variance.".to_string()),
            ..note("n1", NotificationType::MeetingReminder, "Board deck review in 15 minutes", "Boardroom with Sarah Chen and David Kim", -1, false)
        },
        note("n2", NotificationType::CriticalMessage, "Term sheet redlines", "Priya Patel sent redlines on the liquidation preference", -5, false),
        note("n3", NotificationType::TaskDeadline, "NDA signatures due tomorrow", "Sign data room NDAs", -6, false),
        note("n4", NotificationType::DailySummary, "Your daily summary", "3 priority messages, 2 meetings, 1 calendar conflict", -10, true),
    ]
}

fn suggestions() -> Vec<AiSuggestion> {
    let suggestion = |id: &str, title: &str, description: &str, action: &str, artifact: ArtifactType| AiSuggestion {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        action: action.to_string(),
        project_id: None,
        meeting_id: None,
        message_id: None,
        artifact_type: Some(artifact),
        accepted: None,
    };
    vec![
        AiSuggestion {
            project_id: Some("p2".to_string()),
            message_id: Some("m3".to_string()),
            ..suggestion("s1", "Reply to Priya", "Propose a 4pm call on the redlines", "Draft reply", ArtifactType::Draft)
        },
        AiSuggestion {
            meeting_id: Some("mt2".to_string()),
            ..suggestion("s2", "Send board prep recap", "Follow-up draft is ready to send", "Review draft", ArtifactType::Draft)
        },
        AiSuggestion {
            project_id: Some("p3".to_string()),
            ..suggestion("s3", "Budget reminder", "Remind Marketing and Ops about Friday's deadline", "Create reminder", ArtifactType::Reminder)
        },
        AiSuggestion {
            project_id: Some("p1".to_string()),
            ..suggestion("s4", "Add EMEA variance task", "James asked for a variance explanation", "Create task", ArtifactType::Task)
        },
    ]
}

fn avatars() -> Vec<Avatar> {
    ["sydney", "victoria", "sarah", "mei", "sophia", "elena"]
        .iter()
        .map(|id| {
            let mut name = id.to_string();
            if let Some(first) = name.get_mut(0..1) {
                first.make_ascii_uppercase();
            }
            Avatar {
                id: id.to_string(),
                name,
                image_url: format!("/avatars/avatar-{}.png", id),
                voice_id: None,
            }
        })
        .collect()
}

fn settings(anchor: DateTime<Utc>) -> UserSettings {
    let connector = |id: &str, name: &str, connector_type: ConnectorType, status: ConnectorStatus, icon: &str| Connector {
        id: id.to_string(),
        name: name.to_string(),
        connector_type,
        status,
        last_sync: (status == ConnectorStatus::Connected).then(|| at(anchor, -1)),
        icon: icon.to_string(),
    };
    UserSettings {
        selected_avatar_id: "sydney".to_string(),
        notification_preferences: NotificationPreferences {
            desktop: true,
            mobile: true,
            daily_summary: true,
            meeting_reminder_15min: true,
            meeting_reminder_5min: false,
            critical_messages: true,
        },
        connectors: vec![
            connector("gmail", "Gmail", ConnectorType::Gmail, ConnectorStatus::Connected, "📧"),
            connector("outlook", "Outlook", ConnectorType::Outlook, ConnectorStatus::Disconnected, "📨"),
            connector("whatsapp", "WhatsApp", ConnectorType::Whatsapp, ConnectorStatus::Connected, "📱"),
            connector("gdrive", "Google Drive", ConnectorType::Gdrive, ConnectorStatus::Syncing, "📁"),
            connector("slack", "Slack", ConnectorType::Slack, ConnectorStatus::Connected, "💬"),
            connector("teams", "Microsoft Teams", ConnectorType::Teams, ConnectorStatus::Disconnected, "🟣"),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn anchor() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn test_seed_is_deterministic() {
        assert_eq!(Seed::new(anchor()).snapshot(), Seed::new(anchor()).snapshot());
    }

    #[test]
    fn test_seed_ids_are_unique() {
        let snapshot = Seed::new(anchor()).snapshot();
        let contact_ids: HashSet<_> = snapshot.contacts.iter().map(|c| &c.id).collect();
        assert_eq!(contact_ids.len(), snapshot.contacts.len());
        let task_ids: HashSet<_> = snapshot.tasks.iter().map(|t| &t.id).collect();
        assert_eq!(task_ids.len(), snapshot.tasks.len());
    }

    #[test]
    fn test_seed_invariants() {
        let snapshot = Seed::new(anchor()).snapshot();

        assert!(!snapshot.onboarding.completed);
        assert!(snapshot.assistant_messages.is_empty());
        assert!(snapshot.calendar.iter().all(|e| e.start < e.end));
        for task in &snapshot.tasks {
            assert_eq!(task.completed_at.is_some(), task.status == TaskStatus::Done);
        }

        let folder_ids: HashSet<_> = snapshot.folders.iter().map(|f| f.id.as_str()).collect();
        for folder in &snapshot.folders {
            if let Some(parent) = &folder.parent_id {
                assert!(folder_ids.contains(parent.as_str()));
            }
        }
        for doc in &snapshot.documents {
            if let Some(folder) = &doc.folder_id {
                assert!(folder_ids.contains(folder.as_str()));
            }
        }
    }

    #[test]
    fn test_threads_group_messages() {
        let snapshot = Seed::new(anchor()).snapshot();
        let th1 = snapshot.threads.iter().find(|t| t.id == "th1").unwrap();
        assert_eq!(th1.messages.len(), 2);
        assert_eq!(th1.participants.len(), 2);
    }
}
