//! Meeting model with transcript, minutes and follow-ups.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Contact, Task};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MeetingStatus {
    Upcoming,
    InProgress,
    Completed,
    Cancelled,
}

/// One utterance in a meeting transcript.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TranscriptEntry {
    pub speaker: String,
    pub text: String,
    /// Seconds from the start of the meeting.
    pub timestamp: u32,
}

/// Structured minutes produced after a meeting.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MeetingMinutes {
    pub agenda: Vec<String>,
    pub discussion: Vec<String>,
    pub decisions: Vec<String>,
    pub risks: Vec<String>,
    pub next_steps: Vec<String>,
    /// One-way: once confirmed, minutes stay confirmed.
    pub is_confirmed: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FollowUpType {
    Email,
    Message,
    Note,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FollowUpDraft {
    pub id: String,
    #[serde(rename = "type")]
    pub draft_type: FollowUpType,
    pub title: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient: Option<Contact>,
}

/// A meeting, scheduled or already held.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Meeting {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub participants: Vec<Contact>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    pub status: MeetingStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transcript: Option<Vec<TranscriptEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minutes: Option<MeetingMinutes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_items: Option<Vec<Task>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub follow_up_drafts: Option<Vec<FollowUpDraft>>,
}
