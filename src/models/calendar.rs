//! Calendar event model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Contact;

/// A calendar entry, possibly overlapping another one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub participants: Vec<Contact>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meeting_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_conflict: Option<bool>,
    /// Id of the event this one overlaps.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conflict_with: Option<String>,
}

/// Partial update for a calendar event.
///
/// Absent fields keep their current value. For the optional fields an explicit
/// `null` clears the value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEventPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(
        default,
        deserialize_with = "super::common::present",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<DateTime<Utc>>,
    #[serde(
        default,
        deserialize_with = "super::common::present",
        skip_serializing_if = "Option::is_none"
    )]
    pub location: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub participants: Option<Vec<Contact>>,
    #[serde(
        default,
        deserialize_with = "super::common::present",
        skip_serializing_if = "Option::is_none"
    )]
    pub project_id: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "super::common::present",
        skip_serializing_if = "Option::is_none"
    )]
    pub meeting_id: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "super::common::present",
        skip_serializing_if = "Option::is_none"
    )]
    pub is_conflict: Option<Option<bool>>,
    #[serde(
        default,
        deserialize_with = "super::common::present",
        skip_serializing_if = "Option::is_none"
    )]
    pub conflict_with: Option<Option<String>>,
}

/// Patched value if the patch carries the key, otherwise the current one.
fn overlay<T: Clone>(patched: &Option<T>, current: &T) -> T {
    patched.as_ref().unwrap_or(current).clone()
}

impl CalendarEvent {
    /// Shallow-merge a patch over this event. No interval validation is done.
    pub fn merged(&self, patch: &CalendarEventPatch) -> Self {
        Self {
            id: self.id.clone(),
            title: overlay(&patch.title, &self.title),
            description: overlay(&patch.description, &self.description),
            start: overlay(&patch.start, &self.start),
            end: overlay(&patch.end, &self.end),
            location: overlay(&patch.location, &self.location),
            participants: overlay(&patch.participants, &self.participants),
            project_id: overlay(&patch.project_id, &self.project_id),
            meeting_id: overlay(&patch.meeting_id, &self.meeting_id),
            is_conflict: overlay(&patch.is_conflict, &self.is_conflict),
            conflict_with: overlay(&patch.conflict_with, &self.conflict_with),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patch_null_clears_and_absent_keeps() {
        let patch: CalendarEventPatch =
            serde_json::from_str(r#"{"location":null,"title":"Moved"}"#).unwrap();
        assert_eq!(patch.location, Some(None));
        assert_eq!(patch.description, None);
        assert_eq!(patch.title.as_deref(), Some("Moved"));
    }
}
