//! User settings, connectors and avatars.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Named notification toggles.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NotificationPreferences {
    pub desktop: bool,
    pub mobile: bool,
    pub daily_summary: bool,
    #[serde(rename = "meetingReminder15min")]
    pub meeting_reminder_15min: bool,
    #[serde(rename = "meetingReminder5min")]
    pub meeting_reminder_5min: bool,
    pub critical_messages: bool,
}

/// Partial update for [`NotificationPreferences`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationPreferencesPatch {
    #[serde(default)]
    pub desktop: Option<bool>,
    #[serde(default)]
    pub mobile: Option<bool>,
    #[serde(default)]
    pub daily_summary: Option<bool>,
    #[serde(default, rename = "meetingReminder15min")]
    pub meeting_reminder_15min: Option<bool>,
    #[serde(default, rename = "meetingReminder5min")]
    pub meeting_reminder_5min: Option<bool>,
    #[serde(default)]
    pub critical_messages: Option<bool>,
}

impl NotificationPreferences {
    pub fn merged(&self, patch: &NotificationPreferencesPatch) -> Self {
        Self {
            desktop: patch.desktop.unwrap_or(self.desktop),
            mobile: patch.mobile.unwrap_or(self.mobile),
            daily_summary: patch.daily_summary.unwrap_or(self.daily_summary),
            meeting_reminder_15min: patch
                .meeting_reminder_15min
                .unwrap_or(self.meeting_reminder_15min),
            meeting_reminder_5min: patch
                .meeting_reminder_5min
                .unwrap_or(self.meeting_reminder_5min),
            critical_messages: patch.critical_messages.unwrap_or(self.critical_messages),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ConnectorType {
    Gmail,
    Outlook,
    Whatsapp,
    Gdrive,
    Onedrive,
    Slack,
    Teams,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ConnectorStatus {
    Connected,
    Disconnected,
    Syncing,
    Error,
}

/// An external data source integration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Connector {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub connector_type: ConnectorType,
    pub status: ConnectorStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_sync: Option<DateTime<Utc>>,
    pub icon: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserSettings {
    /// Single source of truth for the chosen avatar, onboarding included.
    pub selected_avatar_id: String,
    pub notification_preferences: NotificationPreferences,
    pub connectors: Vec<Connector>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Avatar {
    pub id: String,
    pub name: String,
    pub image_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice_id: Option<String>,
}
