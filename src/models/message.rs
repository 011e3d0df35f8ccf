//! Message and thread models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Contact, Priority};

/// Channel a message arrived on.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MessageChannel {
    Email,
    Whatsapp,
    Slack,
    Teams,
}

/// An inbound message from any connected channel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub from: Contact,
    pub to: Vec<Contact>,
    pub subject: String,
    pub preview: String,
    pub body: String,
    pub channel: MessageChannel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    pub priority: Priority,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority_reason: Option<String>,
    pub timestamp: DateTime<Utc>,
    /// Only ever flips from false to true.
    pub is_read: bool,
    pub has_attachments: bool,
    pub thread_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_replies: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MessageThread {
    pub id: String,
    pub messages: Vec<Message>,
    pub subject: String,
    pub participants: Vec<Contact>,
}
