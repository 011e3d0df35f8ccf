//! Assistant conversation log models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AssistantRole {
    User,
    Assistant,
}

/// How the assistant panel is presented.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AssistantMode {
    Avatar,
    #[default]
    Chat,
}

/// A workspace item the assistant cited in a reply.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MessageSource {
    #[serde(rename = "type")]
    pub source_type: String,
    pub name: String,
    pub id: String,
}

/// One entry of the append-only conversation log.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssistantMessage {
    pub id: String,
    pub role: AssistantRole,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<MessageSource>>,
}
