use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Contact, Priority};

/// A body of work that tasks, messages, meetings and documents hang off.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: String,
    pub priority: Priority,
    pub color: String,
    pub participants: Vec<Contact>,
    pub created_at: DateTime<Utc>,
}
