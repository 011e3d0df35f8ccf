//! Types shared across several entities.

use serde::{Deserialize, Deserializer, Serialize};

/// Priority classification used by messages, tasks and projects.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// Treat a present key as `Some`, even when its value is `null`.
///
/// Paired with `#[serde(default)]` on an `Option<Option<T>>`, this separates an
/// absent key (`None`) from an explicit `null` (`Some(None)`).
pub(crate) fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}
