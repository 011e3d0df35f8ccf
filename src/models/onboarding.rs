//! Onboarding progress model.

use serde::{Deserialize, Serialize};

/// Progress through the first-run flow.
///
/// `completed` gates the whole client: until it is true every navigation lands on
/// the onboarding flow. The selected avatar lives in `UserSettings` only.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingState {
    pub completed: bool,
    pub current_step: u32,
    /// May contain duplicates; adds are not de-duplicated.
    #[serde(default)]
    pub connected_sources: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_project_id: Option<String>,
    #[serde(default)]
    pub priority_contact_ids: Vec<String>,
}
