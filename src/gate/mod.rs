//! Navigation gate driven by `onboarding.completed`.
//!
//! Until onboarding is complete every path leads to the onboarding flow; after
//! that the full navigation surface opens and onboarding itself redirects away.

use serde::Serialize;

pub const ONBOARDING_PATH: &str = "/onboarding";
pub const HOME_PATH: &str = "/dashboard";

/// Top-level sections reachable once onboarding is complete.
const SECTIONS: &[&str] = &[
    "/dashboard",
    "/assistant",
    "/projects",
    "/knowledge",
    "/meetings",
    "/notifications",
    "/settings",
];

/// Sections that also accept a single id segment, e.g. `/projects/p1`.
const SECTIONS_WITH_ID: &[&str] = &["/projects", "/meetings"];

/// Outcome of resolving a navigation path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum Navigation {
    Allow,
    Redirect { to: String },
    NotFound,
}

pub fn resolve(path: &str, onboarding_completed: bool) -> Navigation {
    let path = normalize(path);

    if !onboarding_completed {
        return if path == ONBOARDING_PATH {
            Navigation::Allow
        } else {
            Navigation::Redirect {
                to: ONBOARDING_PATH.to_string(),
            }
        };
    }

    if path == "/" || path == ONBOARDING_PATH {
        return Navigation::Redirect {
            to: HOME_PATH.to_string(),
        };
    }

    if SECTIONS.contains(&path) || is_section_with_id(path) {
        Navigation::Allow
    } else {
        Navigation::NotFound
    }
}

fn normalize(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or("");
    match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    }
}

fn is_section_with_id(path: &str) -> bool {
    SECTIONS_WITH_ID.iter().any(|section| {
        path.strip_prefix(section)
            .and_then(|rest| rest.strip_prefix('/'))
            .is_some_and(|id| !id.is_empty() && !id.contains('/'))
    })
}
