//! Data models for the Aria executive assistant.
//!
//! Field names serialize in camelCase so the client consumes them unchanged.

mod assistant;
mod calendar;
mod common;
mod contact;
mod knowledge;
mod meeting;
mod message;
mod notification;
mod onboarding;
mod project;
mod requests;
mod settings;
mod snapshot;
mod suggestion;
mod task;

pub use assistant::*;
pub use calendar::*;
pub use common::*;
pub use contact::*;
pub use knowledge::*;
pub use meeting::*;
pub use message::*;
pub use notification::*;
pub use onboarding::*;
pub use project::*;
pub use requests::*;
pub use settings::*;
pub use snapshot::*;
pub use suggestion::*;
pub use task::*;
