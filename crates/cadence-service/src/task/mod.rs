//! Task scheduling on create, update and completion.

mod complete;
mod prepare;

pub use complete::{Completion, complete_task};
pub use prepare::prepare_task;

use serde::{Deserialize, Serialize};

/// A task as submitted on create or update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TaskRequest {
    pub title: String,
    /// `YYYYMMDD`, empty or `today` for the current day.
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub comment: String,
    /// Repeat rule expression, empty for a one-shot task.
    #[serde(default)]
    pub repeat: String,
}

/// A validated task ready to be stored, with its date resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledTask {
    pub title: String,
    /// Canonical `YYYYMMDD`.
    pub date: String,
    pub comment: String,
    pub repeat: String,
}

impl ScheduledTask {
    /// One-shot tasks have no repeat rule and never reach the engine.
    #[must_use]
    pub fn is_recurring(&self) -> bool {
        !self.repeat.is_empty()
    }
}
