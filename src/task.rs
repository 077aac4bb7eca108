//! Task data structure and related constants.
//!
//! A task is a text label plus a completion flag. Every task carries an identifier
//! generated when it is created, so toggles and removals never resolve against a
//! position that may have shifted since the view was drawn.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum task length accepted by a clamped input buffer.
pub const TASK_CHAR_LIMIT: usize = 30;

/// Preset inserted in bulk by the add-defaults action.
pub const DEFAULT_TASKS: [&str; 4] = ["Morning workout", "Check emails", "Team standup", "Review PRs"];

/// Stable identity of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(Uuid);

impl TaskId {
    /// Generate a fresh identifier.
    pub fn new() -> Self {
        TaskId(Uuid::new_v4())
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single to-do item belonging to one day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    pub completed: bool,
}

impl Task {
    /// Create an incomplete task with a fresh identifier.
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_state(text, false)
    }

    /// Create a task with an explicit completion flag.
    pub fn with_state(text: impl Into<String>, completed: bool) -> Self {
        Task {
            id: TaskId::new(),
            text: text.into(),
            completed,
        }
    }
}
