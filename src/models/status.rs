use serde::{Deserialize, Serialize};
use std::fmt;

/// Task status (lifecycle state)
///
/// State model:
/// - Created: task exists but work has not started
/// - InProgress: task is being worked on
/// - Completed: task is done (terminal)
///
/// Transitions only move forward; a completed task never regresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    Created,
    InProgress,
    Completed,
}

impl TaskStatus {
    /// Status after requesting completion
    pub fn complete(self) -> TaskStatus {
        match self {
            TaskStatus::Created | TaskStatus::InProgress => TaskStatus::Completed,
            TaskStatus::Completed => TaskStatus::Completed,
        }
    }

    /// Status after starting (or continuing) work
    ///
    /// Completed tasks stay completed; there is no way back to an
    /// active state.
    pub fn in_progress(self) -> TaskStatus {
        match self {
            TaskStatus::Created | TaskStatus::InProgress => TaskStatus::InProgress,
            TaskStatus::Completed => TaskStatus::Completed,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Created => "Created",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Completed => "Completed",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Created" => Some(TaskStatus::Created),
            "In Progress" => Some(TaskStatus::InProgress),
            "Completed" => Some(TaskStatus::Completed),
            _ => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
