use crate::models::status::TaskStatus;
use chrono::NaiveDate;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Common capability surface for anything task-shaped: a plain task or a
/// decorated one. Decorators forward these operations to the task they wrap.
///
/// `Display` is part of the contract because a task's rendering is its only
/// externally observable surface; decorators extend the inner rendering with
/// their own annotations.
pub trait Task: fmt::Display {
    /// Move the task's status toward completion
    fn complete(&mut self);

    /// Move the task's status to in-progress
    fn in_progress(&mut self);

    fn description(&self) -> &str;

    fn target_date(&self) -> NaiveDate;

    fn status(&self) -> TaskStatus;
}

/// Plain task model: the leaf at the base of every decorator chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlainTask {
    pub description: String,
    pub target_date: NaiveDate,
    pub status: TaskStatus,
}

impl PlainTask {
    /// Create a new task in the `Created` state
    pub fn new(description: impl Into<String>, target_date: NaiveDate) -> Self {
        Self {
            description: description.into(),
            target_date,
            status: TaskStatus::Created,
        }
    }
}

impl Task for PlainTask {
    fn complete(&mut self) {
        let next = self.status.complete();
        debug!("task '{}': {} -> {}", self.description, self.status, next);
        self.status = next;
    }

    fn in_progress(&mut self) {
        let next = self.status.in_progress();
        debug!("task '{}': {} -> {}", self.description, self.status, next);
        self.status = next;
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn target_date(&self) -> NaiveDate {
        self.target_date
    }

    fn status(&self) -> TaskStatus {
        self.status
    }
}

impl fmt::Display for PlainTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "-{} {} [{}]",
            self.description,
            self.target_date.format("%Y-%m-%d"),
            self.status
        )
    }
}
