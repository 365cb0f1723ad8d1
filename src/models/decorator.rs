// Task decorators: wrap a task to add derived display behavior without
// altering the task underneath. Chains are linear; every mutation forwards
// down to the single plain task at the base.

use crate::models::status::TaskStatus;
use crate::models::task::Task;
use chrono::{DateTime, NaiveDate, Utc};
use std::fmt;

/// Adds an elapsed-days annotation to a task's rendering.
///
/// The creation timestamp is fixed at wrap time and independent of the
/// task's own data; elapsed days are computed against the current time
/// whenever the task is rendered.
pub struct ElapsedTime {
    inner: Box<dyn Task>,
    created_at: DateTime<Utc>,
}

impl ElapsedTime {
    pub fn new(inner: Box<dyn Task>, created_at: DateTime<Utc>) -> Self {
        Self { inner, created_at }
    }

    /// Wrap a task with the creation timestamp taken from the wall clock
    pub fn starting_now(inner: Box<dyn Task>) -> Self {
        Self::new(inner, Utc::now())
    }

    /// Whole days since the creation timestamp, truncated
    pub fn elapsed_days(&self) -> i64 {
        (Utc::now() - self.created_at).num_days()
    }
}

impl Task for ElapsedTime {
    fn complete(&mut self) {
        self.inner.complete();
    }

    fn in_progress(&mut self) {
        self.inner.in_progress();
    }

    fn description(&self) -> &str {
        self.inner.description()
    }

    fn target_date(&self) -> NaiveDate {
        self.inner.target_date()
    }

    fn status(&self) -> TaskStatus {
        self.inner.status()
    }
}

impl fmt::Display for ElapsedTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}[Elapsed time: {} day(s)]",
            self.inner,
            self.elapsed_days()
        )
    }
}

/// Records the statuses a task has passed through since it was wrapped.
///
/// The history is append-only and seeded with the wrapped task's status at
/// wrap time. An entry is appended only when a transition actually changes
/// the status, so no two consecutive entries are equal.
pub struct TrackHistory {
    inner: Box<dyn Task>,
    history: Vec<TaskStatus>,
}

impl TrackHistory {
    pub fn new(inner: Box<dyn Task>) -> Self {
        let history = vec![inner.status()];
        Self { inner, history }
    }

    pub fn history(&self) -> &[TaskStatus] {
        &self.history
    }

    fn record(&mut self, next: TaskStatus) {
        if self.inner.status() != next {
            self.history.push(next);
        }
    }
}

impl Task for TrackHistory {
    fn complete(&mut self) {
        self.record(self.inner.status().complete());
        self.inner.complete();
    }

    fn in_progress(&mut self) {
        self.record(self.inner.status().in_progress());
        self.inner.in_progress();
    }

    fn description(&self) -> &str {
        self.inner.description()
    }

    fn target_date(&self) -> NaiveDate {
        self.inner.target_date()
    }

    fn status(&self) -> TaskStatus {
        self.inner.status()
    }
}

impl fmt::Display for TrackHistory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [Status History: ", self.inner)?;
        for (i, status) in self.history.iter().enumerate() {
            if i > 0 {
                f.write_str("->")?;
            }
            write!(f, "{}", status)?;
        }
        f.write_str("]")
    }
}
