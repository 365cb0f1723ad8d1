// Sort policies for list contents
//
// Each policy is a pure function of (current contents, new element) and
// returns the full reordered contents. Only leaf tasks are ever compared;
// sublists keep their relative order and sit after the tasks.

use crate::models::list::{TaskComponent, TaskList};
use crate::models::task::Task;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Insertion/ordering policy for a list's contents, fixed when the list is
/// created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    /// Leaf tasks go to the front (newest first), sublists to the back
    Added,
    /// Leaf tasks sorted ascending by description, sublists after
    Alphabetical,
    /// Leaf tasks sorted ascending by target date, sublists after
    TargetDate,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Added => "Add Order",
            SortOrder::Alphabetical => "Alphabetical Order",
            SortOrder::TargetDate => "Target Date Order",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Add Order" => Some(SortOrder::Added),
            "Alphabetical Order" => Some(SortOrder::Alphabetical),
            "Target Date Order" => Some(SortOrder::TargetDate),
            _ => None,
        }
    }

    /// Insert `new` into `contents` and return the reordered whole.
    ///
    /// The comparing policies re-sort the entire contents on every call
    /// rather than doing an incremental insert; sorts are stable, so ties
    /// keep their insertion order.
    pub fn sort(
        self,
        mut contents: Vec<TaskComponent>,
        new: TaskComponent,
    ) -> Vec<TaskComponent> {
        match self {
            SortOrder::Added => {
                match new {
                    task @ TaskComponent::Task(_) => contents.insert(0, task),
                    list @ TaskComponent::List(_) => contents.push(list),
                }
                contents
            }
            SortOrder::Alphabetical => {
                contents.push(new);
                let (mut tasks, lists) = split(contents);
                tasks.sort_by(|a, b| a.description().cmp(b.description()));
                rejoin(tasks, lists)
            }
            SortOrder::TargetDate => {
                contents.push(new);
                let (mut tasks, lists) = split(contents);
                tasks.sort_by_key(|task| task.target_date());
                rejoin(tasks, lists)
            }
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Partition contents into leaf tasks and sublists, each keeping its
/// relative order
fn split(contents: Vec<TaskComponent>) -> (Vec<Box<dyn Task>>, Vec<TaskList>) {
    let mut tasks = Vec::new();
    let mut lists = Vec::new();
    for component in contents {
        match component {
            TaskComponent::Task(task) => tasks.push(task),
            TaskComponent::List(list) => lists.push(list),
        }
    }
    (tasks, lists)
}

fn rejoin(tasks: Vec<Box<dyn Task>>, lists: Vec<TaskList>) -> Vec<TaskComponent> {
    tasks
        .into_iter()
        .map(TaskComponent::Task)
        .chain(lists.into_iter().map(TaskComponent::List))
        .collect()
}
