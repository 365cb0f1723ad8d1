use crate::models::task::Task;
use crate::sort::SortOrder;
use log::debug;
use std::fmt;

/// Anything that can live inside a list: a leaf task (possibly decorated)
/// or a nested sublist
pub enum TaskComponent {
    Task(Box<dyn Task>),
    List(TaskList),
}

impl TaskComponent {
    pub fn is_task(&self) -> bool {
        matches!(self, TaskComponent::Task(_))
    }

    pub fn is_list(&self) -> bool {
        matches!(self, TaskComponent::List(_))
    }
}

impl fmt::Display for TaskComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskComponent::Task(task) => task.fmt(f),
            TaskComponent::List(list) => list.fmt(f),
        }
    }
}

/// Named container of task components, ordered by the sort policy bound at
/// construction.
///
/// The stored order is always exactly what the most recent `add` produced;
/// the list never reorders on its own. Adding takes the component by value,
/// so a list can never end up inside its own descendants.
pub struct TaskList {
    description: String,
    components: Vec<TaskComponent>,
    order: SortOrder,
}

impl TaskList {
    pub fn new(description: impl Into<String>, order: SortOrder) -> Self {
        Self {
            description: description.into(),
            components: Vec::new(),
            order,
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn order(&self) -> SortOrder {
        self.order
    }

    pub fn components(&self) -> &[TaskComponent] {
        &self.components
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Insert a component, letting the bound sort policy produce the new
    /// ordering. Duplicates are not checked for.
    pub fn add(&mut self, component: TaskComponent) {
        debug!(
            "list '{}': adding component ({} so far, {})",
            self.description,
            self.components.len(),
            self.order
        );
        let contents = std::mem::take(&mut self.components);
        self.components = self.order.sort(contents, component);
    }
}

impl fmt::Display for TaskList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} [{}] {{", self.description, self.order)?;
        for component in &self.components {
            writeln!(f, "{}", component)?;
        }
        f.write_str("}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::task::PlainTask;
    use chrono::NaiveDate;

    fn leaf(description: &str) -> TaskComponent {
        let date = NaiveDate::from_ymd_opt(2022, 4, 25).unwrap();
        TaskComponent::Task(Box::new(PlainTask::new(description, date)))
    }

    #[test]
    fn test_new_list_is_empty() {
        let list = TaskList::new("My Todos", SortOrder::Added);
        assert!(list.is_empty());
        assert_eq!(list.description(), "My Todos");
        assert_eq!(list.order(), SortOrder::Added);
    }

    #[test]
    fn test_add_stores_policy_result() {
        let mut list = TaskList::new("My Todos", SortOrder::Added);
        list.add(leaf("First"));
        list.add(leaf("Second"));
        assert_eq!(list.len(), 2);
        // Added order puts the newest leaf task in front
        match &list.components()[0] {
            TaskComponent::Task(task) => assert_eq!(task.description(), "Second"),
            TaskComponent::List(_) => panic!("expected a leaf task"),
        }
    }

    #[test]
    fn test_empty_list_rendering() {
        let list = TaskList::new("My Todos", SortOrder::Added);
        assert_eq!(list.to_string(), "My Todos [Add Order] {\n}");
    }

    #[test]
    fn test_nested_list_renders_inline() {
        let mut inner = TaskList::new("Fruits", SortOrder::Alphabetical);
        inner.add(leaf("Apples"));
        let mut outer = TaskList::new("Grocery", SortOrder::Added);
        outer.add(TaskComponent::List(inner));
        assert_eq!(
            outer.to_string(),
            "Grocery [Add Order] {\n\
             Fruits [Alphabetical Order] {\n\
             -Apples 2022-04-25 [Created]\n\
             }\n\
             }"
        );
    }
}
