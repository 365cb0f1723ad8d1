//! Todotree - hierarchical to-do lists as plain in-memory values
//!
//! This library provides the core building blocks for a nested to-do list:
//! - Lifecycle statuses for tasks with forward-only transitions
//! - Plain leaf tasks and decorators that add elapsed-time and
//!   status-history annotations without changing the task underneath
//! - Composite lists that keep their contents ordered by a sort policy
//!   chosen at construction
//! - Date literal parsing for task target dates
//!
//! # Example
//!
//! ```
//! use todotree::models::{PlainTask, TaskComponent, TaskList};
//! use todotree::sort::SortOrder;
//! use todotree::utils::date::parse_compact_date;
//!
//! let mut groceries = TaskList::new("Groceries", SortOrder::Alphabetical);
//! let date = parse_compact_date("20220427").unwrap();
//! groceries.add(TaskComponent::Task(Box::new(PlainTask::new("Apples", date))));
//! println!("{}", groceries);
//! ```

pub mod models;
pub mod sort;
pub mod utils;
