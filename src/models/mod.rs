// Core data models for Todotree
// These types represent the domain entities

pub mod decorator;
pub mod list;
pub mod status;
pub mod task;

pub use decorator::*;
pub use list::*;
pub use status::*;
pub use task::*;
