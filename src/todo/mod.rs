//! Todo domain module.
//!
//! This module holds the todo record itself, the fixed seed list the
//! application starts from, and the environment (clock and id source) that
//! state transitions draw fresh timestamps and ids from.

mod environment;
mod resource;
mod seed;

pub use environment::{Clock, Environment, IdSource, SystemClock, TimestampIds};
pub use resource::{format_date, Todo, TodoId};
pub use seed::initial_todos;

#[cfg(test)]
pub use environment::FixedClock;
