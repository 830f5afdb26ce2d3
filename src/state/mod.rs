//! Application state management module.
//!
//! This module contains the state management for the application, including:
//! - `TodoState`, the immutable store of todo records and form values
//! - The pure `reduce` transition function and its `Action` set
//! - The search/tab filter deriving the visible records
//! - The terminal-facing `State` wrapper holding widget state

mod filter;
mod form;
mod navigation;
mod reducer;
mod store;

pub use filter::visible_todos;
pub use form::{FormField, FormMode, PendingForm};
pub use navigation::{Mode, Tab};
pub use reducer::{reduce, Action};
pub use store::TodoState;

// State struct, methods and Default impl are in state_impl.rs
#[path = "state_impl.rs"]
mod state_impl;

pub use state_impl::State;
