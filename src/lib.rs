//! Terminal user interface for a small in-memory todo list.
//!
//! Records are held in an immutable store updated by a pure reducer; the
//! `ui` module renders the current snapshot with ratatui and the `events`
//! module turns key presses into store actions.

pub mod app;
pub mod config;
pub mod error;
pub mod events;
pub mod logger;
pub mod state;
pub mod todo;
pub mod ui;
pub mod utils;
