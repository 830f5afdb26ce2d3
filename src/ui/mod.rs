//! User interface module.
//!
//! This module handles all UI rendering using the `ratatui` library, including:
//! - Page layout (banner, search, tabs, form, table, log, footer)
//! - Theme management
//! - Styling helpers
//! - The delete confirmation modal

type Frame<'a> = ratatui::Frame<'a>;

mod render;
mod theme;
mod widgets;

pub use render::render;
pub use theme::{ColorSpec, Theme};
