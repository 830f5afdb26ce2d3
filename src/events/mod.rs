//! Event handling module.
//!
//! Terminal events are polled on a background thread and translated into
//! state mutations on the render thread.

pub mod terminal;
