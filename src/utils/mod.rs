//! Utility functions module.
//!
//! This module contains text helpers shared by the render functions.

pub mod text;
