//! todoview - a static To Do screen in the terminal
//!
//! Renders a to-do application screen (header, sidebar of lists, the tasks of
//! the current list and a detail panel for one task) from built-in data with
//! Ratatui. The screen is read-only: its checkboxes, stars and input are
//! drawn but inert.
//!
//! # Modules
//!
//! * [`config`] - Application configuration management
//! * [`entities`] - List and task records, and the completed/pending split
//! * [`fixture`] - The built-in lists and tasks
//! * [`ui`] - Terminal user interface components
//! * [`utils`] - Utility functions and helpers

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Plain records for lists and tasks
pub mod entities;

/// Built-in screen data
pub mod fixture;

/// Icon definitions for visual representation in the TUI
pub mod icons;

/// File logging setup
pub mod logger;

/// Terminal user interface components and rendering
pub mod ui;

/// Utility functions for colors, dates and other helpers
pub mod utils;

pub use entities::{SidebarList, Task};
