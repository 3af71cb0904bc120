//! Constants used throughout the application
//!
//! This module centralizes UI text and layout values so the components
//! stay free of magic strings.

// Screen text
pub const APP_TITLE: &str = "To Do";
pub const LISTS_SECTION_TITLE: &str = "Lists";
pub const SUGGESTIONS_MESSAGE: &str = "Good morning! Here are some tasks for today";
pub const ADD_TASK_PLACEHOLDER: &str = "Add a task";
pub const COMPLETED_SECTION_TITLE: &str = "Completed";
pub const DETAIL_CREATED_FOOTER: &str = "Created today";
pub const KEY_HINTS: &str = "q: quit • i: icons";

// Detail panel options
pub const DETAIL_ADD_DUE_DATE: &str = "Add due date";
pub const DETAIL_REMIND_ME: &str = "Remind me";
pub const DETAIL_REPEAT: &str = "Repeat";
pub const DETAIL_ADD_NOTE: &str = "Add note";

// Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const CONFIG_FILE_NAME: &str = "todoview.toml";
pub const APP_DIR_NAME: &str = "todoview";
pub const LOG_FILE_NAME: &str = "todoview.log";

// UI Layout Constants
/// Minimum sidebar width in columns
pub const SIDEBAR_MIN_WIDTH: u16 = 15;
/// Maximum sidebar width in columns
pub const SIDEBAR_MAX_WIDTH: u16 = 50;
/// Default sidebar width in columns
pub const SIDEBAR_DEFAULT_WIDTH: u16 = 30;
/// Minimum detail panel width in columns
pub const DETAIL_PANEL_MIN_WIDTH: u16 = 20;
/// Maximum detail panel width in columns
pub const DETAIL_PANEL_MAX_WIDTH: u16 = 60;
/// Default detail panel width in columns
pub const DETAIL_PANEL_DEFAULT_WIDTH: u16 = 32;
/// Minimum main area width to preserve usability
pub const MAIN_AREA_MIN_WIDTH: u16 = 20;
/// Header bar height in rows
pub const HEADER_HEIGHT: u16 = 1;
