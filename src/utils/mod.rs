//! Utility modules for todoview.
//!
//! - [`color`] - Hex accent colors to terminal colors
//! - [`datetime`] - Date formatting for the list header

pub mod color;
pub mod datetime;
