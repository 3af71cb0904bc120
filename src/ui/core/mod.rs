//! Core UI functionality for todoview.
//!
//! - [`actions`] - Action definitions passed between components
//! - [`component`] - Base component trait and rendering abstraction
//! - [`event_handler`] - Terminal event polling
//!
//! Components implement [`Component`]. Key events are turned into
//! [`Action`]s by the app component, which then passes each action down
//! through its children's `update` so they can react to it.

pub mod actions;
pub mod component;
pub mod event_handler;

pub use actions::{Action, ScrollMove};
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
