//! UI module for todoview
//!
//! This module handles the screen components, layout, rendering and the
//! terminal event loop.

pub mod app_component;
pub mod components;
pub mod core;
pub mod layout;
pub mod renderer;

pub use app_component::AppComponent;
pub use layout::LayoutManager;
pub use renderer::run_app;
