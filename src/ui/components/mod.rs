//! Screen components

pub mod header_component;
pub mod main_content_component;
pub mod right_panel_component;
pub mod scrollbar_helper;
pub mod sidebar_component;
pub mod sidebar_item_component;
pub mod task_list_component;
pub mod task_list_item_component;

// Component exports
pub use header_component::HeaderComponent;
pub use main_content_component::MainContentComponent;
pub use right_panel_component::RightPanelComponent;
pub use sidebar_component::SidebarComponent;
pub use task_list_component::TaskListComponent;
