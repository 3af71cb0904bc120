//! Plain data records shown on the screen.
//!
//! Records are created once, when the fixture is built, and never change
//! afterwards.

pub mod sidebar_list;
pub mod task;

pub use sidebar_list::SidebarList;
pub use task::{partition, Task, TaskPartition};
