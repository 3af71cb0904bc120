//! Built-in screen data
//!
//! The screen has no data source: every list and task it shows is defined
//! here and built once on first access.

use crate::entities::{SidebarList, Task};
use chrono::NaiveDate;
use once_cell::sync::Lazy;

/// Everything the screen displays
#[derive(Debug, Clone)]
pub struct Fixture {
    /// Smart lists shown at the top of the sidebar
    pub sidebar_lists: Vec<SidebarList>,
    /// User lists shown under the "Lists" header
    pub custom_lists: Vec<SidebarList>,
    pub tasks: Vec<Task>,
    /// Index into `sidebar_lists` of the list shown in the main area
    pub current_list: usize,
    /// Index into `tasks` of the task shown in the detail panel
    pub selected_task: usize,
    /// Date printed under the list title
    pub list_date: NaiveDate,
}

static FIXTURE: Lazy<Fixture> = Lazy::new(Fixture::builtin);

/// Shared, read-only fixture for the whole process
pub fn fixture() -> &'static Fixture {
    &FIXTURE
}

impl Fixture {
    pub fn builtin() -> Self {
        let sidebar_lists = vec![
            SidebarList::new("1", "My Day", "☀️", 3, "#0078d4"),
            SidebarList::new("2", "Important", "⭐", 2, "#d83b01"),
            SidebarList::new("3", "Planned", "📅", 1, "#107c10"),
            SidebarList::new("4", "All", "📝", 8, "#5c2d91"),
            SidebarList::new("5", "Completed", "✅", 5, "#0078d4"),
            SidebarList::new("6", "Tasks", "🏠", 4, "#0078d4"),
        ];

        let custom_lists = vec![
            SidebarList::new("7", "Work Projects", "📋", 3, "#8764b8"),
            SidebarList::new("8", "Personal", "🏠", 2, "#00bcf2"),
        ];

        let tasks = vec![
            Task::new("1", "Review quarterly reports", false, true, true),
            Task::new("2", "Call client about project update", false, false, true),
            Task::new("3", "Prepare presentation slides", false, true, true),
            Task::new("4", "Team meeting at 3 PM", false, false, false),
            Task::new("5", "Update project documentation", true, false, false),
            Task::new("6", "Send weekly status report", true, false, false),
        ];

        Self {
            sidebar_lists,
            custom_lists,
            tasks,
            current_list: 0,
            selected_task: 0,
            // 2025-06-09 is a valid calendar date
            list_date: NaiveDate::from_ymd_opt(2025, 6, 9).unwrap_or_default(),
        }
    }

    /// The list whose tasks fill the main area
    pub fn current_list(&self) -> Option<&SidebarList> {
        self.sidebar_lists.get(self.current_list)
    }

    /// The task shown in the detail panel
    pub fn selected_task(&self) -> Option<&Task> {
        self.tasks.get(self.selected_task)
    }
}
