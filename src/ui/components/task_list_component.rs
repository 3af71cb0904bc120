//! Task list: pending tasks followed by the completed section.

use crate::entities::{partition, Task, TaskPartition};
use crate::icons::IconService;
use crate::ui::components::scrollbar_helper::ScrollbarHelper;
use crate::ui::components::task_list_item_component::{
    CompletedHeaderItem, ListItem, SeparatorItem, TaskItem, TaskListItemType,
};
use crate::ui::core::{actions::Action, Component};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{block::BorderType, Block, Borders, List, ListItem as RatatuiListItem},
    Frame,
};

/// Renders the tasks of the current list.
///
/// Pending tasks come first in fixture order. When at least one task is
/// completed, a "Completed (N)" header follows with the completed tasks below
/// it, also in fixture order. Checkboxes and stars are display only.
pub struct TaskListComponent {
    pub tasks: Vec<Task>,
    pub icons: IconService,
    items: Vec<TaskListItemType>,
    scrollbar_helper: ScrollbarHelper,
}

impl Default for TaskListComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskListComponent {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            icons: IconService::default(),
            items: Vec::new(),
            scrollbar_helper: ScrollbarHelper::new(),
        }
    }

    pub fn update_data(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
        self.build_list_items();
    }

    /// Pending and completed tasks as displayed
    pub fn sections(&self) -> TaskPartition<'_> {
        partition(&self.tasks)
    }

    /// Rows in display order
    pub fn items(&self) -> &[TaskListItemType] {
        &self.items
    }

    /// First visible row
    pub fn scroll_offset(&self) -> usize {
        self.scrollbar_helper.offset()
    }

    fn build_list_items(&mut self) {
        let TaskPartition { pending, completed } = partition(&self.tasks);

        let mut items: Vec<TaskListItemType> = pending
            .into_iter()
            .map(|task| TaskListItemType::Task(Box::new(TaskItem::new(task.clone(), self.icons.clone()))))
            .collect();

        if !completed.is_empty() {
            items.push(TaskListItemType::Separator(SeparatorItem));
            items.push(TaskListItemType::CompletedHeader(CompletedHeaderItem::new(
                completed.len(),
                self.icons.section_toggle(),
            )));
            items.extend(
                completed
                    .into_iter()
                    .map(|task| TaskListItemType::Task(Box::new(TaskItem::new(task.clone(), self.icons.clone())))),
            );
        }

        log::debug!("Task list rebuilt with {} rows", items.len());
        self.items = items;
    }
}

impl Component for TaskListComponent {
    fn update(&mut self, action: Action) -> Action {
        match &action {
            Action::IconThemeChanged(theme) => {
                self.icons.set_theme(*theme);
                // Rows carry their own icon service
                self.build_list_items();
            }
            Action::Scroll(movement) => self.scrollbar_helper.scroll(*movement),
            _ => {}
        }
        action
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let total_items = self.items.len();
        let (list_area, scrollbar_area) = ScrollbarHelper::calculate_areas(rect, total_items);

        let row_width = list_area.width.saturating_sub(2) as usize;
        let rows: Vec<RatatuiListItem> = self.items.iter().map(|item| item.render(row_width)).collect();

        let available_height = rect.height.saturating_sub(2) as usize;
        self.scrollbar_helper.update_state(total_items, available_height);
        let mut list_state = self.scrollbar_helper.list_state();

        let list = List::new(rows).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::DarkGray)),
        );

        f.render_stateful_widget(list, list_area, &mut list_state);
        self.scrollbar_helper.render(f, scrollbar_area);
    }
}
