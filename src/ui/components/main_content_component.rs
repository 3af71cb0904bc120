//! Main content column: list title and date, suggestions banner, add-task
//! input and the task list.

use crate::constants::{ADD_TASK_PLACEHOLDER, SUGGESTIONS_MESSAGE};
use crate::entities::Task;
use crate::icons::IconService;
use crate::ui::components::task_list_component::TaskListComponent;
use crate::ui::core::{actions::Action, Component};
use crate::ui::layout::LayoutManager;
use crate::utils::color::{DEFAULT_ACCENT, MUTED};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{block::BorderType, Block, Borders, Paragraph},
    Frame,
};

/// Title of the current list with its date and a "more options" button
pub struct ListHeader<'a> {
    pub title: &'a str,
    pub date: &'a str,
}

impl ListHeader<'_> {
    pub fn render(&self, f: &mut Frame, area: Rect, icons: &IconService) {
        let more = icons.more_options();
        let (text_area, button_area) = LayoutManager::trailing_slot(area, more.chars().count() as u16 + 1);

        let text = Paragraph::new(vec![
            Line::from(Span::styled(
                self.title.to_string(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(self.date.to_string(), Style::default().fg(MUTED))),
        ]);
        f.render_widget(text, text_area);

        let button = Paragraph::new(Span::styled(more, Style::default().fg(Color::White))).alignment(Alignment::Right);
        f.render_widget(button, button_area);
    }
}

/// One-line tip with a close button
pub struct SuggestionsBanner<'a> {
    pub message: &'a str,
}

impl SuggestionsBanner<'_> {
    pub fn render(&self, f: &mut Frame, area: Rect, icons: &IconService) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(DEFAULT_ACCENT));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let line = LayoutManager::spread_line(
            vec![
                Span::raw(icons.suggestion()),
                Span::raw(" "),
                Span::styled(self.message.to_string(), Style::default().fg(Color::White)),
            ],
            vec![Span::styled(icons.close(), Style::default().fg(MUTED))],
            inner.width as usize,
        );
        f.render_widget(Paragraph::new(line), inner);
    }
}

/// Add-task input. Shows its placeholder only; typing is not supported.
pub struct AddTaskInput<'a> {
    pub placeholder: &'a str,
}

impl Default for AddTaskInput<'_> {
    fn default() -> Self {
        Self {
            placeholder: ADD_TASK_PLACEHOLDER,
        }
    }
}

impl AddTaskInput<'_> {
    pub fn render(&self, f: &mut Frame, area: Rect, icons: &IconService) {
        let line = Line::from(vec![
            Span::styled(
                icons.add(),
                Style::default().fg(DEFAULT_ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(self.placeholder.to_string(), Style::default().fg(MUTED)),
        ]);

        let input = Paragraph::new(line).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        f.render_widget(input, area);
    }
}

/// Main column for the current list
pub struct MainContentComponent {
    /// Current list name
    pub title: String,
    /// Formatted list date
    pub date: String,
    pub icons: IconService,
    task_list: TaskListComponent,
}

impl Default for MainContentComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl MainContentComponent {
    pub fn new() -> Self {
        Self {
            title: String::new(),
            date: String::new(),
            icons: IconService::default(),
            task_list: TaskListComponent::new(),
        }
    }

    pub fn update_data(&mut self, title: String, date: String, tasks: Vec<Task>) {
        self.title = title;
        self.date = date;
        self.task_list.icons = self.icons.clone();
        self.task_list.update_data(tasks);
    }

    pub fn task_list(&self) -> &TaskListComponent {
        &self.task_list
    }
}

impl Component for MainContentComponent {
    fn update(&mut self, action: Action) -> Action {
        if let Action::IconThemeChanged(theme) = &action {
            self.icons.set_theme(*theme);
        }
        self.task_list.update(action)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let areas = LayoutManager::main_content_layout(rect);

        ListHeader {
            title: &self.title,
            date: &self.date,
        }
        .render(f, areas.list_header, &self.icons);

        SuggestionsBanner {
            message: SUGGESTIONS_MESSAGE,
        }
        .render(f, areas.banner, &self.icons);

        AddTaskInput::default().render(f, areas.add_task, &self.icons);

        self.task_list.render(f, areas.tasks);
    }
}
