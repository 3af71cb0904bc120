use crate::constants::COMPLETED_SECTION_TITLE;
use crate::entities::Task;
use crate::icons::IconService;
use crate::ui::layout::LayoutManager;
use crate::utils::color::MUTED;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::ListItem as RatatuiListItem,
};

/// Star color for important tasks
const STAR_IMPORTANT: Color = Color::Rgb(255, 185, 0);

/// Trait for rows that can be displayed in the task list
pub trait ListItem {
    /// Render this row as a ratatui ListItem filling `width` columns
    fn render(&self, width: usize) -> RatatuiListItem<'static>;
}

/// Enum representing different types of rows that can appear in the task list
#[derive(Debug, Clone)]
pub enum TaskListItemType {
    Task(Box<TaskItem>),
    CompletedHeader(CompletedHeaderItem),
    Separator(SeparatorItem),
}

impl ListItem for TaskListItemType {
    fn render(&self, width: usize) -> RatatuiListItem<'static> {
        match self {
            Self::Task(item) => item.render(width),
            Self::CompletedHeader(item) => item.render(width),
            Self::Separator(item) => item.render(width),
        }
    }
}

/// A task row: checkbox, text and star
#[derive(Debug, Clone)]
pub struct TaskItem {
    pub task: Task,
    pub icons: IconService,
}

impl TaskItem {
    pub fn new(task: Task, icons: IconService) -> Self {
        Self { task, icons }
    }
}

impl ListItem for TaskItem {
    fn render(&self, width: usize) -> RatatuiListItem<'static> {
        let (checkbox_style, text_style) = if self.task.completed {
            (
                Style::default().fg(Color::Green),
                Style::default().fg(MUTED).add_modifier(Modifier::CROSSED_OUT),
            )
        } else {
            (Style::default().fg(Color::White), Style::default().fg(Color::White))
        };

        let star_style = if self.task.important {
            Style::default().fg(STAR_IMPORTANT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
        };

        let line = LayoutManager::spread_line(
            vec![
                Span::styled(self.icons.checkbox(self.task.completed), checkbox_style),
                Span::raw(" "),
                Span::styled(self.task.text.clone(), text_style),
            ],
            vec![Span::styled(self.icons.star(self.task.important), star_style)],
            width,
        );

        RatatuiListItem::new(line)
    }
}

/// "Completed (N)" header above the completed tasks
#[derive(Debug, Clone)]
pub struct CompletedHeaderItem {
    pub count: usize,
    pub toggle: &'static str,
}

impl CompletedHeaderItem {
    pub fn new(count: usize, toggle: &'static str) -> Self {
        Self { count, toggle }
    }

    pub fn title(&self) -> String {
        format!("{} ({})", COMPLETED_SECTION_TITLE, self.count)
    }
}

impl ListItem for CompletedHeaderItem {
    fn render(&self, _width: usize) -> RatatuiListItem<'static> {
        let style = Style::default().add_modifier(Modifier::BOLD).fg(Color::Cyan);
        RatatuiListItem::new(Line::from(vec![
            Span::styled(self.title(), style),
            Span::raw(" "),
            Span::styled(self.toggle, style),
        ]))
    }
}

/// A blank spacer row
#[derive(Debug, Clone, Default)]
pub struct SeparatorItem;

impl ListItem for SeparatorItem {
    fn render(&self, _width: usize) -> RatatuiListItem<'static> {
        RatatuiListItem::new(Line::from(Span::raw(" ")))
    }
}
