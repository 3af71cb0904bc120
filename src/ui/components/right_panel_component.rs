//! Detail panel for the selected task.

use crate::constants::{DETAIL_ADD_DUE_DATE, DETAIL_ADD_NOTE, DETAIL_CREATED_FOOTER, DETAIL_REMIND_ME, DETAIL_REPEAT};
use crate::entities::Task;
use crate::icons::IconService;
use crate::ui::core::{actions::Action, Component};
use crate::ui::layout::LayoutManager;
use crate::utils::color::MUTED;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{block::BorderType, Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows offered under the task title
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailOption {
    DueDate,
    Reminder,
    Repeat,
    Note,
}

impl DetailOption {
    pub const ALL: [DetailOption; 4] = [
        DetailOption::DueDate,
        DetailOption::Reminder,
        DetailOption::Repeat,
        DetailOption::Note,
    ];

    pub fn text(self) -> &'static str {
        match self {
            DetailOption::DueDate => DETAIL_ADD_DUE_DATE,
            DetailOption::Reminder => DETAIL_REMIND_ME,
            DetailOption::Repeat => DETAIL_REPEAT,
            DetailOption::Note => DETAIL_ADD_NOTE,
        }
    }

    pub fn icon(self, icons: &IconService) -> &'static str {
        let detail = icons.icons().detail;
        match self {
            DetailOption::DueDate => detail.due_date,
            DetailOption::Reminder => detail.reminder,
            DetailOption::Repeat => detail.repeat,
            DetailOption::Note => detail.note,
        }
    }

    fn line(self, icons: &IconService) -> Line<'static> {
        Line::from(vec![
            Span::raw(self.icon(icons)),
            Span::raw("  "),
            Span::styled(self.text(), Style::default().fg(Color::White)),
        ])
    }
}

/// Detail panel: selected task title, detail options and a creation footer
pub struct RightPanelComponent {
    pub selected_task: Option<Task>,
    pub icons: IconService,
}

impl Default for RightPanelComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl RightPanelComponent {
    pub fn new() -> Self {
        Self {
            selected_task: None,
            icons: IconService::default(),
        }
    }

    pub fn update_data(&mut self, selected_task: Option<Task>) {
        self.selected_task = selected_task;
    }
}

impl Component for RightPanelComponent {
    fn update(&mut self, action: Action) -> Action {
        if let Action::IconThemeChanged(theme) = &action {
            self.icons.set_theme(*theme);
        }
        action
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(rect);
        f.render_widget(block, rect);

        let Some(task) = &self.selected_task else {
            return;
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(inner);

        let close = self.icons.close();
        let (title_area, close_area) = LayoutManager::trailing_slot(chunks[0], close.chars().count() as u16 + 1);
        let title = Paragraph::new(Span::styled(
            task.text.clone(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ))
        .wrap(Wrap { trim: true });
        f.render_widget(title, title_area);
        f.render_widget(
            Paragraph::new(Span::styled(close, Style::default().fg(MUTED))).alignment(Alignment::Right),
            close_area,
        );

        let options: Vec<Line> = DetailOption::ALL
            .iter()
            .flat_map(|option| [option.line(&self.icons), Line::default()])
            .collect();
        f.render_widget(Paragraph::new(options), chunks[1]);

        f.render_widget(
            Paragraph::new(Span::styled(DETAIL_CREATED_FOOTER, Style::default().fg(MUTED)))
                .alignment(Alignment::Center),
            chunks[2],
        );
    }
}
