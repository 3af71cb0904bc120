//! Top bar with the menu button, app title, search and profile buttons.

use crate::constants::APP_TITLE;
use crate::icons::IconService;
use crate::ui::core::{actions::Action, Component};
use crate::ui::layout::LayoutManager;
use crate::utils::color::DEFAULT_ACCENT;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::Paragraph,
    Frame,
};

/// Application header bar. The buttons it shows do nothing.
pub struct HeaderComponent {
    pub icons: IconService,
}

impl HeaderComponent {
    pub fn new(icons: IconService) -> Self {
        Self { icons }
    }
}

impl Component for HeaderComponent {
    fn update(&mut self, action: Action) -> Action {
        if let Action::IconThemeChanged(theme) = &action {
            self.icons.set_theme(*theme);
        }
        action
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let header = self.icons.icons().header;
        let bar_style = Style::default().bg(DEFAULT_ACCENT).fg(Color::White);
        let title_style = bar_style.add_modifier(Modifier::BOLD);

        let line = LayoutManager::spread_line(
            vec![
                Span::styled(format!(" {} ", header.menu), bar_style),
                Span::styled(APP_TITLE, title_style),
            ],
            vec![
                Span::styled(header.search, bar_style),
                Span::styled("  ", bar_style),
                Span::styled(header.profile, bar_style),
                Span::styled(" ", bar_style),
            ],
            rect.width as usize,
        );

        f.render_widget(Paragraph::new(line).style(bar_style), rect);
    }
}
