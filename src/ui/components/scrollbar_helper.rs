//! Scrollbar helper shared by the scrollable panes.
//!
//! The sidebar and the task list draw a scrollbar only when their rows
//! overflow the pane, so a short terminal still shows that content is cut off.
//! The helper also owns the pane's scroll offset so hidden rows stay reachable.

use crate::ui::core::ScrollMove;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{ListState, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

/// Scroll offset, scrollbar state, and layout and rendering for a bordered, scrollable pane.
pub struct ScrollbarHelper {
    state: ScrollbarState,
    offset: usize,
    content_length: usize,
    viewport_height: usize,
}

impl Default for ScrollbarHelper {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollbarHelper {
    pub fn new() -> Self {
        Self {
            state: ScrollbarState::new(0),
            offset: 0,
            content_length: 0,
            viewport_height: 0,
        }
    }

    /// First visible row
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Largest offset that still fills the viewport
    fn max_offset(&self) -> usize {
        self.content_length.saturating_sub(self.viewport_height)
    }

    /// Move the viewport. Pages are one viewport tall.
    pub fn scroll(&mut self, movement: ScrollMove) {
        let page = self.viewport_height.max(1);
        let offset = match movement {
            ScrollMove::LineUp => self.offset.saturating_sub(1),
            ScrollMove::LineDown => self.offset.saturating_add(1),
            ScrollMove::PageUp => self.offset.saturating_sub(page),
            ScrollMove::PageDown => self.offset.saturating_add(page),
            ScrollMove::Top => 0,
            ScrollMove::Bottom => usize::MAX,
        };
        self.offset = offset.min(self.max_offset());
        self.state = self.state.position(self.offset);
    }

    /// Record the pane's row count and visible height.
    ///
    /// The offset is clamped again here since a resize can shrink the
    /// scrollable range.
    pub fn update_state(&mut self, total_items: usize, viewport_height: usize) {
        self.content_length = total_items;
        self.viewport_height = viewport_height;
        self.offset = self.offset.min(self.max_offset());

        self.state = self
            .state
            .content_length(self.max_offset() + 1)
            .viewport_content_length(viewport_height)
            .position(self.offset);
    }

    /// List state starting at the current offset
    pub fn list_state(&self) -> ListState {
        ListState::default().with_offset(self.offset)
    }

    /// Whether the rows overflow the height left inside the borders
    pub fn needs_scrollbar(total_items: usize, available_height: usize) -> bool {
        total_items > available_height
    }

    /// Split `rect` into the content area and, when needed, a one-column scrollbar area.
    pub fn calculate_areas(rect: Rect, total_items: usize) -> (Rect, Option<Rect>) {
        let available_height = rect.height.saturating_sub(2) as usize; // Exclude borders

        if Self::needs_scrollbar(total_items, available_height) {
            let content_area = Rect {
                width: rect.width.saturating_sub(1),
                ..rect
            };
            let scrollbar_area = Rect {
                x: rect.x + rect.width.saturating_sub(1),
                y: rect.y + 1, // Start below top border
                width: 1,
                height: rect.height.saturating_sub(2),
            };
            (content_area, Some(scrollbar_area))
        } else {
            (rect, None)
        }
    }

    /// Render the scrollbar widget if a scrollbar area is provided.
    pub fn render(&mut self, f: &mut Frame, scrollbar_area: Option<Rect>) {
        if let Some(area) = scrollbar_area {
            let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some("↑"))
                .end_symbol(Some("↓"))
                .track_symbol(Some("│"))
                .thumb_symbol("█")
                .style(Style::default().fg(Color::DarkGray))
                .thumb_style(Style::default().fg(Color::DarkGray));

            f.render_stateful_widget(scrollbar, area, &mut self.state);
        }
    }
}
