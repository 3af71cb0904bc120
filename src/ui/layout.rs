//! Layout management and calculations

use crate::constants::{HEADER_HEIGHT, MAIN_AREA_MIN_WIDTH};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Areas of the body row, left to right
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BodyAreas {
    pub sidebar: Rect,
    pub main: Rect,
    /// `None` when the detail panel is disabled or does not fit
    pub detail: Option<Rect>,
}

/// Areas of the main content column, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MainContentAreas {
    pub list_header: Rect,
    pub banner: Rect,
    pub add_task: Rect,
    pub tasks: Rect,
}

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Split the screen into the header bar and the body below it
    #[must_use]
    pub fn screen_layout(area: Rect) -> (Rect, Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(HEADER_HEIGHT), Constraint::Min(0)])
            .split(area);
        (chunks[0], chunks[1])
    }

    /// Effective sidebar width: the configured width, capped at a third of the screen
    #[must_use]
    pub fn sidebar_width(area_width: u16, configured: u16) -> u16 {
        std::cmp::min(area_width / 3, configured)
    }

    /// Calculate the body layout (sidebar | main content | detail panel)
    #[must_use]
    pub fn body_layout(area: Rect, sidebar_width: u16, detail_width: Option<u16>) -> BodyAreas {
        let sidebar_width = Self::sidebar_width(area.width, sidebar_width);

        let detail_width = detail_width.filter(|width| {
            area.width.saturating_sub(sidebar_width).saturating_sub(*width) >= MAIN_AREA_MIN_WIDTH
        });

        match detail_width {
            Some(width) => {
                let chunks = Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints([
                        Constraint::Length(sidebar_width),
                        Constraint::Min(0),
                        Constraint::Length(width),
                    ])
                    .split(area);
                BodyAreas {
                    sidebar: chunks[0],
                    main: chunks[1],
                    detail: Some(chunks[2]),
                }
            }
            None => {
                let chunks = Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints([Constraint::Length(sidebar_width), Constraint::Min(0)])
                    .split(area);
                BodyAreas {
                    sidebar: chunks[0],
                    main: chunks[1],
                    detail: None,
                }
            }
        }
    }

    /// Calculate the main content layout (list header, banner, add task input, tasks)
    #[must_use]
    pub fn main_content_layout(area: Rect) -> MainContentAreas {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(0),
            ])
            .split(area);

        MainContentAreas {
            list_header: chunks[0],
            banner: chunks[1],
            add_task: chunks[2],
            tasks: chunks[3],
        }
    }

    /// Split a row into a flexible leading part and a fixed-width trailing slot
    #[must_use]
    pub fn trailing_slot(area: Rect, trailing_width: u16) -> (Rect, Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(trailing_width)])
            .split(area);
        (chunks[0], chunks[1])
    }

    /// Build a line with `left` spans flush left and `right` spans flush right.
    ///
    /// When both sides do not fit, the right side follows the left one after
    /// a single space and the terminal clips the rest.
    #[must_use]
    pub fn spread_line(left: Vec<Span<'static>>, right: Vec<Span<'static>>, width: usize) -> Line<'static> {
        let used: usize = left.iter().chain(right.iter()).map(Span::width).sum();
        let gap = width.saturating_sub(used).max(1);

        let mut spans = left;
        if !right.is_empty() {
            spans.push(Span::raw(" ".repeat(gap)));
            spans.extend(right);
        }
        Line::from(spans)
    }

    /// Shorten `text` to at most `max_width` columns, ending in `…` when cut.
    #[must_use]
    pub fn truncate_to_width(text: &str, max_width: usize) -> String {
        if UnicodeWidthStr::width(text) <= max_width {
            return text.to_string();
        }
        if max_width == 0 {
            return String::new();
        }

        let mut truncated = String::new();
        let mut used = 0;
        for ch in text.chars() {
            let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
            if used + ch_width > max_width - 1 {
                break;
            }
            truncated.push(ch);
            used += ch_width;
        }
        truncated.push('…');
        truncated
    }
}
