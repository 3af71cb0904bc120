//! Sidebar rows: list entries, the "Lists" section header and spacers.

use crate::constants::LISTS_SECTION_TITLE;
use crate::entities::SidebarList;
use crate::icons::IconService;
use crate::ui::layout::LayoutManager;
use crate::utils::color::{accent_color, MUTED};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::ListItem,
};

/// Types of rows that can appear in the sidebar
#[derive(Clone, Debug)]
pub enum SidebarItemType {
    /// A list entry with its icon swatch, name and count
    List {
        list: SidebarList,
        is_current: bool,
        /// Custom lists sit one level under the "Lists" header
        indent: usize,
    },
    /// "Lists" header with its add button
    SectionHeader { title: String },
    /// Visual separator
    Separator,
}

impl SidebarItemType {
    pub fn lists_header() -> Self {
        SidebarItemType::SectionHeader {
            title: LISTS_SECTION_TITLE.to_string(),
        }
    }
}

/// Trait for sidebar rows that can be rendered
pub trait SidebarItem {
    /// Render the row as a ListItem filling `width` columns
    fn render(&self, icons: &IconService, width: usize) -> ListItem<'static>;

    /// Get the indentation level for hierarchical display
    fn indent_level(&self) -> usize;
}

impl SidebarItem for SidebarItemType {
    fn render(&self, icons: &IconService, width: usize) -> ListItem<'static> {
        match self {
            SidebarItemType::List { list, is_current, .. } => {
                let name_style = if *is_current {
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                };
                let swatch_style = Style::default().bg(accent_color(&list.color)).fg(Color::White);

                let indent = Span::raw(" ".repeat(self.indent_level() * 2));
                let swatch = Span::styled(format!(" {} ", list.icon), swatch_style);
                let count = Span::styled(list.count.to_string(), Style::default().fg(MUTED));

                // The count is always shown; the name gives up columns first
                let reserved = indent.width() + swatch.width() + 1 + 1 + count.width();
                let name = LayoutManager::truncate_to_width(&list.name, width.saturating_sub(reserved));

                let left = vec![indent, swatch, Span::raw(" "), Span::styled(name, name_style)];
                ListItem::new(LayoutManager::spread_line(left, vec![count], width))
            }

            SidebarItemType::SectionHeader { title } => {
                let style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
                ListItem::new(LayoutManager::spread_line(
                    vec![Span::styled(title.clone(), style)],
                    vec![Span::styled(icons.add(), style)],
                    width,
                ))
            }

            SidebarItemType::Separator => ListItem::new(Line::from(Span::raw(" "))),
        }
    }

    fn indent_level(&self) -> usize {
        match self {
            SidebarItemType::List { indent, .. } => *indent,
            SidebarItemType::SectionHeader { .. } | SidebarItemType::Separator => 0,
        }
    }
}
