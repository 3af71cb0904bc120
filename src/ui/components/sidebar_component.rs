//! Sidebar component listing the smart lists and the user's custom lists.
//!
//! Rows are rebuilt from the list data whenever it changes. The current list
//! is highlighted; nothing in the sidebar can be selected or opened.

use crate::constants::KEY_HINTS;
use crate::entities::SidebarList;
use crate::icons::IconService;
use crate::ui::components::scrollbar_helper::ScrollbarHelper;
use crate::ui::components::sidebar_item_component::{SidebarItem, SidebarItemType};
use crate::ui::core::{actions::Action, Component};
use crate::utils::color::MUTED;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{block::BorderType, Block, Borders, List, ListItem},
    Frame,
};

/// Navigation sidebar: smart lists, then the "Lists" section with custom lists.
pub struct SidebarComponent {
    pub sidebar_lists: Vec<SidebarList>,
    pub custom_lists: Vec<SidebarList>,
    /// Id of the list shown in the main area
    pub current_list_id: Option<String>,
    pub icons: IconService,
    items: Vec<SidebarItemType>,
    scrollbar_helper: ScrollbarHelper,
}

impl Default for SidebarComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl SidebarComponent {
    pub fn new() -> Self {
        Self {
            sidebar_lists: Vec::new(),
            custom_lists: Vec::new(),
            current_list_id: None,
            icons: IconService::default(),
            items: Vec::new(),
            scrollbar_helper: ScrollbarHelper::new(),
        }
    }

    pub fn update_data(
        &mut self,
        sidebar_lists: Vec<SidebarList>,
        custom_lists: Vec<SidebarList>,
        current_list_id: Option<String>,
    ) {
        self.sidebar_lists = sidebar_lists;
        self.custom_lists = custom_lists;
        self.current_list_id = current_list_id;
        self.build_item_list();
    }

    /// Rows in display order
    pub fn items(&self) -> &[SidebarItemType] {
        &self.items
    }

    /// Build the flattened list of sidebar rows
    fn build_item_list(&mut self) {
        self.items.clear();

        for list in &self.sidebar_lists {
            self.items.push(SidebarItemType::List {
                list: list.clone(),
                is_current: self.current_list_id.as_deref() == Some(list.id.as_str()),
                indent: 0,
            });
        }

        self.items.push(SidebarItemType::Separator);
        self.items.push(SidebarItemType::lists_header());

        for list in &self.custom_lists {
            self.items.push(SidebarItemType::List {
                list: list.clone(),
                is_current: self.current_list_id.as_deref() == Some(list.id.as_str()),
                indent: 1,
            });
        }
    }
}

impl Component for SidebarComponent {
    fn update(&mut self, action: Action) -> Action {
        match &action {
            Action::IconThemeChanged(theme) => self.icons.set_theme(*theme),
            Action::Scroll(movement) => self.scrollbar_helper.scroll(*movement),
            _ => {}
        }
        action
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let total_items = self.items.len();
        let (list_area, scrollbar_area) = ScrollbarHelper::calculate_areas(rect, total_items);

        // Borders take one column on each side
        let row_width = list_area.width.saturating_sub(2) as usize;
        let all_items: Vec<ListItem> = self
            .items
            .iter()
            .map(|item| item.render(&self.icons, row_width))
            .collect();

        let available_height = rect.height.saturating_sub(2) as usize;
        self.scrollbar_helper.update_state(total_items, available_height);
        let mut list_state = self.scrollbar_helper.list_state();

        let list = List::new(all_items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title_bottom(Line::styled(KEY_HINTS, Style::default().fg(MUTED)))
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .style(Style::default().fg(Color::White));

        f.render_stateful_widget(list, list_area, &mut list_state);

        // Render scrollbar using helper
        self.scrollbar_helper.render(f, scrollbar_area);
    }
}
