use crate::config::Config;
use crate::fixture::Fixture;
use crate::icons::IconService;
use crate::ui::components::{HeaderComponent, MainContentComponent, RightPanelComponent, SidebarComponent};
use crate::ui::core::{
    actions::{Action, ScrollMove},
    event_handler::EventType,
    Component,
};
use crate::ui::layout::LayoutManager;
use crate::utils::datetime::format_list_date;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, Frame};

/// Root component: header on top, then sidebar, main content and detail panel.
pub struct AppComponent {
    // Component composition
    header: HeaderComponent,
    sidebar: SidebarComponent,
    main_content: MainContentComponent,
    right_panel: RightPanelComponent,

    icons: IconService,
    sidebar_width: u16,
    /// `None` when the detail panel is disabled
    detail_panel_width: Option<u16>,

    should_quit: bool,
}

impl AppComponent {
    pub fn new(fixture: &Fixture, config: &Config) -> Self {
        let icons = IconService::new(config.ui.icon_theme);

        let mut sidebar = SidebarComponent::new();
        sidebar.icons = icons.clone();
        sidebar.update_data(
            fixture.sidebar_lists.clone(),
            fixture.custom_lists.clone(),
            fixture.current_list().map(|list| list.id.clone()),
        );

        let mut main_content = MainContentComponent::new();
        main_content.icons = icons.clone();
        main_content.update_data(
            fixture
                .current_list()
                .map(|list| list.name.clone())
                .unwrap_or_default(),
            format_list_date(fixture.list_date, &config.display.date_format),
            fixture.tasks.clone(),
        );

        let mut right_panel = RightPanelComponent::new();
        right_panel.icons = icons.clone();
        right_panel.update_data(fixture.selected_task().cloned());

        log::info!(
            "Screen built: {} lists, {} custom lists, {} tasks",
            fixture.sidebar_lists.len(),
            fixture.custom_lists.len(),
            fixture.tasks.len()
        );

        Self {
            header: HeaderComponent::new(icons.clone()),
            sidebar,
            main_content,
            right_panel,
            icons,
            sidebar_width: config.ui.sidebar_width,
            detail_panel_width: config.ui.show_detail_panel.then_some(config.ui.detail_panel_width),
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn icons(&self) -> &IconService {
        &self.icons
    }

    pub fn sidebar(&self) -> &SidebarComponent {
        &self.sidebar
    }

    pub fn main_content(&self) -> &MainContentComponent {
        &self.main_content
    }

    /// Handle global keyboard shortcuts
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                log::info!("Global key: {:?} - quitting application", key.code);
                Action::Quit
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                log::info!("Global key: Ctrl+C - quitting application");
                Action::Quit
            }
            KeyCode::Char('i') => Action::CycleIconTheme,

            // Scrolling moves the viewport only
            KeyCode::Up | KeyCode::Char('k') => Action::Scroll(ScrollMove::LineUp),
            KeyCode::Down | KeyCode::Char('j') => Action::Scroll(ScrollMove::LineDown),
            KeyCode::PageUp => Action::Scroll(ScrollMove::PageUp),
            KeyCode::PageDown => Action::Scroll(ScrollMove::PageDown),
            KeyCode::Home => Action::Scroll(ScrollMove::Top),
            KeyCode::End => Action::Scroll(ScrollMove::Bottom),
            _ => Action::None,
        }
    }

    /// Turn a terminal event into an action and apply it. Returns the applied action.
    pub fn handle_event(&mut self, event: EventType) -> Action {
        let action = match event {
            EventType::Key(key) => self.handle_key_events(key),
            EventType::Resize(width, height) => {
                log::debug!("Terminal resized to {}x{}", width, height);
                Action::None
            }
            EventType::Tick | EventType::Other => Action::None,
        };
        self.update(action)
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        self.handle_global_key(key)
    }

    fn update(&mut self, action: Action) -> Action {
        let action = match action {
            Action::CycleIconTheme => {
                self.icons.cycle_icon_theme();
                log::info!("Icon theme switched to {:?}", self.icons.theme());
                Action::IconThemeChanged(self.icons.theme())
            }
            Action::Quit => {
                self.should_quit = true;
                Action::Quit
            }
            other => other,
        };

        // Process through component hierarchy
        let action = self.header.update(action);
        let action = self.sidebar.update(action);
        let action = self.main_content.update(action);
        self.right_panel.update(action)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let (header_area, body_area) = LayoutManager::screen_layout(rect);
        let body = LayoutManager::body_layout(body_area, self.sidebar_width, self.detail_panel_width);

        self.header.render(f, header_area);
        self.sidebar.render(f, body.sidebar);
        self.main_content.render(f, body.main);
        if let Some(detail_area) = body.detail {
            self.right_panel.render(f, detail_area);
        }
    }
}
