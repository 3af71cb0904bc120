use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
use todoview::config::Config;
use todoview::entities::Task;
use todoview::fixture::{fixture, Fixture};
use todoview::icons::IconTheme;
use todoview::ui::components::sidebar_item_component::SidebarItem;
use todoview::ui::components::task_list_item_component::TaskListItemType;
use todoview::ui::core::{Action, Component, EventType, ScrollMove};
use todoview::ui::AppComponent;

const WIDTH: u16 = 120;
const HEIGHT: u16 = 30;

fn render(app: &mut AppComponent, width: u16, height: u16) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal
        .draw(|f| {
            let area = f.area();
            app.render(f, area);
        })
        .unwrap();
    terminal.backend().buffer().clone()
}

/// Text of row `y` between columns `x0` (inclusive) and `x1` (exclusive)
fn row_text(buffer: &Buffer, y: u16, x0: u16, x1: u16) -> String {
    (x0..x1.min(buffer.area.width)).map(|x| buffer[(x, y)].symbol()).collect()
}

fn rows(buffer: &Buffer, x0: u16, x1: u16) -> Vec<String> {
    (0..buffer.area.height).map(|y| row_text(buffer, y, x0, x1)).collect()
}

fn find_row(rows: &[String], needle: &str) -> Option<usize> {
    rows.iter().position(|row| row.contains(needle))
}

fn key(code: KeyCode) -> EventType {
    EventType::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

#[test]
fn test_header_shows_title() {
    let mut app = AppComponent::new(fixture(), &Config::default());
    let buffer = render(&mut app, WIDTH, HEIGHT);
    assert!(row_text(&buffer, 0, 0, WIDTH).contains("To Do"));
}

#[test]
fn test_sidebar_shows_lists_and_counts() {
    let mut app = AppComponent::new(fixture(), &Config::default());
    let buffer = render(&mut app, WIDTH, HEIGHT);
    // Sidebar is 30 columns wide; skip its left and right borders
    let sidebar = rows(&buffer, 1, 29);

    for name in [
        "My Day",
        "Important",
        "Planned",
        "All",
        "Completed",
        "Tasks",
        "Lists",
        "Work Projects",
        "Personal",
    ] {
        assert!(find_row(&sidebar, name).is_some(), "missing sidebar entry {name}");
    }

    let planned = &sidebar[find_row(&sidebar, "Planned").unwrap()];
    assert!(planned.trim_end().ends_with('1'), "count not right-aligned: {planned:?}");
    let all = &sidebar[find_row(&sidebar, " All").unwrap()];
    assert!(all.trim_end().ends_with('8'));

    // Custom lists come after the "Lists" header
    let lists_row = find_row(&sidebar, "Lists").unwrap();
    assert!(find_row(&sidebar, "Work Projects").unwrap() > lists_row);
    assert!(find_row(&sidebar, "Personal").unwrap() > lists_row);
}

#[test]
fn test_main_content_partitions_tasks() {
    let mut app = AppComponent::new(fixture(), &Config::default());
    let buffer = render(&mut app, WIDTH, HEIGHT);
    // Main column spans 30..88 with the default widths
    let main = rows(&buffer, 30, 88);

    assert!(find_row(&main, "My Day").is_some());
    assert!(find_row(&main, "Monday, June 9").is_some());
    assert!(find_row(&main, "Good morning! Here are some tasks for today").is_some());
    assert!(find_row(&main, "Add a task").is_some());

    let pending: Vec<usize> = [
        "Review quarterly reports",
        "Call client about project update",
        "Prepare presentation slides",
        "Team meeting at 3 PM",
    ]
    .iter()
    .map(|text| find_row(&main, text).unwrap())
    .collect();
    let header = find_row(&main, "Completed (2)").expect("completed header");
    let completed: Vec<usize> = ["Update project documentation", "Send weekly status report"]
        .iter()
        .map(|text| find_row(&main, text).unwrap())
        .collect();

    assert!(pending.windows(2).all(|w| w[0] < w[1]), "pending order: {pending:?}");
    assert!(pending.iter().all(|row| *row < header));
    assert!(completed.iter().all(|row| *row > header));
    assert!(completed[0] < completed[1]);
}

#[test]
fn test_detail_panel_shows_selected_task() {
    let mut app = AppComponent::new(fixture(), &Config::default());
    let buffer = render(&mut app, WIDTH, HEIGHT);
    let panel = rows(&buffer, 88, WIDTH);

    let title = find_row(&panel, "Review quarterly reports").expect("selected task title");
    let options: Vec<usize> = ["Add due date", "Remind me", "Repeat", "Add note"]
        .iter()
        .map(|text| find_row(&panel, text).unwrap())
        .collect();
    let footer = find_row(&panel, "Created today").expect("footer");

    assert!(title < options[0]);
    assert!(options.windows(2).all(|w| w[0] < w[1]));
    assert!(options[3] < footer);
}

#[test]
fn test_no_completed_section_without_completed_tasks() {
    let mut data = Fixture::builtin();
    data.tasks = vec![
        Task::new("1", "Water the plants", false, false, true),
        Task::new("2", "Book flights", false, true, false),
    ];

    let mut app = AppComponent::new(&data, &Config::default());
    assert!(app.main_content().task_list().sections().completed.is_empty());

    let buffer = render(&mut app, WIDTH, HEIGHT);
    let main = rows(&buffer, 30, 88);
    assert!(find_row(&main, "Water the plants").is_some());
    assert!(find_row(&main, "Completed (").is_none());
}

#[test]
fn test_detail_panel_hidden_when_disabled() {
    let mut config = Config::default();
    config.ui.show_detail_panel = false;

    let mut app = AppComponent::new(fixture(), &config);
    let buffer = render(&mut app, WIDTH, HEIGHT);
    assert!(find_row(&rows(&buffer, 0, WIDTH), "Created today").is_none());
}

#[test]
fn test_detail_panel_hidden_on_narrow_screen() {
    let mut app = AppComponent::new(fixture(), &Config::default());
    let buffer = render(&mut app, 60, HEIGHT);
    let screen = rows(&buffer, 0, 60);
    assert!(find_row(&screen, "Created today").is_none());
    assert!(find_row(&screen, "Team meeting at 3 PM").is_some());
}

#[test]
fn test_sidebar_counts_survive_narrow_screen() {
    let mut app = AppComponent::new(fixture(), &Config::default());
    let buffer = render(&mut app, 60, HEIGHT);
    // 60 / 3 = 20 columns of sidebar, 18 inside the borders
    let sidebar = rows(&buffer, 1, 19);

    let work = find_row(&sidebar, "Work").expect("Work Projects row");
    assert!(sidebar[work].contains('…'), "name is shortened: {}", sidebar[work]);
    assert!(sidebar[work].trim_end().ends_with('3'), "count kept: {}", sidebar[work]);

    let personal = find_row(&sidebar, "Personal").expect("Personal row");
    assert!(sidebar[personal].trim_end().ends_with('2'));
}

#[test]
fn test_scrolling_reveals_completed_tasks_on_short_screen() {
    let mut app = AppComponent::new(fixture(), &Config::default());
    let height = 16;

    let buffer = render(&mut app, WIDTH, height);
    let main = rows(&buffer, 30, 88);
    assert!(find_row(&main, "Review quarterly reports").is_some());
    assert!(find_row(&main, "Completed (2)").is_none());
    assert!(find_row(&main, "Send weekly status report").is_none());

    assert_eq!(
        app.handle_event(key(KeyCode::End)),
        Action::Scroll(ScrollMove::Bottom)
    );
    let buffer = render(&mut app, WIDTH, height);
    let main = rows(&buffer, 30, 88);
    let header = find_row(&main, "Completed (2)").expect("completed header after scrolling");
    let last = find_row(&main, "Send weekly status report").expect("last task after scrolling");
    assert!(header < last);
    assert!(find_row(&main, "Review quarterly reports").is_none());

    // Scrolling does not touch the data
    assert_eq!(app.main_content().task_list().sections().completed.len(), 2);

    app.handle_event(key(KeyCode::Home));
    let buffer = render(&mut app, WIDTH, height);
    assert!(find_row(&rows(&buffer, 30, 88), "Review quarterly reports").is_some());
}

#[test]
fn test_line_scrolling_stops_at_last_row() {
    let mut app = AppComponent::new(fixture(), &Config::default());
    render(&mut app, WIDTH, 16);

    app.handle_event(key(KeyCode::Down));
    assert_eq!(app.main_content().task_list().scroll_offset(), 1);

    for _ in 0..10 {
        app.handle_event(key(KeyCode::Char('j')));
    }
    // 8 rows in a 5-row viewport
    assert_eq!(app.main_content().task_list().scroll_offset(), 3);

    app.handle_event(key(KeyCode::Up));
    assert_eq!(app.main_content().task_list().scroll_offset(), 2);
}

#[test]
fn test_no_scrolling_when_everything_fits() {
    let mut app = AppComponent::new(fixture(), &Config::default());
    render(&mut app, WIDTH, HEIGHT);
    app.handle_event(key(KeyCode::PageDown));
    assert_eq!(app.main_content().task_list().scroll_offset(), 0);
}

#[test]
fn test_quit_keys() {
    let mut app = AppComponent::new(fixture(), &Config::default());
    assert!(!app.should_quit());
    assert_eq!(app.handle_event(key(KeyCode::Char('x'))), Action::None);
    assert!(!app.should_quit());

    assert_eq!(app.handle_event(key(KeyCode::Char('q'))), Action::Quit);
    assert!(app.should_quit());

    let mut app = AppComponent::new(fixture(), &Config::default());
    let ctrl_c = EventType::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert_eq!(app.handle_event(ctrl_c), Action::Quit);
}

#[test]
fn test_controls_do_not_change_tasks() {
    let mut app = AppComponent::new(fixture(), &Config::default());
    for code in [KeyCode::Char(' '), KeyCode::Enter, KeyCode::Char('a'), KeyCode::Tab] {
        assert_eq!(app.handle_event(key(code)), Action::None);
    }
    assert_eq!(app.main_content().task_list().sections().completed.len(), 2);
    assert_eq!(app.main_content().task_list().sections().pending.len(), 4);

    let task_rows = app
        .main_content()
        .task_list()
        .items()
        .iter()
        .filter(|item| matches!(item, TaskListItemType::Task(_)));
    assert_eq!(task_rows.count(), 6);
}

#[test]
fn test_custom_lists_are_indented() {
    let app = AppComponent::new(fixture(), &Config::default());
    let indented = app.sidebar().items().iter().filter(|item| item.indent_level() == 1).count();
    assert_eq!(indented, 2);
}

#[test]
fn test_icon_theme_cycles_through_all_components() {
    let mut app = AppComponent::new(fixture(), &Config::default());
    assert_eq!(app.icons().theme(), IconTheme::Emoji);

    assert_eq!(
        app.handle_event(key(KeyCode::Char('i'))),
        Action::IconThemeChanged(IconTheme::Unicode)
    );
    app.handle_event(key(KeyCode::Char('i')));
    assert_eq!(app.icons().theme(), IconTheme::Ascii);
    assert_eq!(app.sidebar().icons.theme(), IconTheme::Ascii);

    let buffer = render(&mut app, WIDTH, HEIGHT);
    let main = rows(&buffer, 30, 88);
    let pending = &main[find_row(&main, "Team meeting at 3 PM").unwrap()];
    let done = &main[find_row(&main, "Send weekly status report").unwrap()];
    assert!(pending.contains("[ ] Team meeting at 3 PM"));
    assert!(done.contains("[X] Send weekly status report"));
}

#[test]
fn test_configured_date_format() {
    let mut config = Config::default();
    config.display.date_format = "%Y-%m-%d".to_string();

    let mut app = AppComponent::new(fixture(), &config);
    let buffer = render(&mut app, WIDTH, HEIGHT);
    assert!(find_row(&rows(&buffer, 30, 88), "2025-06-09").is_some());
}
