use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use todoview::ui::core::{EventHandler, EventType};

#[test]
fn test_key_press_is_reported() {
    let key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
    assert_eq!(EventHandler::classify(Event::Key(key)), EventType::Key(key));
}

#[test]
fn test_key_release_is_ignored() {
    let key = KeyEvent::new_with_kind(KeyCode::Char('q'), KeyModifiers::NONE, KeyEventKind::Release);
    assert_eq!(EventHandler::classify(Event::Key(key)), EventType::Other);
}

#[test]
fn test_resize_is_reported() {
    assert_eq!(EventHandler::classify(Event::Resize(80, 24)), EventType::Resize(80, 24));
}

#[test]
fn test_focus_events_are_other() {
    assert_eq!(EventHandler::classify(Event::FocusGained), EventType::Other);
}
