use todoview::icons::*;

#[test]
fn test_theme_switching() {
    let mut service = IconService::new(IconTheme::Emoji);
    assert_eq!(service.theme(), IconTheme::Emoji);

    service.set_theme(IconTheme::Ascii);
    assert_eq!(service.theme(), IconTheme::Ascii);
}

#[test]
fn test_emoji_icons() {
    let service = IconService::new(IconTheme::Emoji);
    assert_eq!(service.task_pending(), "⬜");
    assert_eq!(service.task_completed(), "✅");
    assert_eq!(service.icons().header.search, "🔍");
    assert_eq!(service.suggestion(), "💡");
}

#[test]
fn test_unicode_icons() {
    let service = IconService::new(IconTheme::Unicode);
    assert_eq!(service.task_pending(), "○");
    assert_eq!(service.task_completed(), "✓");
    assert_eq!(service.section_toggle(), "▾");
}

#[test]
fn test_ascii_icons() {
    let service = IconService::new(IconTheme::Ascii);
    assert_eq!(service.task_pending(), "[ ]");
    assert_eq!(service.task_completed(), "[X]");
    assert_eq!(service.more_options(), "...");
    assert_eq!(service.close(), "x");
    assert!(service.icons().detail.due_date.is_ascii());
}

#[test]
fn test_theme_cycling() {
    let mut service = IconService::new(IconTheme::Emoji);

    service.cycle_icon_theme();
    assert_eq!(service.theme(), IconTheme::Unicode);

    service.cycle_icon_theme();
    assert_eq!(service.theme(), IconTheme::Ascii);

    service.cycle_icon_theme();
    assert_eq!(service.theme(), IconTheme::Emoji);
}
