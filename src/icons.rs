//! Icon service for managing different icon themes
//!
//! This module provides a centralized way to manage the screen's chrome glyphs
//! (header buttons, checkboxes, stars, detail options) across themes: emoji,
//! Unicode and ASCII fallbacks. Sidebar list icons are fixture data and are not
//! themed.

use serde::{Deserialize, Serialize};

/// Icon theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconTheme {
    /// Emoji icons (colorful, modern look)
    #[default]
    Emoji,
    /// Unicode symbols (clean, native look)
    Unicode,
    /// ASCII characters (maximum compatibility)
    Ascii,
}

/// Header bar icons
#[derive(Debug, Clone)]
pub struct HeaderIcons {
    pub menu: &'static str,
    pub search: &'static str,
    pub profile: &'static str,
}

/// Task row icons
#[derive(Debug, Clone)]
pub struct TaskIcons {
    pub pending: &'static str,
    pub completed: &'static str,
    pub star_important: &'static str,
    pub star_regular: &'static str,
    pub section_toggle: &'static str,
}

/// Small inline buttons
#[derive(Debug, Clone)]
pub struct ActionIcons {
    pub add: &'static str,
    pub close: &'static str,
    pub more_options: &'static str,
    pub suggestion: &'static str,
}

/// Detail panel option icons
#[derive(Debug, Clone)]
pub struct DetailIcons {
    pub due_date: &'static str,
    pub reminder: &'static str,
    pub repeat: &'static str,
    pub note: &'static str,
}

/// Complete icon set for a specific theme
#[derive(Debug, Clone)]
pub struct IconSet {
    pub header: HeaderIcons,
    pub task: TaskIcons,
    pub action: ActionIcons,
    pub detail: DetailIcons,
}

/// Icon service for managing themes and providing icons
#[derive(Debug, Clone, Default)]
pub struct IconService {
    current_theme: IconTheme,
}

impl IconService {
    /// Create a new icon service with the specified theme
    #[must_use]
    pub fn new(theme: IconTheme) -> Self {
        Self { current_theme: theme }
    }

    /// Get the current theme
    #[must_use]
    pub fn theme(&self) -> IconTheme {
        self.current_theme
    }

    /// Set the current theme
    pub fn set_theme(&mut self, theme: IconTheme) {
        self.current_theme = theme;
    }

    /// Cycle to the next icon theme in the sequence: Emoji -> Unicode -> Ascii -> Emoji
    pub fn cycle_icon_theme(&mut self) {
        self.current_theme = match self.current_theme {
            IconTheme::Emoji => IconTheme::Unicode,
            IconTheme::Unicode => IconTheme::Ascii,
            IconTheme::Ascii => IconTheme::Emoji,
        };
    }

    /// Get the complete icon set for the current theme
    #[must_use]
    pub fn icons(&self) -> IconSet {
        match self.current_theme {
            IconTheme::Emoji => Self::emoji_icons(),
            IconTheme::Unicode => Self::unicode_icons(),
            IconTheme::Ascii => Self::ascii_icons(),
        }
    }

    fn emoji_icons() -> IconSet {
        IconSet {
            header: HeaderIcons {
                menu: "☰",
                search: "🔍",
                profile: "👤",
            },
            task: TaskIcons {
                pending: "⬜",
                completed: "✅",
                star_important: "⭐",
                star_regular: "⭐",
                section_toggle: "⌄",
            },
            action: ActionIcons {
                add: "+",
                close: "×",
                more_options: "⋯",
                suggestion: "💡",
            },
            detail: DetailIcons {
                due_date: "📅",
                reminder: "🔔",
                repeat: "🔄",
                note: "📝",
            },
        }
    }

    fn unicode_icons() -> IconSet {
        IconSet {
            header: HeaderIcons {
                menu: "☰",
                search: "⌕",
                profile: "☺",
            },
            task: TaskIcons {
                pending: "○",
                completed: "✓",
                star_important: "★",
                star_regular: "☆",
                section_toggle: "▾",
            },
            action: ActionIcons {
                add: "+",
                close: "×",
                more_options: "⋯",
                suggestion: "ⓘ",
            },
            detail: DetailIcons {
                due_date: "◷",
                reminder: "◔",
                repeat: "↻",
                note: "✎",
            },
        }
    }

    fn ascii_icons() -> IconSet {
        IconSet {
            header: HeaderIcons {
                menu: "=",
                search: "?",
                profile: "@",
            },
            task: TaskIcons {
                pending: "[ ]",
                completed: "[X]",
                star_important: "*",
                star_regular: ".",
                section_toggle: "v",
            },
            action: ActionIcons {
                add: "+",
                close: "x",
                more_options: "...",
                suggestion: "i",
            },
            detail: DetailIcons {
                due_date: "@",
                reminder: "!",
                repeat: "~",
                note: "#",
            },
        }
    }

    /// Convenience methods for commonly used icons
    #[must_use]
    pub fn task_pending(&self) -> &'static str {
        self.icons().task.pending
    }

    #[must_use]
    pub fn task_completed(&self) -> &'static str {
        self.icons().task.completed
    }

    #[must_use]
    pub fn checkbox(&self, completed: bool) -> &'static str {
        if completed {
            self.task_completed()
        } else {
            self.task_pending()
        }
    }

    #[must_use]
    pub fn star(&self, important: bool) -> &'static str {
        let task = self.icons().task;
        if important {
            task.star_important
        } else {
            task.star_regular
        }
    }

    #[must_use]
    pub fn section_toggle(&self) -> &'static str {
        self.icons().task.section_toggle
    }

    #[must_use]
    pub fn add(&self) -> &'static str {
        self.icons().action.add
    }

    #[must_use]
    pub fn close(&self) -> &'static str {
        self.icons().action.close
    }

    #[must_use]
    pub fn more_options(&self) -> &'static str {
        self.icons().action.more_options
    }

    #[must_use]
    pub fn suggestion(&self) -> &'static str {
        self.icons().action.suggestion
    }
}
