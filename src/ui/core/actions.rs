use crate::icons::IconTheme;

/// How far a scrollable pane moves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollMove {
    LineUp,
    LineDown,
    PageUp,
    PageDown,
    Top,
    Bottom,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // Display
    CycleIconTheme,
    IconThemeChanged(IconTheme),
    Scroll(ScrollMove),

    // App control
    Quit,
    None,
}
