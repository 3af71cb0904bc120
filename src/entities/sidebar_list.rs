use serde::{Deserialize, Serialize};

/// A navigation entry in the sidebar ("My Day", "Important", a custom list...)
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarList {
    pub id: String,
    pub name: String,
    /// Glyph drawn on the accent swatch, shown as-is in every icon theme
    pub icon: String,
    /// Item count displayed next to the name. Not derived from any task list.
    pub count: u32,
    /// Accent color as a `#rrggbb` hex string
    pub color: String,
}

impl SidebarList {
    pub fn new(id: &str, name: &str, icon: &str, count: u32, color: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            icon: icon.to_string(),
            count,
            color: color.to_string(),
        }
    }
}
