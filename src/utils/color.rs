use ratatui::style::Color;

/// Accent used when a fixture color cannot be parsed
pub const DEFAULT_ACCENT: Color = Color::Rgb(0, 120, 212);

/// Muted grey for placeholders, completed tasks and secondary text
pub const MUTED: Color = Color::Rgb(138, 136, 134);

/// Parse a `#rrggbb` (or `rrggbb`) hex string into an RGB color
#[must_use]
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let digits = hex.trim().trim_start_matches('#');
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }

    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
    Some(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// Convert a fixture accent color to a terminal color, falling back to the default accent
#[must_use]
pub fn accent_color(hex: &str) -> Color {
    parse_hex_color(hex).unwrap_or(DEFAULT_ACCENT)
}
