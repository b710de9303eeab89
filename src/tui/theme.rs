//! Colors and glyphs for the rendered page.
//!
//! The accent color and the unicode/ascii glyph choice come from `[ui]`
//! config; the content tables carry their own per-entry colors (hex for
//! skills, palette names for badges and cards), resolved here.

use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;

use crate::config::UiConfig;

/// Resolved render style for the page.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub accent: Color,
    pub unicode: bool,
}

impl Theme {
    pub fn from_config(ui: &UiConfig) -> Self {
        Self {
            accent: parse_hex(&ui.accent).unwrap_or(Color::Cyan),
            unicode: ui.unicode,
        }
    }

    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    /// Section headings and other emphasized text.
    pub fn title_style(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn dim_style(&self) -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub const fn rule_glyph(&self) -> &'static str {
        if self.unicode { "─" } else { "-" }
    }

    pub const fn bullet_glyph(&self) -> &'static str {
        if self.unicode { "•" } else { "*" }
    }

    pub const fn marker(&self) -> Marker {
        if self.unicode { Marker::Braille } else { Marker::Dot }
    }
}

/// Parse a `#rrggbb` string into an RGB color.
pub fn parse_hex(value: &str) -> Option<Color> {
    let hex = value.strip_prefix('#')?;
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

/// Resolve a content-table color: `#rrggbb` or a palette name, with the
/// accent as the fallback for anything unrecognized.
pub fn content_color(value: &str, fallback: Color) -> Color {
    match value {
        "blue" => Color::Blue,
        "green" => Color::Green,
        "red" => Color::Red,
        "purple" => Color::Magenta,
        "yellow" => Color::Yellow,
        "cyan" => Color::Cyan,
        other => parse_hex(other).unwrap_or(fallback),
    }
}

/// Proficiency grading used where an entry has no color of its own.
pub fn level_color(level: u8) -> Color {
    if level >= 80 {
        Color::Green
    } else if level >= 50 {
        Color::Yellow
    } else {
        Color::Red
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_hex_accepts_rrggbb() {
        assert_eq!(parse_hex("#3b82f6"), Some(Color::Rgb(0x3b, 0x82, 0xf6)));
        assert_eq!(parse_hex("#000000"), Some(Color::Rgb(0, 0, 0)));
    }

    #[test]
    fn parse_hex_rejects_malformed_input() {
        assert_eq!(parse_hex("3b82f6"), None);
        assert_eq!(parse_hex("#fff"), None);
        assert_eq!(parse_hex("#gggggg"), None);
        assert_eq!(parse_hex(""), None);
    }

    #[test]
    fn content_color_resolves_palette_names() {
        assert_eq!(content_color("purple", Color::White), Color::Magenta);
        assert_eq!(content_color("#ef4444", Color::White), Color::Rgb(0xef, 0x44, 0x44));
        assert_eq!(content_color("mauve", Color::White), Color::White);
    }

    #[test]
    fn level_color_grades_proficiency() {
        assert_eq!(level_color(95), Color::Green);
        assert_eq!(level_color(60), Color::Yellow);
        assert_eq!(level_color(30), Color::Red);
    }

    #[test]
    fn theme_falls_back_to_cyan_on_bad_accent() {
        let ui = UiConfig {
            accent: "nonsense".to_string(),
            ..UiConfig::default()
        };
        let theme = Theme::from_config(&ui);
        assert_eq!(theme.accent, Color::Cyan);
        assert_eq!(theme.rule_glyph(), "─");
    }
}
