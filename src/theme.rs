//! Colors used by the terminal frontend
//!
//! Button colors come from the config file as hex strings; everything else is
//! a fixed dark palette.

use ratatui::style::Color;

/// Application theme defining all non-button UI colors
#[derive(Debug, Clone)]
pub struct AppTheme {
    // Window colors
    pub window_border: Color,
    pub window_border_focused: Color,
    pub window_title: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_selected: Color,
    pub label: Color,

    // Background colors
    pub background_selected: Color,
}

impl AppTheme {
    pub fn dark() -> Self {
        Self {
            window_border: Color::Rgb(108, 112, 134),
            window_border_focused: Color::Rgb(249, 226, 175),
            window_title: Color::Rgb(137, 180, 250),
            text_primary: Color::Rgb(205, 214, 244),
            text_secondary: Color::Rgb(147, 153, 178),
            text_selected: Color::Black,
            label: Color::Rgb(250, 179, 135),
            background_selected: Color::Rgb(137, 180, 250),
        }
    }
}

impl Default for AppTheme {
    fn default() -> Self {
        Self::dark()
    }
}

/// Convert hex string ("#RRGGBB" or "RRGGBB") to ratatui Color
pub fn hex_to_color(hex: &str) -> Option<Color> {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

    Some(Color::Rgb(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_to_color() {
        assert_eq!(hex_to_color("#FF5733"), Some(Color::Rgb(255, 87, 51)));
        assert_eq!(hex_to_color("1f6aa5"), Some(Color::Rgb(31, 106, 165)));
        assert_eq!(hex_to_color("#FFF"), None);
        assert_eq!(hex_to_color("#GG0000"), None);
        assert_eq!(hex_to_color("#ééé"), None);
    }
}
