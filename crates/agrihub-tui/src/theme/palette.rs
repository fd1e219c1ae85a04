//! Color palettes for the light and dark themes.

use ratatui::style::Color;

/// A complete set of colors for one theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    // --- Background layers ---
    pub background: Color,
    pub card_bg: Color,
    pub popup_bg: Color,

    // --- Borders ---
    pub border_dim: Color,
    pub border_active: Color,

    // --- Accent ---
    pub accent: Color,
    pub accent_dim: Color,
    /// Foreground drawn on top of `accent`
    pub contrast_fg: Color,

    // --- Text ---
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // --- Status ---
    pub status_green: Color,
    pub status_yellow: Color,
    pub status_red: Color,
    pub status_blue: Color,

    // --- Chat bubbles ---
    pub sent_bg: Color,
    pub received_bg: Color,
}

pub const LIGHT: Palette = Palette {
    background: Color::Rgb(246, 248, 241),
    card_bg: Color::Rgb(255, 255, 255),
    popup_bg: Color::Rgb(232, 240, 226),
    border_dim: Color::Rgb(196, 207, 190),
    border_active: Color::Rgb(46, 125, 50),
    accent: Color::Rgb(46, 125, 50),
    accent_dim: Color::Rgb(129, 170, 120),
    contrast_fg: Color::Rgb(255, 255, 255),
    text_primary: Color::Rgb(33, 37, 41),
    text_secondary: Color::Rgb(73, 80, 87),
    text_muted: Color::Rgb(134, 142, 150),
    status_green: Color::Rgb(46, 125, 50),
    status_yellow: Color::Rgb(191, 128, 0),
    status_red: Color::Rgb(198, 40, 40),
    status_blue: Color::Rgb(21, 101, 192),
    sent_bg: Color::Rgb(200, 230, 201),
    received_bg: Color::Rgb(236, 239, 241),
};

pub const DARK: Palette = Palette {
    background: Color::Rgb(18, 20, 16),
    card_bg: Color::Rgb(28, 32, 26),
    popup_bg: Color::Rgb(40, 46, 37),
    border_dim: Color::Rgb(62, 70, 58),
    border_active: Color::Rgb(129, 199, 132),
    accent: Color::Rgb(129, 199, 132),
    accent_dim: Color::Rgb(76, 120, 78),
    contrast_fg: Color::Rgb(18, 20, 16),
    text_primary: Color::Rgb(226, 232, 222),
    text_secondary: Color::Rgb(176, 186, 170),
    text_muted: Color::Rgb(112, 122, 106),
    status_green: Color::Rgb(129, 199, 132),
    status_yellow: Color::Rgb(255, 202, 40),
    status_red: Color::Rgb(239, 83, 80),
    status_blue: Color::Rgb(100, 181, 246),
    sent_bg: Color::Rgb(46, 84, 48),
    received_bg: Color::Rgb(44, 48, 42),
};

/// Palette for the current dark mode preference
pub fn for_mode(dark_mode: bool) -> &'static Palette {
    if dark_mode {
        &DARK
    } else {
        &LIGHT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_mode_selects_palette() {
        assert_eq!(for_mode(true), &DARK);
        assert_eq!(for_mode(false), &LIGHT);
    }

    #[test]
    fn test_palettes_differ_in_background() {
        assert_ne!(LIGHT.background, DARK.background);
        assert_ne!(LIGHT.text_primary, DARK.text_primary);
    }
}
