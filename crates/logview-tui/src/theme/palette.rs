//! Color palettes for the dark and light themes.

use ratatui::style::Color;

/// Every color the widgets draw with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    // --- Background layers ---
    pub deepest_bg: Color,
    pub card_bg: Color,
    pub popup_bg: Color,

    // --- Borders ---
    pub border_dim: Color,
    pub border_active: Color,

    pub accent: Color,
    /// Foreground on top of `accent` (selected tab, highlighted row)
    pub contrast_fg: Color,

    // --- Text ---
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // --- Status ---
    pub status_green: Color,
    pub status_red: Color,
    pub status_yellow: Color,

    // --- Log levels ---
    pub log_error: Color,
    pub log_warning: Color,
    pub log_info: Color,
    pub log_debug: Color,

    pub shadow: Color,
}

pub const DARK: Palette = Palette {
    deepest_bg: Color::Black,
    card_bg: Color::Black,
    popup_bg: Color::Rgb(28, 33, 43),
    border_dim: Color::DarkGray,
    border_active: Color::Cyan,
    accent: Color::Cyan,
    contrast_fg: Color::Black,
    text_primary: Color::White,
    text_secondary: Color::Gray,
    text_muted: Color::DarkGray,
    status_green: Color::Green,
    status_red: Color::Red,
    status_yellow: Color::Yellow,
    log_error: Color::LightRed,
    log_warning: Color::Yellow,
    log_info: Color::White,
    log_debug: Color::DarkGray,
    shadow: Color::Rgb(5, 6, 8),
};

pub const LIGHT: Palette = Palette {
    deepest_bg: Color::Rgb(250, 250, 250),
    card_bg: Color::Rgb(250, 250, 250),
    popup_bg: Color::Rgb(235, 238, 242),
    border_dim: Color::Rgb(180, 186, 194),
    border_active: Color::Blue,
    accent: Color::Blue,
    contrast_fg: Color::White,
    text_primary: Color::Rgb(36, 41, 47),
    text_secondary: Color::Rgb(87, 96, 106),
    text_muted: Color::Rgb(140, 149, 159),
    status_green: Color::Rgb(26, 127, 55),
    status_red: Color::Rgb(207, 34, 46),
    status_yellow: Color::Rgb(154, 103, 0),
    log_error: Color::Rgb(207, 34, 46),
    log_warning: Color::Rgb(154, 103, 0),
    log_info: Color::Rgb(36, 41, 47),
    log_debug: Color::Rgb(140, 149, 159),
    shadow: Color::Rgb(200, 204, 209),
};

/// Palette for the session's theme flag.
pub fn for_theme(dark: bool) -> &'static Palette {
    if dark {
        &DARK
    } else {
        &LIGHT
    }
}
