//! Semantic style builders.

use logview_app::ConnectionState;
use logview_core::LogLevel;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::Palette;

// --- Text styles ---
pub fn text_primary(p: &Palette) -> Style {
    Style::default().fg(p.text_primary)
}

pub fn text_secondary(p: &Palette) -> Style {
    Style::default().fg(p.text_secondary)
}

pub fn text_muted(p: &Palette) -> Style {
    Style::default().fg(p.text_muted)
}

// --- Accent styles ---
pub fn accent(p: &Palette) -> Style {
    Style::default().fg(p.accent)
}

pub fn accent_bold(p: &Palette) -> Style {
    accent(p).add_modifier(Modifier::BOLD)
}

/// Key hint letter in `[k] Label` pairs
pub fn keybinding(p: &Palette) -> Style {
    Style::default().fg(p.status_yellow)
}

pub fn error(p: &Palette) -> Style {
    Style::default().fg(p.status_red)
}

/// Focused+selected items (active tab, highlighted picker row)
pub fn focused_selected(p: &Palette) -> Style {
    Style::default()
        .fg(p.contrast_fg)
        .bg(p.accent)
        .add_modifier(Modifier::BOLD)
}

// --- Block builders ---
pub fn glass_block(p: &Palette, focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if focused {
            p.border_active
        } else {
            p.border_dim
        }))
        .style(Style::default().bg(p.card_bg))
}

pub fn modal_block<'a>(p: &Palette, title: &'a str) -> Block<'a> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(p.border_active))
        .style(Style::default().bg(p.popup_bg))
}

// --- Log levels ---

/// Style for a log line of the given level.
pub fn level_style(p: &Palette, level: LogLevel) -> Style {
    match level {
        LogLevel::Error => Style::default()
            .fg(p.log_error)
            .add_modifier(Modifier::BOLD),
        LogLevel::Warning => Style::default().fg(p.log_warning),
        LogLevel::Info | LogLevel::Unknown => Style::default().fg(p.log_info),
        LogLevel::Debug => Style::default().fg(p.log_debug),
    }
}

// --- Connection indicator ---

/// Status dot and its style for the live connection.
pub fn connection_indicator(p: &Palette, state: ConnectionState) -> (&'static str, Style) {
    match state {
        ConnectionState::Connected => (
            "●",
            Style::default()
                .fg(p.status_green)
                .add_modifier(Modifier::BOLD),
        ),
        ConnectionState::Connecting => ("◐", Style::default().fg(p.status_yellow)),
        ConnectionState::Closing | ConnectionState::Disconnected => {
            ("○", Style::default().fg(p.text_muted))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::palette::{DARK, LIGHT};

    #[test]
    fn test_text_styles_follow_palette() {
        assert_eq!(text_primary(&DARK).fg, Some(DARK.text_primary));
        assert_eq!(text_primary(&LIGHT).fg, Some(LIGHT.text_primary));
        assert_eq!(text_muted(&DARK).fg, Some(DARK.text_muted));
    }

    #[test]
    fn test_error_level_is_bold() {
        let style = level_style(&DARK, LogLevel::Error);
        assert_eq!(style.fg, Some(DARK.log_error));
        assert!(style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_unknown_level_renders_like_info() {
        assert_eq!(
            level_style(&DARK, LogLevel::Unknown),
            level_style(&DARK, LogLevel::Info)
        );
    }

    #[test]
    fn test_connection_indicator() {
        let (icon, style) = connection_indicator(&DARK, ConnectionState::Connected);
        assert_eq!(icon, "●");
        assert_eq!(style.fg, Some(DARK.status_green));

        let (icon, _) = connection_indicator(&DARK, ConnectionState::Disconnected);
        assert_eq!(icon, "○");
    }
}
