//! Screen layout definitions for the TUI
//!
//! Header (title row + tab row), body, one-row status bar. The History tab
//! additionally splits its body into a pagination bar and the log pane.

use ratatui::layout::{Constraint, Layout, Rect};

/// Top border + title row + tabs row + bottom border
pub const HEADER_HEIGHT: u16 = 4;

/// Pagination bar: bordered single row
pub const PAGINATION_HEIGHT: u16 = 3;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    pub header: Rect,
    /// Active tab content
    pub body: Rect,
    pub status: Rect,
}

/// Areas of the History tab body
#[derive(Debug, Clone, Copy)]
pub struct HistoryAreas {
    pub pagination: Rect,
    pub logs: Rect,
}

/// Create the main screen layout
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        body: chunks[1],
        status: chunks[2],
    }
}

/// Split the History tab body into pagination bar and log pane
pub fn split_history(body: Rect) -> HistoryAreas {
    let chunks =
        Layout::vertical([Constraint::Length(PAGINATION_HEIGHT), Constraint::Min(3)]).split(body);

    HistoryAreas {
        pagination: chunks[0],
        logs: chunks[1],
    }
}
