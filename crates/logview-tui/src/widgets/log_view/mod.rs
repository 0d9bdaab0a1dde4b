//! Scrollable log pane shared by the Realtime and History tabs
//!
//! One entry renders as exactly one row, colored by level. Long lines are
//! cut at the pane edge.

use logview_app::log_view_state::LogViewState;
use logview_app::LiveLogBuffer;
use logview_core::LogEntry;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{
        Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, StatefulWidget, Widget,
    },
};

use crate::theme::{styles, Palette};

/// Backing store of a log pane
#[derive(Clone, Copy)]
pub enum LogLines<'a> {
    Live(&'a LiveLogBuffer),
    Page(&'a [LogEntry]),
}

impl<'a> LogLines<'a> {
    pub fn len(&self) -> usize {
        match self {
            LogLines::Live(buffer) => buffer.len(),
            LogLines::Page(entries) => entries.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, index: usize) -> Option<&'a LogEntry> {
        match self {
            LogLines::Live(buffer) => buffer.get(index),
            LogLines::Page(entries) => entries.get(index),
        }
    }
}

/// Log view widget
pub struct LogView<'a> {
    lines: LogLines<'a>,
    title: String,
    palette: &'a Palette,
    /// Shown centered when there is nothing to display
    empty_message: &'a str,
    /// Keep the newest line in view while the user has not scrolled away
    pin_to_bottom: bool,
    focused: bool,
}

impl<'a> LogView<'a> {
    pub fn new(lines: LogLines<'a>, palette: &'a Palette) -> Self {
        Self {
            lines,
            title: String::new(),
            palette,
            empty_message: "No log lines",
            pin_to_bottom: false,
            focused: true,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn empty_message(mut self, message: &'a str) -> Self {
        self.empty_message = message;
        self
    }

    pub fn pin_to_bottom(mut self, pin: bool) -> Self {
        self.pin_to_bottom = pin;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn format_entry(&self, entry: &LogEntry) -> Line<'static> {
        let style = styles::level_style(self.palette, entry.level());
        Line::from(Span::styled(sanitize_line(entry.formatted()), style))
    }

    fn render_empty(&self, inner: Rect, buf: &mut Buffer) {
        let text = vec![
            Line::from(""),
            Line::from(Span::styled(
                self.empty_message.to_string(),
                styles::text_muted(self.palette),
            )),
        ];
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}

/// Flatten an entry to a single terminal row.
///
/// Tabs become four spaces; other control characters (including embedded
/// newlines) become a single space.
pub fn sanitize_line(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\t' => out.push_str("    "),
            c if c.is_control() => out.push(' '),
            c => out.push(c),
        }
    }
    out
}

impl StatefulWidget for LogView<'_> {
    type State = LogViewState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let block = styles::glass_block(self.palette, self.focused)
            .title(Span::styled(
                format!(" {} ", self.title.trim()),
                styles::accent(self.palette),
            ));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let total_lines = self.lines.len();
        let visible_lines = inner.height as usize;
        state.update_content_size(total_lines, visible_lines, self.pin_to_bottom);

        if self.lines.is_empty() {
            self.render_empty(inner, buf);
            return;
        }

        let end = (state.offset + visible_lines).min(total_lines);
        let rows: Vec<Line> = (state.offset..end)
            .filter_map(|idx| self.lines.get(idx))
            .map(|entry| self.format_entry(entry))
            .collect();

        let needs_scrollbar = total_lines > visible_lines;
        let text_area = if needs_scrollbar {
            Rect {
                width: inner.width.saturating_sub(1),
                ..inner
            }
        } else {
            inner
        };
        Paragraph::new(rows).render(text_area, buf);

        if needs_scrollbar {
            let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some("▲"))
                .end_symbol(Some("▼"))
                .track_symbol(Some("│"))
                .thumb_symbol("█")
                .style(styles::text_muted(self.palette));

            let mut scrollbar_state = ScrollbarState::new(total_lines.saturating_sub(visible_lines))
                .position(state.offset)
                .viewport_content_length(visible_lines);

            scrollbar.render(area, buf, &mut scrollbar_state);
        }
    }
}
