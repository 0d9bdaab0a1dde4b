//! Status bar widget
//!
//! Left: the latest notice, or key hints for the active tab.
//! Right: live buffer fill on the Realtime tab, page info on History.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use logview_app::state::AppState;
use logview_app::Tab;

use crate::theme::{styles, Palette};

pub struct StatusBar<'a> {
    state: &'a AppState,
    palette: &'a Palette,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState, palette: &'a Palette) -> Self {
        Self { state, palette }
    }

    fn hint(&self, key: &'static str, label: &'static str) -> [Span<'static>; 2] {
        [
            Span::styled(key, styles::keybinding(self.palette)),
            Span::styled(label, styles::text_muted(self.palette)),
        ]
    }

    fn left_line(&self) -> Line<'static> {
        if let Some(notice) = &self.state.notice {
            return Line::from(vec![
                Span::raw(" "),
                Span::styled(notice.clone(), Style::default().fg(self.palette.status_yellow)),
            ]);
        }

        let mut spans = vec![Span::raw(" ")];
        spans.extend(self.hint("q", " quit  "));
        spans.extend(self.hint("Tab", " switch  "));
        spans.extend(self.hint("f", " files  "));
        match self.state.session.active_tab() {
            Tab::Realtime => {
                spans.extend(self.hint("s", " stream  "));
                spans.extend(self.hint("j/k", " scroll  "));
                spans.extend(self.hint("G", " bottom"));
            }
            Tab::History => {
                spans.extend(self.hint("h/l", " page  "));
                spans.extend(self.hint("g", " go to  "));
                spans.extend(self.hint("z", " size  "));
                spans.extend(self.hint("r", " reload"));
            }
        }
        Line::from(spans)
    }

    fn right_line(&self) -> Line<'static> {
        let text = match self.state.session.active_tab() {
            Tab::Realtime => format!(
                "{}/{} lines ",
                self.state.live.len(),
                self.state.live.capacity()
            ),
            Tab::History => {
                let view = &self.state.history_view;
                let total = self.state.history.entries().len();
                let start = view.offset.min(total);
                let end = (view.offset + view.visible_lines).min(total);
                if total == 0 {
                    String::new()
                } else {
                    format!("rows {}-{} of {} ", start + 1, end, total)
                }
            }
        };
        Line::from(Span::styled(text, styles::text_secondary(self.palette)))
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }
        buf.set_style(area, Style::default().bg(self.palette.deepest_bg));

        let left = self.left_line();
        let right = self.right_line();
        let right_width = right.width() as u16;

        buf.set_line(area.x, area.y, &left, area.width);
        if right_width > 0 && left.width() as u16 + right_width + 1 <= area.width {
            buf.set_line(area.right() - right_width, area.y, &right, right_width);
        }
    }
}
