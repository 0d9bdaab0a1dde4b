//! Pagination bar for the History tab
//!
//! `« First ‹ Prev Page 2 of 5 Next › Last » 100/page  Current log: app.log`
//! First/Prev are dimmed on page 1, Next/Last on the last page.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use logview_app::HistoryPager;

use crate::theme::{styles, Palette};

pub struct PaginationBar<'a> {
    history: &'a HistoryPager,
    palette: &'a Palette,
}

impl<'a> PaginationBar<'a> {
    pub fn new(history: &'a HistoryPager, palette: &'a Palette) -> Self {
        Self { history, palette }
    }

    fn control(&self, label: &'static str, enabled: bool) -> Span<'static> {
        let style = if enabled {
            styles::text_primary(self.palette)
        } else {
            styles::text_muted(self.palette).add_modifier(Modifier::DIM)
        };
        Span::styled(label, style)
    }

    fn build_line(&self) -> Line<'static> {
        let p = self.palette;
        let history = self.history;
        let has_file = history.selected_file().is_some();
        let back = has_file && history.can_go_back();
        let forward = has_file && history.can_go_forward();

        let mut spans = vec![
            Span::raw(" "),
            self.control("« First", back),
            Span::raw(" "),
            self.control("‹ Prev", back),
            Span::raw(" "),
        ];

        spans.push(Span::styled(
            format!(
                "Page {} of {}",
                history.page_number(),
                history.total_pages()
            ),
            styles::accent_bold(p),
        ));
        spans.extend([
            Span::raw(" "),
            self.control("Next ›", forward),
            Span::raw(" "),
            self.control("Last »", forward),
            Span::raw(" "),
        ]);

        spans.push(Span::styled(
            format!("{}/page", history.page_size()),
            styles::text_secondary(p),
        ));

        if let Some(total) = history.total_lines() {
            spans.push(Span::styled(
                format!("  ({} lines)", total),
                styles::text_muted(p),
            ));
        }

        if history.is_loading() {
            spans.push(Span::styled(
                "  Loading…",
                Style::default().fg(p.status_yellow),
            ));
        } else if history.last_error().is_some() {
            spans.push(Span::styled("  Load failed", styles::error(p)));
        }

        spans.push(Span::raw("  "));
        match history.selection_label() {
            Some(label) => spans.push(Span::styled(label, styles::text_primary(p))),
            None => spans.push(Span::styled(
                "No log selected, press f to pick a file",
                styles::text_muted(p),
            )),
        }

        Line::from(spans)
    }
}

impl Widget for PaginationBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.palette, false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let line = self.build_line();
        buf.set_line(inner.x, inner.y, &line, inner.width);
    }
}
