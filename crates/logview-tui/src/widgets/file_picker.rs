//! File picker modal
//!
//! Lists the server's log files with their creation time and size. The
//! highlighted row is kept in view.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use logview_app::state::FileListing;

use super::modal_overlay;
use crate::theme::{styles, Palette};

const MODAL_WIDTH: u16 = 72;
const MODAL_HEIGHT: u16 = 18;
const CTIME_WIDTH: usize = 20;
const SIZE_WIDTH: usize = 10;

pub struct FilePicker<'a> {
    listing: &'a FileListing,
    palette: &'a Palette,
}

impl<'a> FilePicker<'a> {
    pub fn new(listing: &'a FileListing, palette: &'a Palette) -> Self {
        Self { listing, palette }
    }

    fn render_message(&self, area: Rect, buf: &mut Buffer, text: String, error: bool) {
        let style = if error {
            styles::error(self.palette)
        } else {
            styles::text_muted(self.palette)
        };
        Paragraph::new(Line::from(Span::styled(text, style))).render(area, buf);
    }

    fn render_rows(&self, area: Rect, buf: &mut Buffer) {
        let rows = area.height as usize;
        if rows == 0 {
            return;
        }
        let selected = self.listing.selected_index;
        let start = selected.saturating_sub(rows - 1);
        let name_width = (area.width as usize).saturating_sub(CTIME_WIDTH + SIZE_WIDTH + 4);

        for (row, (idx, file)) in self
            .listing
            .files
            .iter()
            .enumerate()
            .skip(start)
            .take(rows)
            .enumerate()
        {
            let text = format!(
                " {}  {}  {} ",
                pad_to_width(&truncate_to_width(&file.filename, name_width), name_width),
                pad_to_width(&file.ctime, CTIME_WIDTH),
                pad_to_width(&file.size, SIZE_WIDTH),
            );
            let style = if idx == selected {
                styles::focused_selected(self.palette)
            } else {
                styles::text_primary(self.palette)
            };
            let line = Line::from(Span::styled(text, style));
            buf.set_line(area.x, area.y + row as u16, &line, area.width);
        }
    }
}

impl Widget for FilePicker<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal = modal_overlay::centered_rect(MODAL_WIDTH, MODAL_HEIGHT, area);
        modal_overlay::prepare_modal(buf, area, modal, self.palette);

        let block = styles::modal_block(self.palette, " Log files ");
        let inner = block.inner(modal);
        block.render(modal, buf);

        if inner.height < 2 || inner.width == 0 {
            return;
        }

        let body = Rect {
            height: inner.height - 1,
            ..inner
        };
        let footer = Rect {
            y: inner.bottom() - 1,
            height: 1,
            ..inner
        };

        if let Some(error) = &self.listing.error {
            self.render_message(body, buf, format!(" Failed to load files: {}", error), true);
        } else if self.listing.files.is_empty() {
            let text = if self.listing.loading {
                " Loading…"
            } else {
                " No log files"
            };
            self.render_message(body, buf, text.to_string(), false);
        } else {
            self.render_rows(body, buf);
        }

        let p = self.palette;
        let hints = Line::from(vec![
            Span::styled(" ↑↓", styles::keybinding(p)),
            Span::styled(" select  ", styles::text_muted(p)),
            Span::styled("Enter", styles::keybinding(p)),
            Span::styled(" open  ", styles::text_muted(p)),
            Span::styled("r", styles::keybinding(p)),
            Span::styled(" refresh  ", styles::text_muted(p)),
            Span::styled("Esc", styles::keybinding(p)),
            Span::styled(" close", styles::text_muted(p)),
        ]);
        buf.set_line(footer.x, footer.y, &hints, footer.width);
    }
}

/// Cut `text` to at most `max_width` columns, ending in `…` when cut.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut width = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > max_width - 1 {
            break;
        }
        out.push(c);
        width += w;
    }
    out.push('…');
    out
}

fn pad_to_width(text: &str, width: usize) -> String {
    let pad = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(pad))
}
