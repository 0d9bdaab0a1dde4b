//! Single-line input prompt (go to page, page size)

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use logview_app::state::PromptKind;

use super::modal_overlay;
use crate::theme::{styles, Palette};

const MODAL_WIDTH: u16 = 44;
const MODAL_HEIGHT: u16 = 5;

pub struct PromptInput<'a> {
    kind: PromptKind,
    input: &'a str,
    /// Accepted range, e.g. `1-12`
    range_hint: String,
    palette: &'a Palette,
}

impl<'a> PromptInput<'a> {
    pub fn new(kind: PromptKind, input: &'a str, palette: &'a Palette) -> Self {
        Self {
            kind,
            input,
            range_hint: String::new(),
            palette,
        }
    }

    pub fn range_hint(mut self, hint: impl Into<String>) -> Self {
        self.range_hint = hint.into();
        self
    }
}

impl Widget for PromptInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let modal = modal_overlay::centered_rect(MODAL_WIDTH, MODAL_HEIGHT, area);
        modal_overlay::prepare_modal(buf, area, modal, p);

        let title = format!(" {} ", self.kind.label());
        let block = styles::modal_block(p, &title);
        let inner = block.inner(modal);
        block.render(modal, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let input_line = Line::from(vec![
            Span::styled(" > ", styles::accent(p)),
            Span::styled(self.input.to_string(), styles::text_primary(p)),
            Span::styled("█", styles::accent(p)),
        ]);
        buf.set_line(inner.x, inner.y, &input_line, inner.width);

        if inner.height >= 3 {
            let mut hints = vec![
                Span::styled(" Enter", styles::keybinding(p)),
                Span::styled(" confirm  ", styles::text_muted(p)),
                Span::styled("Esc", styles::keybinding(p)),
                Span::styled(" cancel", styles::text_muted(p)),
            ];
            if !self.range_hint.is_empty() {
                hints.push(Span::styled(
                    format!("  ({})", self.range_hint),
                    styles::text_secondary(p),
                ));
            }
            buf.set_line(inner.x, inner.bottom() - 1, &Line::from(hints), inner.width);
        }
    }
}
