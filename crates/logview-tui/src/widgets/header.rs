//! Header bar widget
//!
//! Title row: connection dot, server title, live toggle and status text.
//! Tabs row: Realtime/History tabs, auto-scroll and theme indicators.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Tabs, Widget},
};

use logview_app::{ConnectionSupervisor, Session, Tab};

use crate::theme::{styles, Palette};

/// Main header showing the title, live connection controls and the view tabs
pub struct MainHeader<'a> {
    title: &'a str,
    session: &'a Session,
    supervisor: &'a ConnectionSupervisor,
    palette: &'a Palette,
}

impl<'a> MainHeader<'a> {
    pub fn new(
        title: &'a str,
        session: &'a Session,
        supervisor: &'a ConnectionSupervisor,
        palette: &'a Palette,
    ) -> Self {
        Self {
            title,
            session,
            supervisor,
            palette,
        }
    }

    fn render_title_row(&self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let (dot, dot_style) = styles::connection_indicator(p, self.supervisor.state());

        let left = Line::from(vec![
            Span::raw(" "),
            Span::styled(dot, dot_style),
            Span::raw(" "),
            Span::styled(self.title.to_string(), styles::accent_bold(p)),
        ]);

        let status_style = if self.supervisor.last_error().is_some() {
            styles::error(p)
        } else {
            styles::text_secondary(p)
        };
        let right = Line::from(vec![
            Span::styled("[", styles::text_muted(p)),
            Span::styled("s", styles::keybinding(p)),
            Span::styled("] ", styles::text_muted(p)),
            Span::styled(self.supervisor.toggle_label(), styles::text_primary(p)),
            Span::styled("  │  ", styles::text_muted(p)),
            Span::styled(self.supervisor.status_text(), status_style),
            Span::raw(" "),
        ]);

        let left_width = left.width() as u16;
        let right_width = right.width() as u16;

        buf.set_line(area.x, area.y, &left, area.width);
        if left_width + right_width + 1 <= area.width {
            buf.set_line(area.right() - right_width, area.y, &right, right_width);
        }
    }

    fn render_tabs_row(&self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let titles: Vec<Line<'static>> = [Tab::Realtime, Tab::History]
            .iter()
            .map(|tab| Line::from(format!(" {} {} ", tab.index() + 1, tab.label())))
            .collect();

        let tabs = Tabs::new(titles)
            .select(self.session.active_tab().index())
            .style(styles::text_secondary(p))
            .highlight_style(styles::focused_selected(p))
            .divider(Span::styled("│", styles::text_muted(p)));

        let tabs_area = Rect {
            x: area.x + 1,
            width: area.width.saturating_sub(2),
            ..area
        };
        tabs.render(tabs_area, buf);

        let follow = if self.session.auto_scroll_enabled() {
            "on"
        } else {
            "off"
        };
        let theme = if self.session.theme_dark() {
            "dark"
        } else {
            "light"
        };
        let right = Line::from(vec![
            Span::styled("[", styles::text_muted(p)),
            Span::styled("a", styles::keybinding(p)),
            Span::styled("] Auto-scroll ", styles::text_muted(p)),
            Span::styled(follow, styles::text_primary(p)),
            Span::styled("  [", styles::text_muted(p)),
            Span::styled("t", styles::keybinding(p)),
            Span::styled("] Theme ", styles::text_muted(p)),
            Span::styled(theme, styles::text_primary(p)),
            Span::raw(" "),
        ]);
        let right_width = right.width() as u16;
        // Tabs occupy roughly 26 columns
        if right_width + 28 <= area.width {
            buf.set_line(area.right() - right_width, area.y, &right, right_width);
        }
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.palette, false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        self.render_title_row(Rect { height: 1, ..inner }, buf);

        if inner.height >= 2 {
            let tabs_area = Rect {
                y: inner.y + 1,
                height: 1,
                ..inner
            };
            self.render_tabs_row(tabs_area, buf);
        }
    }
}
