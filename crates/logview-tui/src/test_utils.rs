//! Rendering harness for widget and full-frame tests.
//!
//! Draws into ratatui's `TestBackend` and reads the result back as rows of
//! text, one `String` per terminal line.

use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::{StatefulWidget, Widget};
use ratatui::{Frame, Terminal};

/// A classic 80x24 screen.
pub const SCREEN: (u16, u16) = (80, 24);

pub struct TestTerminal {
    terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    pub fn new() -> Self {
        Self::with_size(SCREEN.0, SCREEN.1)
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        let terminal =
            Terminal::new(TestBackend::new(width, height)).expect("TestBackend never fails");
        Self { terminal }
    }

    pub fn area(&self) -> Rect {
        self.buffer().area
    }

    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.draw_with(|frame| frame.render_widget(widget, area));
    }

    pub fn render_stateful_widget<W, S>(&mut self, widget: W, area: Rect, state: &mut S)
    where
        W: StatefulWidget<State = S>,
    {
        self.draw_with(|frame| frame.render_stateful_widget(widget, area, state));
    }

    /// Draw one whole frame.
    pub fn draw_with<F: FnOnce(&mut Frame)>(&mut self, f: F) {
        self.terminal.draw(f).expect("draw failed");
    }

    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    /// Text of row `y`; empty when out of range.
    pub fn line(&self, y: u16) -> String {
        let buffer = self.buffer();
        if y >= buffer.area.height {
            return String::new();
        }
        (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol())
            .collect()
    }

    pub fn rows(&self) -> Vec<String> {
        (0..self.buffer().area.height).map(|y| self.line(y)).collect()
    }

    /// First row containing `text`.
    pub fn row_of(&self, text: &str) -> Option<u16> {
        self.rows()
            .iter()
            .position(|row| row.contains(text))
            .and_then(|y| u16::try_from(y).ok())
    }

    pub fn buffer_contains(&self, text: &str) -> bool {
        self.row_of(text).is_some()
    }

    pub fn line_contains(&self, y: u16, text: &str) -> bool {
        self.line(y).contains(text)
    }

    /// Whole screen, newline separated. Handy in assertion messages.
    pub fn content(&self) -> String {
        self.rows().join("\n")
    }
}

impl Default for TestTerminal {
    fn default() -> Self {
        Self::new()
    }
}
