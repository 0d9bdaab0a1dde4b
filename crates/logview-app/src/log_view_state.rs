//! Log view state - scroll position and viewport bounds.
//!
//! Shared by the handler layer (scroll commands) and the TUI layer (which
//! reports content and viewport size during render).

/// Default buffer lines for virtualized rendering
const DEFAULT_BUFFER_LINES: usize = 10;

/// Scroll state of one log pane.
#[derive(Debug, Clone)]
pub struct LogViewState {
    /// Current vertical scroll offset from top
    pub offset: usize,
    /// Follow new content
    pub follow: bool,
    /// Total number of lines (set during render)
    pub total_lines: usize,
    /// Visible lines (set during render)
    pub visible_lines: usize,
    /// Buffer lines above/below the viewport
    pub buffer_lines: usize,
}

impl Default for LogViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl LogViewState {
    pub fn new() -> Self {
        Self {
            offset: 0,
            follow: true,
            total_lines: 0,
            visible_lines: 0,
            buffer_lines: DEFAULT_BUFFER_LINES,
        }
    }

    fn max_offset(&self) -> usize {
        self.total_lines.saturating_sub(self.visible_lines)
    }

    /// Range of line indices to render, `[start, end)`, including buffer lines.
    pub fn visible_range(&self) -> (usize, usize) {
        let start = self.offset.saturating_sub(self.buffer_lines);
        let end = (self.offset + self.visible_lines + self.buffer_lines).min(self.total_lines);
        (start, end)
    }

    pub fn scroll_up(&mut self, n: usize) {
        self.offset = self.offset.saturating_sub(n);
        self.follow = false;
    }

    /// Scroll down; reaching the bottom resumes following.
    pub fn scroll_down(&mut self, n: usize) {
        let max_offset = self.max_offset();
        self.offset = (self.offset + n).min(max_offset);
        if self.offset >= max_offset {
            self.follow = true;
        }
    }

    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
        self.follow = false;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.offset = self.max_offset();
        self.follow = true;
    }

    pub fn page_up(&mut self) {
        let page = self.visible_lines.saturating_sub(2).max(1);
        self.scroll_up(page);
    }

    pub fn page_down(&mut self) {
        let page = self.visible_lines.saturating_sub(2).max(1);
        self.scroll_down(page);
    }

    /// Reset to the top for freshly loaded content.
    pub fn reset(&mut self) {
        self.offset = 0;
        self.follow = false;
    }

    /// Update with new content size.
    ///
    /// `pin_to_bottom` is the caller's auto-scroll preference; when it is off
    /// the offset only gets clamped.
    pub fn update_content_size(&mut self, total: usize, visible: usize, pin_to_bottom: bool) {
        self.total_lines = total;
        self.visible_lines = visible;

        if pin_to_bottom && self.follow {
            self.offset = self.max_offset();
        } else {
            self.offset = self.offset.min(self.max_offset());
        }
    }
}
