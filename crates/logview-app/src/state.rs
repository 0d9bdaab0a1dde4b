//! Application state (Model in TEA pattern)

use std::time::Duration;

use logview_core::LogFileDescriptor;

use crate::config::Settings;
use crate::history::HistoryPager;
use crate::live_buffer::LiveLogBuffer;
use crate::log_view_state::LogViewState;
use crate::session::{Session, Tab};
use crate::supervisor::{ConnectionPolicy, ConnectionSupervisor};

/// Default window title until the server reports one.
pub const DEFAULT_TITLE: &str = "Log Viewer";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Free-text prompts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    PageNumber,
    PageSize,
}

impl PromptKind {
    pub fn label(&self) -> &'static str {
        match self {
            PromptKind::PageNumber => "Go to page",
            PromptKind::PageSize => "Page size",
        }
    }
}

/// Current UI mode/screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Tabs with log panes and status bar
    #[default]
    Normal,
    /// File picker modal over the history tab
    FilePicker,
    /// Single-line input prompt
    Prompt(PromptKind),
}

/// Server log file listing for the picker.
#[derive(Debug, Clone, Default)]
pub struct FileListing {
    pub files: Vec<LogFileDescriptor>,
    pub loading: bool,
    pub error: Option<String>,
    pub selected_index: usize,
    /// Bumped whenever a listing arrives or fails
    pub revision: u64,
}

impl FileListing {
    pub fn selected(&self) -> Option<&LogFileDescriptor> {
        self.files.get(self.selected_index)
    }

    pub fn select_previous(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        if self.selected_index + 1 < self.files.len() {
            self.selected_index += 1;
        }
    }

    /// Replace the listing, keeping the highlight on the same file if present.
    pub fn replace(&mut self, files: Vec<LogFileDescriptor>) {
        let previous = self.selected().map(|f| f.filename.clone());
        self.files = files;
        self.selected_index = previous
            .and_then(|name| self.files.iter().position(|f| f.filename == name))
            .unwrap_or(0);
        self.loading = false;
        self.error = None;
        self.revision += 1;
    }

    /// A failed listing shows as empty.
    pub fn fail(&mut self, error: String) {
        self.files.clear();
        self.selected_index = 0;
        self.loading = false;
        self.error = Some(error);
        self.revision += 1;
    }
}

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    pub phase: AppPhase,

    /// Page title from `/logs/config`
    pub title: String,

    pub ui_mode: UiMode,

    /// Tab, auto-scroll and theme
    pub session: Session,

    /// Live stream lifecycle
    pub supervisor: ConnectionSupervisor,

    /// Entries received from the live stream
    pub live: LiveLogBuffer,

    /// History query and current page
    pub history: HistoryPager,

    pub files: FileListing,

    /// Text typed into the active prompt
    pub input_buffer: String,

    pub live_view: LogViewState,
    pub history_view: LogViewState,

    /// One-line feedback for rejected input or failures
    pub notice: Option<String>,

    pub settings: Settings,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        let policy = ConnectionPolicy {
            heartbeat_interval: Duration::from_secs(settings.stream.heartbeat_secs),
            reconnect_delay: Duration::from_secs(settings.stream.reconnect_delay_secs),
        };

        Self {
            phase: AppPhase::Running,
            title: DEFAULT_TITLE.to_string(),
            ui_mode: UiMode::Normal,
            session: Session::new(settings.ui.auto_scroll, settings.ui.dark_theme),
            supervisor: ConnectionSupervisor::new(settings.stream.enabled, policy),
            live: LiveLogBuffer::new(),
            history: HistoryPager::new(settings.history.page_size),
            files: FileListing::default(),
            input_buffer: String::new(),
            live_view: LogViewState::new(),
            history_view: LogViewState::new(),
            notice: None,
            settings,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    /// Scroll state of the pane on the active tab.
    pub fn active_view_mut(&mut self) -> &mut LogViewState {
        match self.session.active_tab() {
            Tab::Realtime => &mut self.live_view,
            Tab::History => &mut self.history_view,
        }
    }

    pub fn set_notice(&mut self, notice: impl Into<String>) {
        self.notice = Some(notice.into());
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
    }
}
