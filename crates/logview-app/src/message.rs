//! Message types for the application (TEA pattern)

use logview_client::{ContentPage, LiveStreamHandle};
use logview_core::{LogEntry, LogFileDescriptor};

use crate::history::{PageDirection, PageRequest};
use crate::input_key::InputKey;
use crate::session::Tab;
use crate::state::PromptKind;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates
    Tick,

    /// Quit (q, Ctrl+C, signal handler)
    Quit,

    /// First message of a run: load server config and files, start streaming
    Startup,

    // ─────────────────────────────────────────────────────────
    // Server Metadata
    // ─────────────────────────────────────────────────────────
    ConfigLoaded { title: String },
    ConfigFailed { error: String },

    /// Re-request the file listing
    RefreshFiles,
    FilesLoaded { files: Vec<LogFileDescriptor> },
    FilesFailed { error: String },

    // ─────────────────────────────────────────────────────────
    // Live Stream
    // ─────────────────────────────────────────────────────────
    /// Streaming switch flipped by the user
    ToggleStreaming,
    SetStreamingEnabled(bool),

    /// Connected transport's command handle is available
    LiveStreamAttached {
        generation: u64,
        handle: LiveStreamHandle,
    },
    LiveStreamOpened { generation: u64 },
    LiveStreamEntry { generation: u64, entry: LogEntry },
    LiveStreamError { generation: u64, error: String },
    LiveStreamClosed {
        generation: u64,
        reason: Option<String>,
    },

    /// Keepalive timer fired
    HeartbeatTick { generation: u64 },
    /// Reconnect timer fired
    ReconnectDue { token: u64 },

    // ─────────────────────────────────────────────────────────
    // View
    // ─────────────────────────────────────────────────────────
    SwitchTab(Tab),
    NextTab,
    ToggleAutoScroll,
    ToggleTheme,

    // ─────────────────────────────────────────────────────────
    // Scroll Messages (active tab)
    // ─────────────────────────────────────────────────────────
    ScrollUp,
    ScrollDown,
    ScrollToTop,
    ScrollToBottom,
    PageUp,
    PageDown,

    // ─────────────────────────────────────────────────────────
    // File Picker
    // ─────────────────────────────────────────────────────────
    OpenFilePicker,
    CloseFilePicker,
    FilePickerUp,
    FilePickerDown,
    /// Select the highlighted file
    FilePickerConfirm,

    // ─────────────────────────────────────────────────────────
    // History Paging
    // ─────────────────────────────────────────────────────────
    SelectFile(String),
    ChangePage(PageDirection),
    GoToPage(u32),
    ChangePageSize(u32),
    /// Step through the page size options
    CyclePageSize { forward: bool },
    /// Re-fetch the current page
    RefreshPage,
    PageLoaded {
        request: PageRequest,
        result: Result<ContentPage, String>,
    },

    // ─────────────────────────────────────────────────────────
    // Input Prompt
    // ─────────────────────────────────────────────────────────
    OpenPrompt(PromptKind),
    PromptInput(char),
    PromptBackspace,
    PromptSubmit,
    PromptCancel,
}
