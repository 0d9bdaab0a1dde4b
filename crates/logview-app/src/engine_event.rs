//! Domain events emitted by the Engine for external consumers
//!
//! Events are broadcast after each message processing cycle via
//! `Engine::subscribe()`. The headless runner turns them into NDJSON.

use logview_core::LogEntry;

use crate::supervisor::ConnectionState;

#[derive(Debug, Clone)]
pub enum EngineEvent {
    // ─────────────────────────────────────────────────────────
    // Live Stream
    // ─────────────────────────────────────────────────────────
    /// The live stream connection state changed
    ConnectionChanged {
        old: ConnectionState,
        new: ConnectionState,
        /// Status text as shown to the user
        status: String,
    },

    /// Entries appended to the live buffer, oldest first
    LiveEntries { entries: Vec<LogEntry> },

    // ─────────────────────────────────────────────────────────
    // History
    // ─────────────────────────────────────────────────────────
    /// The file listing arrived or failed
    FilesListed {
        filenames: Vec<String>,
        error: Option<String>,
    },

    /// A history page was applied or failed
    HistoryPageLoaded {
        filename: String,
        page: u32,
        total_pages: u32,
        entries: Vec<LogEntry>,
        error: Option<String>,
    },

    // ─────────────────────────────────────────────────────────
    // Engine Lifecycle
    // ─────────────────────────────────────────────────────────
    /// Engine is shutting down
    Shutdown,
}

impl EngineEvent {
    /// Returns a short string label for this event type (for logging/debugging).
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::ConnectionChanged { .. } => "connection_changed",
            Self::LiveEntries { .. } => "live_entries",
            Self::FilesListed { .. } => "files_listed",
            Self::HistoryPageLoaded { .. } => "history_page_loaded",
            Self::Shutdown => "shutdown",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_type_labels() {
        assert_eq!(EngineEvent::Shutdown.event_type(), "shutdown");
        assert_eq!(
            EngineEvent::LiveEntries { entries: vec![] }.event_type(),
            "live_entries"
        );
        assert_eq!(
            EngineEvent::ConnectionChanged {
                old: ConnectionState::Connecting,
                new: ConnectionState::Connected,
                status: "Connected".to_string(),
            }
            .event_type(),
            "connection_changed"
        );
    }
}
