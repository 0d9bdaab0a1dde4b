//! Headless mode - NDJSON event output instead of the TUI
//!
//! Events are written to stdout as newline-delimited JSON, one object per
//! line, each tagged by an `event` field:
//!
//! ```json
//! {"event":"connection","state":"connected","status":"Connected","timestamp":1704700001000}
//! {"event":"log","source":"live","level":"INFO","message":"2024-05-01 |INFO| ready","timestamp":1704700002000}
//! {"event":"page","file":"app.log","page":1,"total_pages":4,"lines":100,"error":null,"timestamp":1704700003000}
//! ```

pub mod runner;

use chrono::Utc;
use serde::Serialize;
use std::io::{self, Write};
use tracing::error;

use logview_app::EngineEvent;
use logview_core::LogEntry;

/// Where a `log` event's line came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LogOrigin {
    Live,
    History,
}

/// Events emitted in headless mode
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// Live stream connection state changed
    Connection {
        state: String,
        status: String,
        timestamp: i64,
    },

    /// One log line
    Log {
        source: LogOrigin,
        level: String,
        message: String,
        timestamp: i64,
    },

    /// File listing arrived or failed
    Files {
        files: Vec<String>,
        error: Option<String>,
        timestamp: i64,
    },

    /// History page applied or failed; its lines follow as `log` events
    Page {
        file: String,
        page: u32,
        total_pages: u32,
        lines: usize,
        error: Option<String>,
        timestamp: i64,
    },

    /// User-facing notice (rejected input, failed fetch)
    Notice { message: String, timestamp: i64 },

    /// Engine is shutting down
    Shutdown { timestamp: i64 },
}

impl HeadlessEvent {
    /// Emit this event to stdout as JSON
    pub fn emit(&self) {
        let json = match serde_json::to_string(self) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize headless event: {}", e);
                return;
            }
        };

        let mut stdout = io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{}", json) {
            error!("Failed to write headless event to stdout: {}", e);
            return;
        }

        if let Err(e) = stdout.flush() {
            error!("Failed to flush headless stdout: {}", e);
        }
    }

    /// Current timestamp in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    pub fn log(source: LogOrigin, entry: &LogEntry) -> Self {
        Self::Log {
            source,
            level: entry.level().as_str().to_string(),
            message: entry.formatted().to_string(),
            timestamp: Self::now(),
        }
    }

    pub fn notice(message: impl Into<String>) -> Self {
        Self::Notice {
            message: message.into(),
            timestamp: Self::now(),
        }
    }

    /// Translate one engine event into the lines to print, in order.
    pub fn from_engine_event(event: EngineEvent) -> Vec<Self> {
        let timestamp = Self::now();
        match event {
            EngineEvent::ConnectionChanged { new, status, .. } => vec![Self::Connection {
                state: new.label().to_string(),
                status,
                timestamp,
            }],
            EngineEvent::LiveEntries { entries } => entries
                .iter()
                .map(|entry| Self::log(LogOrigin::Live, entry))
                .collect(),
            EngineEvent::FilesListed { filenames, error } => vec![Self::Files {
                files: filenames,
                error,
                timestamp,
            }],
            EngineEvent::HistoryPageLoaded {
                filename,
                page,
                total_pages,
                entries,
                error,
            } => {
                let mut events = vec![Self::Page {
                    file: filename,
                    page,
                    total_pages,
                    lines: entries.len(),
                    error: error.clone(),
                    timestamp,
                }];
                // A failed fetch keeps the previous page's entries; don't repeat them
                if error.is_none() {
                    events.extend(
                        entries
                            .iter()
                            .map(|entry| Self::log(LogOrigin::History, entry)),
                    );
                }
                events
            }
            EngineEvent::Shutdown => vec![Self::Shutdown { timestamp }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use logview_app::ConnectionState;
    use logview_core::LogLevel;

    fn to_value(event: &HeadlessEvent) -> serde_json::Value {
        let json = serde_json::to_string(event).expect("serialization failed");
        serde_json::from_str(&json).expect("invalid JSON")
    }

    #[test]
    fn test_connection_serialization() {
        let events = HeadlessEvent::from_engine_event(EngineEvent::ConnectionChanged {
            old: ConnectionState::Connecting,
            new: ConnectionState::Connected,
            status: "Connected".to_string(),
        });
        assert_eq!(events.len(), 1);

        let value = to_value(&events[0]);
        assert_eq!(value["event"], "connection");
        assert_eq!(value["state"], "connected");
        assert_eq!(value["status"], "Connected");
        assert!(value["timestamp"].is_number());
    }

    #[test]
    fn test_live_entries_become_log_events_in_order() {
        let events = HeadlessEvent::from_engine_event(EngineEvent::LiveEntries {
            entries: vec![
                LogEntry::new(LogLevel::Info, "first", "first"),
                LogEntry::new(LogLevel::Error, "second", "second"),
            ],
        });
        assert_eq!(events.len(), 2);

        let first = to_value(&events[0]);
        let second = to_value(&events[1]);
        assert_eq!(first["event"], "log");
        assert_eq!(first["source"], "live");
        assert_eq!(first["message"], "first");
        assert_eq!(second["level"], "ERROR");
    }

    #[test]
    fn test_page_event_followed_by_history_lines() {
        let events = HeadlessEvent::from_engine_event(EngineEvent::HistoryPageLoaded {
            filename: "app.log".to_string(),
            page: 2,
            total_pages: 5,
            entries: vec![LogEntry::new(LogLevel::Warning, "w", "w")],
            error: None,
        });
        assert_eq!(events.len(), 2);

        let page = to_value(&events[0]);
        assert_eq!(page["event"], "page");
        assert_eq!(page["file"], "app.log");
        assert_eq!(page["page"], 2);
        assert_eq!(page["total_pages"], 5);
        assert_eq!(page["lines"], 1);
        assert!(page["error"].is_null());

        let line = to_value(&events[1]);
        assert_eq!(line["source"], "history");
        assert_eq!(line["level"], "WARNING");
    }

    #[test]
    fn test_failed_page_has_no_log_lines() {
        let events = HeadlessEvent::from_engine_event(EngineEvent::HistoryPageLoaded {
            filename: "app.log".to_string(),
            page: 3,
            total_pages: 1,
            entries: vec![LogEntry::new(LogLevel::Info, "old", "old")],
            error: Some("HTTP 500".to_string()),
        });
        assert_eq!(events.len(), 1);
        assert_eq!(to_value(&events[0])["error"], "HTTP 500");
    }

    #[test]
    fn test_files_and_shutdown_serialization() {
        let events = HeadlessEvent::from_engine_event(EngineEvent::FilesListed {
            filenames: vec!["a.log".to_string()],
            error: None,
        });
        let value = to_value(&events[0]);
        assert_eq!(value["event"], "files");
        assert_eq!(value["files"][0], "a.log");

        let events = HeadlessEvent::from_engine_event(EngineEvent::Shutdown);
        assert_eq!(to_value(&events[0])["event"], "shutdown");
    }

    #[test]
    fn test_notice_serialization() {
        let value = to_value(&HeadlessEvent::notice("Page must be between 1 and 3"));
        assert_eq!(value["event"], "notice");
        assert_eq!(value["message"], "Page must be between 1 and 3");
    }
}
