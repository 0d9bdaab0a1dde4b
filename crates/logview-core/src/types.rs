//! Domain types shared by every logview crate.

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// LogLevel
// ─────────────────────────────────────────────────────────────────────────────

/// Severity of a log line as reported by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Info,
    Error,
    Warning,
    Debug,
    /// No recognised level token was present.
    #[default]
    Unknown,
}

impl LogLevel {
    /// Parse a level token case-insensitively.
    ///
    /// Only the four levels the server emits are recognised; anything else
    /// maps to [`LogLevel::Unknown`].
    pub fn from_token(token: &str) -> Self {
        match token.trim().to_ascii_uppercase().as_str() {
            "INFO" => LogLevel::Info,
            "ERROR" => LogLevel::Error,
            "WARNING" => LogLevel::Warning,
            "DEBUG" => LogLevel::Debug,
            _ => LogLevel::Unknown,
        }
    }

    /// Upper-case label, matching the server's own spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Info => "INFO",
            LogLevel::Error => "ERROR",
            LogLevel::Warning => "WARNING",
            LogLevel::Debug => "DEBUG",
            LogLevel::Unknown => "UNKNOWN",
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, LogLevel::Error)
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// LogEntry
// ─────────────────────────────────────────────────────────────────────────────

/// A single rendered log line.
///
/// Built either from a streamed frame or from a historical line. Fields are
/// private so an entry cannot change after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    level: LogLevel,
    formatted: String,
    raw_text: String,
}

impl LogEntry {
    pub fn new(level: LogLevel, formatted: impl Into<String>, raw_text: impl Into<String>) -> Self {
        Self {
            level,
            formatted: formatted.into(),
            raw_text: raw_text.into(),
        }
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    /// Text shown to the user.
    pub fn formatted(&self) -> &str {
        &self.formatted
    }

    /// The payload exactly as received (frame text or history line).
    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// LogFileDescriptor
// ─────────────────────────────────────────────────────────────────────────────

/// One entry of the server's log file listing.
///
/// `ctime` and `size` are display strings preformatted by the server
/// (e.g. `"2024-05-01 10:00:00"`, `"1.25 KB"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogFileDescriptor {
    pub filename: String,
    #[serde(default)]
    pub ctime: String,
    #[serde(default)]
    pub size: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_from_token_is_case_insensitive() {
        assert_eq!(LogLevel::from_token("info"), LogLevel::Info);
        assert_eq!(LogLevel::from_token("Error"), LogLevel::Error);
        assert_eq!(LogLevel::from_token(" WARNING "), LogLevel::Warning);
        assert_eq!(LogLevel::from_token("debug"), LogLevel::Debug);
    }

    #[test]
    fn test_level_from_unknown_token() {
        assert_eq!(LogLevel::from_token("TRACE"), LogLevel::Unknown);
        assert_eq!(LogLevel::from_token(""), LogLevel::Unknown);
    }

    #[test]
    fn test_level_display_round_trips_through_token() {
        for level in [
            LogLevel::Info,
            LogLevel::Error,
            LogLevel::Warning,
            LogLevel::Debug,
        ] {
            assert_eq!(LogLevel::from_token(&level.to_string()), level);
        }
    }

    #[test]
    fn test_entry_accessors() {
        let entry = LogEntry::new(LogLevel::Warning, "disk low", "{\"text\":\"disk low\"}");
        assert_eq!(entry.level(), LogLevel::Warning);
        assert_eq!(entry.formatted(), "disk low");
        assert_eq!(entry.raw_text(), "{\"text\":\"disk low\"}");
    }

    #[test]
    fn test_file_descriptor_deserializes_server_shape() {
        let json = r#"{"ctime":"2024-05-01 10:00:00","filename":"app.log","size":"1.25 KB"}"#;
        let file: LogFileDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(file.filename, "app.log");
        assert_eq!(file.ctime, "2024-05-01 10:00:00");
        assert_eq!(file.size, "1.25 KB");
    }
}
