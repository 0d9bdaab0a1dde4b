//! Decoding of server payloads into [`LogEntry`] values.
//!
//! Two sources feed the viewer:
//! - live stream frames, JSON objects `{ "level": ..., "formatted": ... }`
//! - historical lines from the content endpoint, either plain text or a JSON
//!   object carrying a `text` field

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

use crate::types::{LogEntry, LogLevel};

/// `| LEVEL |` token embedded in formatted log lines.
static LEVEL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\|\s*(INFO|ERROR|WARNING|DEBUG)\s*\|").expect("Invalid level pattern regex")
});

// ─────────────────────────────────────────────────────────────────────────────
// Historical lines
// ─────────────────────────────────────────────────────────────────────────────

/// A historical line after its envelope has been recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawLine<'a> {
    /// Used verbatim.
    PlainText(&'a str),
    /// A JSON object whose `text` field holds the line.
    StructuredText(String),
}

impl<'a> RawLine<'a> {
    /// Recognise the envelope of a line.
    ///
    /// Anything that does not parse as a JSON object with a string `text`
    /// field falls back to [`RawLine::PlainText`].
    pub fn parse(line: &'a str) -> Self {
        if !line.trim_start().starts_with('{') {
            return RawLine::PlainText(line);
        }
        match serde_json::from_str::<serde_json::Value>(line) {
            Ok(value) => match text_field(&value) {
                Some(text) => RawLine::StructuredText(text.to_string()),
                None => RawLine::PlainText(line),
            },
            Err(_) => RawLine::PlainText(line),
        }
    }

    pub fn text(&self) -> &str {
        match self {
            RawLine::PlainText(text) => text,
            RawLine::StructuredText(text) => text,
        }
    }
}

fn text_field(value: &serde_json::Value) -> Option<&str> {
    value
        .as_object()?
        .get("text")?
        .as_str()
        .filter(|text| !text.is_empty())
}

/// Find the first `| LEVEL |` token in a line.
pub fn detect_level(text: &str) -> LogLevel {
    LEVEL_PATTERN
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| LogLevel::from_token(m.as_str()))
        .unwrap_or_default()
}

/// Decode one historical line.
///
/// Returns `None` when the line reduces to nothing after trailing whitespace
/// is removed.
pub fn decode_history_line(line: &str) -> Option<LogEntry> {
    let raw = RawLine::parse(line);
    let text = raw.text().trim_end();
    if text.is_empty() {
        return None;
    }
    Some(LogEntry::new(detect_level(text), text, line))
}

/// Decode one item of the content endpoint's `logs` array.
///
/// Items are usually strings; already-parsed objects are accepted too and read
/// through their `text` field. `null`, empty strings and other scalars are
/// skipped.
pub fn decode_history_item(item: &serde_json::Value) -> Option<LogEntry> {
    match item {
        serde_json::Value::String(line) => decode_history_line(line),
        serde_json::Value::Object(_) => {
            let raw = item.to_string();
            let text = text_field(item).map(str::trim_end).unwrap_or(raw.as_str());
            if text.is_empty() {
                return None;
            }
            Some(LogEntry::new(detect_level(text), text, raw.as_str()))
        }
        _ => None,
    }
}

/// Decode a whole page of history items, skipping empty lines.
pub fn decode_history_page(items: &[serde_json::Value]) -> Vec<LogEntry> {
    items.iter().filter_map(decode_history_item).collect()
}

// ─────────────────────────────────────────────────────────────────────────────
// Live stream frames
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct StreamFrame {
    #[serde(default)]
    level: String,
    formatted: String,
}

/// Decode a live stream text frame.
///
/// Returns `None` for frames that are not log entries, such as the server's
/// `"heartbeat"` echo.
pub fn decode_stream_frame(frame: &str) -> Option<LogEntry> {
    let parsed: StreamFrame = serde_json::from_str(frame).ok()?;
    let formatted = parsed.formatted.trim_end();
    let level = match LogLevel::from_token(&parsed.level) {
        LogLevel::Unknown => detect_level(formatted),
        level => level,
    };
    Some(LogEntry::new(level, formatted, frame))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_plain_line_is_plain_text() {
        assert_eq!(
            RawLine::parse("2024 | INFO | ready"),
            RawLine::PlainText("2024 | INFO | ready")
        );
    }

    #[test]
    fn test_json_line_extracts_text() {
        let raw = RawLine::parse(r#"{"text":"hello","record":{}}"#);
        assert_eq!(raw, RawLine::StructuredText("hello".to_string()));
    }

    #[test]
    fn test_json_line_without_text_falls_back() {
        let line = r#"{"message":"hello"}"#;
        assert_eq!(RawLine::parse(line), RawLine::PlainText(line));
    }

    #[test]
    fn test_broken_json_falls_back() {
        let line = "{not json | ERROR |";
        assert_eq!(RawLine::parse(line), RawLine::PlainText(line));
    }

    #[test]
    fn test_detect_level_case_insensitive() {
        assert_eq!(detect_level("x |  warning | y"), LogLevel::Warning);
        assert_eq!(detect_level("x |DEBUG| y"), LogLevel::Debug);
        assert_eq!(detect_level("no level here"), LogLevel::Unknown);
        assert_eq!(detect_level("| TRACE |"), LogLevel::Unknown);
    }

    #[test]
    fn test_history_line_trims_trailing_whitespace() {
        let entry = decode_history_line("  a | INFO | b \r\n").unwrap();
        assert_eq!(entry.formatted(), "  a | INFO | b");
        assert_eq!(entry.level(), LogLevel::Info);
    }

    #[test]
    fn test_history_line_whitespace_only_is_skipped() {
        assert!(decode_history_line("").is_none());
        assert!(decode_history_line("   \n").is_none());
        assert!(decode_history_line(r#"{"text":"  \n"}"#).is_none());
    }

    #[test]
    fn test_history_page_mixed_items() {
        let items = vec![json!("{\"text\":\"A\"}"), json!("|ERROR| boom"), json!("")];
        let entries = decode_history_page(&items);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].formatted(), "A");
        assert_eq!(entries[0].level(), LogLevel::Unknown);
        assert_eq!(entries[1].formatted(), "|ERROR| boom");
        assert_eq!(entries[1].level(), LogLevel::Error);
    }

    #[test]
    fn test_history_object_item_reads_text() {
        let items = vec![json!({"text": "x | DEBUG | y\n"}), json!(null), json!(42)];
        let entries = decode_history_page(&items);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].formatted(), "x | DEBUG | y");
        assert_eq!(entries[0].level(), LogLevel::Debug);
    }

    #[test]
    fn test_stream_frame_decodes() {
        let entry =
            decode_stream_frame(r#"{"level":"ERROR","formatted":"t | ERROR | failed\n"}"#).unwrap();
        assert_eq!(entry.level(), LogLevel::Error);
        assert_eq!(entry.formatted(), "t | ERROR | failed");
    }

    #[test]
    fn test_stream_frame_unknown_level_uses_pattern() {
        let entry = decode_stream_frame(r#"{"level":"","formatted":"t | WARNING | x"}"#).unwrap();
        assert_eq!(entry.level(), LogLevel::Warning);
    }

    #[test]
    fn test_heartbeat_echo_is_not_an_entry() {
        assert!(decode_stream_frame("heartbeat").is_none());
        assert!(decode_stream_frame(r#"{"level":"INFO"}"#).is_none());
    }
}
