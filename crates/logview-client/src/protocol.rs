//! Wire types of the log server's HTTP and WebSocket endpoints.

use serde::Deserialize;

use logview_core::prelude::*;
use logview_core::LogFileDescriptor;

/// Keepalive payload sent over the live stream. The server echoes it back.
pub const HEARTBEAT_PAYLOAD: &str = "heartbeat";

/// Body of `GET /logs/config`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ServerConfig {
    #[serde(default)]
    pub title: String,
}

/// One page of a historical log file, as returned by the content endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentPage {
    /// Raw `logs` items: strings, occasionally already-parsed objects.
    pub logs: Vec<serde_json::Value>,
    /// Always at least 1.
    pub total_pages: u32,
    /// Page the server actually served after clamping. `None` when the server
    /// reported `0` or omitted it (empty file).
    pub current_page: Option<u32>,
    /// Total number of lines in the file, when reported.
    pub total_lines: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct ContentBody {
    #[serde(default)]
    logs: Option<serde_json::Value>,
    #[serde(default)]
    total_pages: Option<u32>,
    #[serde(default)]
    current_page: Option<u32>,
    #[serde(default)]
    total: Option<u64>,
    #[serde(default)]
    error: Option<String>,
}

/// Interpret a content endpoint body.
///
/// # Errors
///
/// - [`Error::Server`] for an `{ "error": ... }` body
/// - [`Error::MalformedResponse`] when `logs` is missing or not an array
pub fn parse_content_body(body: serde_json::Value) -> Result<ContentPage> {
    let body: ContentBody = serde_json::from_value(body)
        .map_err(|e| Error::malformed(format!("content body: {e}")))?;

    if let Some(message) = body.error.filter(|m| !m.is_empty()) {
        return Err(Error::server(message));
    }

    let logs = match body.logs {
        Some(serde_json::Value::Array(items)) => items,
        Some(_) => return Err(Error::malformed("`logs` is not an array")),
        None => return Err(Error::malformed("`logs` is missing")),
    };

    Ok(ContentPage {
        logs,
        total_pages: body.total_pages.unwrap_or(1).max(1),
        current_page: body.current_page.filter(|page| *page > 0),
        total_lines: body.total,
    })
}

/// Interpret a `GET /logs/files` body.
pub fn parse_files_body(body: serde_json::Value) -> Result<Vec<LogFileDescriptor>> {
    if let Some(message) = body
        .get("error")
        .and_then(|e| e.as_str())
        .filter(|m| !m.is_empty())
    {
        return Err(Error::server(message));
    }
    serde_json::from_value(body).map_err(|e| Error::malformed(format!("file listing: {e}")))
}
