//! Configuration types for logview

use serde::{Deserialize, Serialize};

/// Page sizes offered by the page-size selector.
pub const PAGE_SIZE_OPTIONS: &[u32] = &[20, 50, 100, 200, 500, 1000];

/// Largest page size the content endpoint accepts.
pub const MAX_PAGE_SIZE: u32 = 1000;

/// Global settings from `config.toml`
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub stream: StreamSettings,

    #[serde(default)]
    pub history: HistorySettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Where the log server lives
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ServerSettings {
    /// Base URL of the server (`http://` or `https://`)
    #[serde(default = "default_server_url")]
    pub url: String,

    /// Path of the live stream endpoint, relative to `url`
    #[serde(default = "default_stream_path")]
    pub stream_path: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            url: default_server_url(),
            stream_path: default_stream_path(),
        }
    }
}

fn default_server_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

fn default_stream_path() -> String {
    logview_client::DEFAULT_STREAM_PATH.to_string()
}

/// Live stream behaviour
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct StreamSettings {
    /// Connect to the live stream on startup
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Seconds between keepalive frames
    #[serde(default = "default_heartbeat_secs")]
    pub heartbeat_secs: u64,

    /// Seconds to wait before reconnecting after an unexpected close
    #[serde(default = "default_reconnect_delay_secs")]
    pub reconnect_delay_secs: u64,
}

impl Default for StreamSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            heartbeat_secs: default_heartbeat_secs(),
            reconnect_delay_secs: default_reconnect_delay_secs(),
        }
    }
}

fn default_heartbeat_secs() -> u64 {
    30
}

fn default_reconnect_delay_secs() -> u64 {
    3
}

/// History browsing
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct HistorySettings {
    /// Initial page size
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Timeout for each HTTP request
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for HistorySettings {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

fn default_page_size() -> u32 {
    100
}

fn default_request_timeout_secs() -> u64 {
    10
}

/// UI preferences
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Follow new live entries
    #[serde(default = "default_true")]
    pub auto_scroll: bool,

    /// Start with the dark palette
    #[serde(default = "default_true")]
    pub dark_theme: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            auto_scroll: true,
            dark_theme: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Values given on the command line. `None` keeps the file value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsOverrides {
    pub server_url: Option<String>,
    pub page_size: Option<u32>,
    pub no_stream: bool,
}

impl Settings {
    /// Apply command line overrides on top of file settings.
    pub fn apply_overrides(&mut self, overrides: &SettingsOverrides) {
        if let Some(url) = &overrides.server_url {
            self.server.url = url.clone();
        }
        if let Some(size) = overrides.page_size {
            self.history.page_size = size;
        }
        if overrides.no_stream {
            self.stream.enabled = false;
        }
    }

    /// Clamp values that would break the session into usable ranges.
    pub fn sanitized(mut self) -> Self {
        self.history.page_size = self.history.page_size.clamp(1, MAX_PAGE_SIZE);
        self.stream.heartbeat_secs = self.stream.heartbeat_secs.max(1);
        self.history.request_timeout_secs = self.history.request_timeout_secs.max(1);
        self
    }
}
