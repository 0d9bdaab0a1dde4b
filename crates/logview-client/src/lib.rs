//! # logview-client - Log Server Collaborators
//!
//! Talks to the log server on behalf of the app layer:
//!
//! - [`LiveStreamClient`] / [`LiveStreamHandle`] - WebSocket live stream with
//!   a background I/O task, keepalive and close commands
//! - [`HistoryApi`] - HTTP client for the config, file listing and paginated
//!   content endpoints
//! - [`ServerEndpoints`] - URL resolution (`http` → `ws`, filename encoding)
//!
//! Neither client applies retry policy. Reconnects and stale-response
//! handling live in `logview-app`.

pub mod endpoints;
pub mod history_api;
pub mod live_stream;
pub mod protocol;

pub use endpoints::{ServerEndpoints, DEFAULT_STREAM_PATH};
pub use history_api::{HistoryApi, DEFAULT_REQUEST_TIMEOUT};
pub use live_stream::{LiveStreamClient, LiveStreamEvent, LiveStreamHandle, StreamCommand};
pub use protocol::{ContentPage, ServerConfig, HEARTBEAT_PAYLOAD};
