//! Server endpoint URLs.
//!
//! Every request goes to a path below a single configured server URL. The
//! live stream URL is derived from it by swapping `http`/`https` for
//! `ws`/`wss`.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use url::Url;

use logview_core::prelude::*;

/// Characters left unescaped in a path component (same set as
/// `encodeURIComponent`).
const PATH_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Default path of the live stream endpoint.
pub const DEFAULT_STREAM_PATH: &str = "/logs/ws";

/// Resolved URLs for one log server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerEndpoints {
    /// Server URL without a trailing slash.
    base: String,
    stream: Url,
}

impl ServerEndpoints {
    /// Resolve endpoints for `server_url`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidUrl`] when the URL does not parse or is not `http`/`https`.
    pub fn new(server_url: &str, stream_path: &str) -> Result<Self> {
        let parsed =
            Url::parse(server_url).map_err(|e| Error::invalid_url(server_url, e.to_string()))?;

        let ws_scheme = match parsed.scheme() {
            "http" => "ws",
            "https" => "wss",
            other => {
                return Err(Error::invalid_url(
                    server_url,
                    format!("unsupported scheme '{other}', expected http or https"),
                ))
            }
        };
        if parsed.cannot_be_a_base() || parsed.host_str().is_none() {
            return Err(Error::invalid_url(server_url, "missing host"));
        }

        let mut stream = parsed.clone();
        stream
            .set_scheme(ws_scheme)
            .map_err(|_| Error::invalid_url(server_url, "cannot derive stream URL"))?;
        let prefix = parsed.path().trim_end_matches('/');
        let stream_path = if stream_path.starts_with('/') {
            stream_path.to_string()
        } else {
            format!("/{stream_path}")
        };
        stream.set_path(&format!("{prefix}{stream_path}"));
        stream.set_query(None);
        stream.set_fragment(None);

        let mut base = parsed;
        base.set_query(None);
        base.set_fragment(None);

        Ok(Self {
            base: base.as_str().trim_end_matches('/').to_string(),
            stream,
        })
    }

    /// Server URL the endpoints were resolved from.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// `GET /logs/config`
    pub fn config_url(&self) -> String {
        format!("{}/logs/config", self.base)
    }

    /// `GET /logs/files`
    pub fn files_url(&self) -> String {
        format!("{}/logs/files", self.base)
    }

    /// `GET /logs/content/{filename}?page=..&page_size=..`
    pub fn content_url(&self, filename: &str, page: u32, page_size: u32) -> String {
        format!(
            "{}/logs/content/{}?page={}&page_size={}",
            self.base,
            utf8_percent_encode(filename, PATH_COMPONENT),
            page,
            page_size
        )
    }

    /// WebSocket URL of the live stream.
    pub fn stream_url(&self) -> &str {
        self.stream.as_str()
    }
}
