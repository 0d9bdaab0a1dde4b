//! HTTP client for the log server's listing and content endpoints.

use std::time::Duration;

use logview_core::prelude::*;
use logview_core::LogFileDescriptor;

use crate::endpoints::ServerEndpoints;
use crate::protocol::{parse_content_body, parse_files_body, ContentPage, ServerConfig};

/// Default per-request timeout.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for `/logs/config`, `/logs/files` and `/logs/content/{file}`.
///
/// Cheap to clone; clones share one connection pool.
#[derive(Debug, Clone)]
pub struct HistoryApi {
    http: reqwest::Client,
    endpoints: ServerEndpoints,
}

impl HistoryApi {
    pub fn new(endpoints: ServerEndpoints, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::config(format!("HTTP client: {e}")))?;
        Ok(Self { http, endpoints })
    }

    pub fn endpoints(&self) -> &ServerEndpoints {
        &self.endpoints
    }

    /// `GET /logs/config`
    pub async fn fetch_config(&self) -> Result<ServerConfig> {
        let body = self.get_json(&self.endpoints.config_url()).await?;
        serde_json::from_value(body).map_err(|e| Error::malformed(format!("config: {e}")))
    }

    /// `GET /logs/files`
    pub async fn fetch_files(&self) -> Result<Vec<LogFileDescriptor>> {
        let body = self.get_json(&self.endpoints.files_url()).await?;
        parse_files_body(body)
    }

    /// `GET /logs/content/{filename}?page=..&page_size=..`
    pub async fn fetch_page(
        &self,
        filename: &str,
        page: u32,
        page_size: u32,
    ) -> Result<ContentPage> {
        let url = self.endpoints.content_url(filename, page, page_size);
        let body = self.get_json(&url).await?;
        parse_content_body(body)
    }

    async fn get_json(&self, url: &str) -> Result<serde_json::Value> {
        debug!("GET {}", url);
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| Error::fetch(format!("GET {url}: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::HttpStatus {
                status: status.as_u16(),
            });
        }

        response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| Error::malformed(format!("GET {url}: {e}")))
    }
}
