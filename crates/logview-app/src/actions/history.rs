//! HTTP fetch tasks for server config, file listing and log pages.

use tokio::sync::mpsc;
use tracing::{debug, warn};

use logview_client::HistoryApi;

use crate::history::PageRequest;
use crate::message::Message;

pub(super) fn spawn_fetch_config(api: HistoryApi, msg_tx: mpsc::Sender<Message>) {
    tokio::spawn(async move {
        let msg = match api.fetch_config().await {
            Ok(config) => Message::ConfigLoaded {
                title: config.title,
            },
            Err(e) => Message::ConfigFailed {
                error: e.to_string(),
            },
        };
        let _ = msg_tx.send(msg).await;
    });
}

pub(super) fn spawn_fetch_files(api: HistoryApi, msg_tx: mpsc::Sender<Message>) {
    tokio::spawn(async move {
        let msg = match api.fetch_files().await {
            Ok(files) => Message::FilesLoaded { files },
            Err(e) => Message::FilesFailed {
                error: e.to_string(),
            },
        };
        let _ = msg_tx.send(msg).await;
    });
}

/// Fetch one page. The response is tagged with `request` so stale answers
/// can be recognised.
pub(super) fn spawn_fetch_page(
    api: HistoryApi,
    request: PageRequest,
    msg_tx: mpsc::Sender<Message>,
) {
    tokio::spawn(async move {
        debug!(
            "Fetching {} page {} (size {})",
            request.filename, request.page, request.page_size
        );
        let result = api
            .fetch_page(&request.filename, request.page, request.page_size)
            .await
            .map_err(|e| {
                warn!("Fetch of {} failed: {}", request.filename, e);
                e.to_string()
            });
        let _ = msg_tx.send(Message::PageLoaded { request, result }).await;
    });
}
