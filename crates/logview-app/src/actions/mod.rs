//! Action handlers: UpdateAction dispatch and background task spawning

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use logview_client::HistoryApi;

use crate::message::Message;
use crate::UpdateAction;

pub(super) mod history;
pub(super) mod live_stream;
pub(super) mod timers;

/// Handles of the long-lived background tasks.
///
/// At most one live connection task and one of each timer exist at a time;
/// starting a new one aborts its predecessor.
#[derive(Debug, Default)]
pub struct BackgroundTasks {
    live: Option<JoinHandle<()>>,
    heartbeat: Option<JoinHandle<()>>,
    reconnect: Option<JoinHandle<()>>,
}

impl BackgroundTasks {
    pub fn new() -> Self {
        Self::default()
    }

    fn replace(slot: &mut Option<JoinHandle<()>>, handle: Option<JoinHandle<()>>) {
        if let Some(old) = std::mem::replace(slot, handle) {
            old.abort();
        }
    }

    pub fn set_live(&mut self, handle: JoinHandle<()>) {
        Self::replace(&mut self.live, Some(handle));
    }

    pub fn set_heartbeat(&mut self, handle: JoinHandle<()>) {
        Self::replace(&mut self.heartbeat, Some(handle));
    }

    pub fn set_reconnect(&mut self, handle: JoinHandle<()>) {
        Self::replace(&mut self.reconnect, Some(handle));
    }

    pub fn abort_heartbeat(&mut self) {
        Self::replace(&mut self.heartbeat, None);
    }

    pub fn abort_reconnect(&mut self) {
        Self::replace(&mut self.reconnect, None);
    }

    /// Abort both timers.
    pub fn abort_timers(&mut self) {
        self.abort_heartbeat();
        self.abort_reconnect();
    }

    /// Take the live connection task so the caller can await it.
    pub fn take_live(&mut self) -> Option<JoinHandle<()>> {
        self.live.take()
    }

    pub fn heartbeat_running(&self) -> bool {
        self.heartbeat.as_ref().is_some_and(|h| !h.is_finished())
    }

    pub fn reconnect_pending(&self) -> bool {
        self.reconnect.as_ref().is_some_and(|h| !h.is_finished())
    }
}

/// Execute an action by spawning a background task
pub fn handle_action(
    action: UpdateAction,
    msg_tx: &mpsc::Sender<Message>,
    api: &HistoryApi,
    tasks: &mut BackgroundTasks,
) {
    match action {
        UpdateAction::FetchConfig => {
            history::spawn_fetch_config(api.clone(), msg_tx.clone());
        }

        UpdateAction::FetchFiles => {
            history::spawn_fetch_files(api.clone(), msg_tx.clone());
        }

        UpdateAction::FetchPage(request) => {
            history::spawn_fetch_page(api.clone(), request, msg_tx.clone());
        }

        // ─────────────────────────────────────────────────────────
        // Live Stream
        // ─────────────────────────────────────────────────────────
        UpdateAction::OpenLiveStream { generation } => {
            let url = api.endpoints().stream_url().to_string();
            let handle = live_stream::spawn_live_stream(generation, url, msg_tx.clone());
            tasks.set_live(handle);
        }

        UpdateAction::CloseLiveStream(handle) => {
            debug!("Closing live stream transport");
            handle.disconnect();
        }

        UpdateAction::SendHeartbeat(handle) => {
            if let Err(e) = handle.send_heartbeat() {
                warn!("Failed to send heartbeat: {}", e);
            }
        }

        // ─────────────────────────────────────────────────────────
        // Timers
        // ─────────────────────────────────────────────────────────
        UpdateAction::StartHeartbeat {
            generation,
            interval,
        } => {
            let handle = timers::spawn_heartbeat(generation, interval, msg_tx.clone());
            tasks.set_heartbeat(handle);
        }

        UpdateAction::StopHeartbeat => tasks.abort_heartbeat(),

        UpdateAction::ScheduleReconnect { token, delay } => {
            let handle = timers::spawn_reconnect(token, delay, msg_tx.clone());
            tasks.set_reconnect(handle);
        }

        UpdateAction::CancelReconnect => tasks.abort_reconnect(),
    }
}
