//! Engine - shared orchestration state for TUI and headless runners
//!
//! Owns the TEA state, the message channel, the HTTP client, background task
//! handles and the event broadcaster. Frontends feed it messages and render
//! `engine.state`.

use std::time::Duration;

use tokio::sync::{broadcast, mpsc, watch};
use tracing::{info, warn};

use logview_client::{HistoryApi, ServerEndpoints};
use logview_core::prelude::*;

use crate::actions::BackgroundTasks;
use crate::config::Settings;
use crate::engine_event::EngineEvent;
use crate::message::Message;
use crate::process;
use crate::signals;
use crate::state::AppState;
use crate::supervisor::ConnectionState;

/// How long shutdown waits for the live connection task.
const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(2);

/// Lightweight snapshot of state for change detection.
///
/// Captured before message processing, compared after to detect
/// what changed and emit appropriate EngineEvents.
#[derive(Debug, Clone, PartialEq)]
struct StateSnapshot {
    connection: ConnectionState,
    manual_disconnect: bool,
    live_appended: u64,
    history_revision: u64,
    files_revision: u64,
}

impl StateSnapshot {
    fn capture(state: &AppState) -> Self {
        Self {
            connection: state.supervisor.state(),
            manual_disconnect: state.supervisor.manual_disconnect(),
            live_appended: state.live.total_appended(),
            history_revision: state.history.revision(),
            files_revision: state.files.revision,
        }
    }
}

/// Orchestration engine for logview.
pub struct Engine {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the unified message channel.
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the unified message channel.
    pub msg_rx: mpsc::Receiver<Message>,

    /// Live connection and timer tasks
    tasks: BackgroundTasks,

    /// Sender for the shutdown signal. Send `true` to initiate shutdown.
    pub shutdown_tx: watch::Sender<bool>,

    /// Receiver for the shutdown signal. Clone for background tasks.
    pub shutdown_rx: watch::Receiver<bool>,

    pub settings: Settings,

    api: HistoryApi,

    event_tx: broadcast::Sender<EngineEvent>,
}

impl Engine {
    /// Create an Engine from resolved settings.
    ///
    /// Must be called inside a tokio runtime (spawns the signal handler).
    ///
    /// # Errors
    ///
    /// [`Error::InvalidUrl`] if the server URL is not `http://` or `https://`.
    pub fn new(settings: Settings) -> Result<Self> {
        let settings = settings.sanitized();

        let endpoints = ServerEndpoints::new(&settings.server.url, &settings.server.stream_path)
            .context("Invalid server settings")?;
        let api = HistoryApi::new(
            endpoints,
            Duration::from_secs(settings.history.request_timeout_secs),
        )?;
        info!(
            "Server: {} (stream {})",
            api.endpoints().base(),
            api.endpoints().stream_url()
        );

        let state = AppState::with_settings(settings.clone());
        let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        signals::spawn_signal_handler(msg_tx.clone());

        let (event_tx, _) = broadcast::channel(256);

        Ok(Self {
            state,
            msg_tx,
            msg_rx,
            tasks: BackgroundTasks::new(),
            shutdown_tx,
            shutdown_rx,
            settings,
            api,
            event_tx,
        })
    }

    /// Kick off the startup fetches and the live stream.
    pub fn start(&mut self) {
        self.process_message(Message::Startup);
    }

    /// Subscribe to engine events.
    ///
    /// Slow subscribers lose the oldest events
    /// (`broadcast::error::RecvError::Lagged`).
    pub fn subscribe(&self) -> broadcast::Receiver<EngineEvent> {
        self.event_tx.subscribe()
    }

    /// Process a single message through the TEA update cycle.
    pub fn process_message(&mut self, msg: Message) {
        let pre = StateSnapshot::capture(&self.state);

        process::process_message(
            &mut self.state,
            msg,
            &self.msg_tx,
            &self.api,
            &mut self.tasks,
        );

        let post = StateSnapshot::capture(&self.state);
        if pre != post {
            self.emit_events(&pre, &post);
        }
    }

    /// Drain and process all pending messages from the channel.
    ///
    /// Returns the number of messages processed.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    pub fn msg_sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    pub fn shutdown_receiver(&self) -> watch::Receiver<bool> {
        self.shutdown_rx.clone()
    }

    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    pub fn api(&self) -> &HistoryApi {
        &self.api
    }

    /// Close the live stream, stop timers and wait briefly for the
    /// connection task to finish.
    pub async fn shutdown(&mut self) {
        self.emit(EngineEvent::Shutdown);

        let effects = self.state.supervisor.stop(true);
        let actions = crate::handler::stream::apply_effects(&mut self.state, effects);
        for action in actions {
            crate::actions::handle_action(action, &self.msg_tx, &self.api, &mut self.tasks);
        }
        self.tasks.abort_timers();

        let _ = self.shutdown_tx.send(true);

        if let Some(handle) = self.tasks.take_live() {
            match tokio::time::timeout(SHUTDOWN_TIMEOUT, handle).await {
                Ok(Ok(())) => info!("Live stream task finished"),
                Ok(Err(e)) if e.is_cancelled() => {}
                Ok(Err(e)) => warn!("Live stream task panicked: {}", e),
                Err(_) => warn!("Live stream task did not finish in time"),
            }
        }
    }

    /// Emit EngineEvents based on state changes after processing.
    fn emit_events(&self, pre: &StateSnapshot, post: &StateSnapshot) {
        if pre.connection != post.connection || pre.manual_disconnect != post.manual_disconnect {
            self.emit(EngineEvent::ConnectionChanged {
                old: pre.connection,
                new: post.connection,
                status: self.state.supervisor.status_text().to_string(),
            });
        }

        if post.live_appended > pre.live_appended {
            let new_count = usize::try_from(post.live_appended - pre.live_appended)
                .unwrap_or(usize::MAX);
            let entries = self.state.live.newest(new_count);
            if !entries.is_empty() {
                self.emit(EngineEvent::LiveEntries { entries });
            }
        }

        if post.files_revision != pre.files_revision {
            self.emit(EngineEvent::FilesListed {
                filenames: self
                    .state
                    .files
                    .files
                    .iter()
                    .map(|f| f.filename.clone())
                    .collect(),
                error: self.state.files.error.clone(),
            });
        }

        if post.history_revision != pre.history_revision {
            let history = &self.state.history;
            if let Some(filename) = history.selected_file() {
                self.emit(EngineEvent::HistoryPageLoaded {
                    filename: filename.to_string(),
                    page: history.page_number(),
                    total_pages: history.total_pages(),
                    entries: history.entries().to_vec(),
                    error: history.last_error().map(str::to_string),
                });
            }
        }
    }

    /// Emit a single EngineEvent to all subscribers.
    ///
    /// `send()` only fails when nobody is subscribed.
    fn emit(&self, event: EngineEvent) {
        let _ = self.event_tx.send(event);
    }
}
