//! Async WebSocket client for the live log stream.
//!
//! [`LiveStreamClient::connect`] opens the socket and spawns a background task
//! that owns it. Decoded log entries and lifecycle events flow out through an
//! mpsc channel; commands (keepalive text, disconnect) flow in through a
//! clonable [`LiveStreamHandle`].
//!
//! ```text
//! ┌────────────────────┐  cmd chan   ┌──────────────────────────┐
//! │ LiveStreamHandle   │────────────▶│ background task          │
//! │  send_heartbeat()  │             │  WebSocket read/write    │
//! │  disconnect()      │             │  loop (tokio::select!)   │
//! └────────────────────┘             │                          │
//! ┌────────────────────┐  evt chan   │  text frame → LogEntry   │
//! │ event_receiver()   │◀────────────│  close/error → events    │
//! └────────────────────┘             └──────────────────────────┘
//! ```
//!
//! The client never reconnects on its own. Reconnect policy belongs to the
//! caller, which sees exactly one [`LiveStreamEvent::Closed`] per connection.

use futures_util::stream::SplitSink;
use futures_util::{SinkExt, StreamExt};
use tokio::sync::mpsc;
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::protocol::Message as WsMessage;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream};

use logview_core::prelude::*;
use logview_core::{decode_stream_frame, LogEntry};

use crate::protocol::HEARTBEAT_PAYLOAD;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Capacity of the command channel.
const CMD_CHANNEL_CAPACITY: usize = 16;

/// Capacity of the event channel (log bursts are common).
const EVENT_CHANNEL_CAPACITY: usize = 256;

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

/// Events produced by a live stream connection.
#[derive(Debug, Clone, PartialEq)]
pub enum LiveStreamEvent {
    /// A decoded log entry.
    Entry(LogEntry),
    /// The transport failed. Always followed by [`LiveStreamEvent::Closed`].
    Error(String),
    /// The connection is gone. Last event of a connection.
    Closed { reason: Option<String> },
}

/// Commands accepted by the background task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamCommand {
    /// Write a text frame.
    SendText(String),
    /// Send a Close frame and stop the task.
    Disconnect,
}

type WsStream = WebSocketStream<MaybeTlsStream<tokio::net::TcpStream>>;

// ---------------------------------------------------------------------------
// LiveStreamHandle
// ---------------------------------------------------------------------------

/// A clonable handle to a live stream connection.
///
/// All methods are non-blocking. Once the background task has exited they
/// report [`Error::ChannelClosed`] or do nothing.
#[derive(Clone)]
pub struct LiveStreamHandle {
    cmd_tx: mpsc::Sender<StreamCommand>,
}

impl std::fmt::Debug for LiveStreamHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LiveStreamHandle")
            .field("closed", &self.cmd_tx.is_closed())
            .finish()
    }
}

impl LiveStreamHandle {
    /// Queue the keepalive payload.
    pub fn send_heartbeat(&self) -> Result<()> {
        self.send_text(HEARTBEAT_PAYLOAD)
    }

    /// Queue an arbitrary text frame.
    pub fn send_text(&self, text: impl Into<String>) -> Result<()> {
        self.cmd_tx
            .try_send(StreamCommand::SendText(text.into()))
            .map_err(|e| match e {
                mpsc::error::TrySendError::Full(_) => {
                    Error::transport("live stream command queue is full")
                }
                mpsc::error::TrySendError::Closed(_) => Error::ChannelClosed,
            })
    }

    /// Ask the background task to close the connection.
    ///
    /// The task answers with a [`LiveStreamEvent::Closed`].
    pub fn disconnect(&self) {
        if self.cmd_tx.try_send(StreamCommand::Disconnect).is_err() {
            debug!("Live stream: disconnect requested on a finished connection");
        }
    }

    /// `true` once the background task has exited.
    pub fn is_closed(&self) -> bool {
        self.cmd_tx.is_closed()
    }

    /// Create a handle whose background task has already gone away.
    #[cfg(any(test, feature = "test-helpers"))]
    pub fn new_for_test() -> Self {
        Self::new_with_receiver().0
    }

    /// Create a handle plus the receiving end of its command channel, so a
    /// test can observe what would have been written to the socket.
    #[cfg(any(test, feature = "test-helpers"))]
    pub fn new_with_receiver() -> (Self, mpsc::Receiver<StreamCommand>) {
        let (cmd_tx, cmd_rx) = mpsc::channel(CMD_CHANNEL_CAPACITY);
        (Self { cmd_tx }, cmd_rx)
    }
}

// ---------------------------------------------------------------------------
// LiveStreamClient
// ---------------------------------------------------------------------------

/// Owner of one live stream connection.
pub struct LiveStreamClient {
    handle: LiveStreamHandle,
    event_rx: mpsc::Receiver<LiveStreamEvent>,
}

impl LiveStreamClient {
    /// Open the WebSocket at `url` and start the background task.
    ///
    /// # Errors
    ///
    /// [`Error::Transport`] if the handshake fails.
    pub async fn connect(url: &str) -> Result<Self> {
        info!("Connecting to live stream at {}", url);
        let ws_stream = connect_ws(url).await?;

        let (cmd_tx, cmd_rx) = mpsc::channel::<StreamCommand>(CMD_CHANNEL_CAPACITY);
        let (event_tx, event_rx) = mpsc::channel::<LiveStreamEvent>(EVENT_CHANNEL_CAPACITY);

        tokio::spawn(run_stream_task(ws_stream, cmd_rx, event_tx));

        Ok(Self {
            handle: LiveStreamHandle { cmd_tx },
            event_rx,
        })
    }

    /// A clonable handle sharing this connection.
    pub fn handle(&self) -> LiveStreamHandle {
        self.handle.clone()
    }

    /// Receiver for connection events.
    pub fn event_receiver(&mut self) -> &mut mpsc::Receiver<LiveStreamEvent> {
        &mut self.event_rx
    }
}

// ---------------------------------------------------------------------------
// Background task
// ---------------------------------------------------------------------------

async fn run_stream_task(
    ws_stream: WsStream,
    mut cmd_rx: mpsc::Receiver<StreamCommand>,
    event_tx: mpsc::Sender<LiveStreamEvent>,
) {
    let reason = run_io_loop(ws_stream, &mut cmd_rx, &event_tx).await;
    let _ = event_tx.send(LiveStreamEvent::Closed { reason }).await;
    debug!("Live stream background task exiting");
}

/// Run the read/write select loop until the connection ends.
///
/// Returns the close reason, if one is known.
async fn run_io_loop(
    ws_stream: WsStream,
    cmd_rx: &mut mpsc::Receiver<StreamCommand>,
    event_tx: &mpsc::Sender<LiveStreamEvent>,
) -> Option<String> {
    let (mut ws_sink, mut ws_stream) = ws_stream.split();

    loop {
        tokio::select! {
            // ── Incoming WebSocket frame ─────────────────────────────────
            frame = ws_stream.next() => {
                match frame {
                    Some(Ok(WsMessage::Text(text))) => {
                        handle_ws_text(text.as_str(), event_tx).await;
                    }
                    Some(Ok(WsMessage::Close(frame))) => {
                        debug!("Live stream: received Close frame");
                        return frame.map(|f| {
                            format!("{} {}", u16::from(f.code), f.reason.as_str())
                                .trim_end()
                                .to_string()
                        });
                    }
                    Some(Ok(_)) => {
                        // Ping/Pong/Binary
                    }
                    Some(Err(err)) => {
                        warn!("Live stream: WebSocket read error: {}", err);
                        let _ = event_tx.send(LiveStreamEvent::Error(err.to_string())).await;
                        return Some(err.to_string());
                    }
                    None => {
                        debug!("Live stream: WebSocket stream ended");
                        return None;
                    }
                }
            }

            // ── Outgoing command ─────────────────────────────────────────
            cmd = cmd_rx.recv() => {
                match cmd {
                    Some(StreamCommand::SendText(text)) => {
                        if let Err(err) = ws_sink.send(WsMessage::Text(text.into())).await {
                            warn!("Live stream: write failed: {}", err);
                            let _ = event_tx.send(LiveStreamEvent::Error(err.to_string())).await;
                            return Some(err.to_string());
                        }
                    }
                    Some(StreamCommand::Disconnect) => {
                        send_close(&mut ws_sink).await;
                        return Some("closed by client".to_string());
                    }
                    None => {
                        debug!("Live stream: all handles dropped, shutting down");
                        send_close(&mut ws_sink).await;
                        return Some("closed by client".to_string());
                    }
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Helper functions
// ---------------------------------------------------------------------------

async fn connect_ws(url: &str) -> Result<WsStream> {
    let (ws_stream, _response) = connect_async(url)
        .await
        .map_err(|err| Error::transport(format!("Failed to connect to {url}: {err}")))?;
    Ok(ws_stream)
}

/// Decode a text frame and forward it if it is a log entry.
async fn handle_ws_text(text: &str, event_tx: &mpsc::Sender<LiveStreamEvent>) {
    match decode_stream_frame(text) {
        Some(entry) => {
            if event_tx.send(LiveStreamEvent::Entry(entry)).await.is_err() {
                debug!("Live stream: event receiver dropped");
            }
        }
        None => {
            let preview: String = text.chars().take(120).collect();
            debug!("Live stream: ignoring non-entry frame: {}", preview);
        }
    }
}

/// Send a WebSocket Close frame, ignoring any write errors.
async fn send_close(ws_sink: &mut SplitSink<WsStream, WsMessage>) {
    let _ = ws_sink.send(WsMessage::Close(None)).await;
    let _ = ws_sink.close().await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_heartbeat_queues_payload() {
        let (handle, mut rx) = LiveStreamHandle::new_with_receiver();
        handle.send_heartbeat().unwrap();
        assert_eq!(
            rx.try_recv().unwrap(),
            StreamCommand::SendText("heartbeat".to_string())
        );
    }

    #[test]
    fn test_disconnect_queues_command() {
        let (handle, mut rx) = LiveStreamHandle::new_with_receiver();
        handle.disconnect();
        assert_eq!(rx.try_recv().unwrap(), StreamCommand::Disconnect);
    }

    #[test]
    fn test_send_after_task_exit_reports_channel_closed() {
        let (handle, rx) = LiveStreamHandle::new_with_receiver();
        drop(rx);
        assert!(handle.is_closed());
        assert!(matches!(handle.send_heartbeat(), Err(Error::ChannelClosed)));
        handle.disconnect();
    }

    #[test]
    fn test_full_queue_is_a_transport_error() {
        let (handle, _rx) = LiveStreamHandle::new_with_receiver();
        for _ in 0..CMD_CHANNEL_CAPACITY {
            handle.send_heartbeat().unwrap();
        }
        assert!(matches!(
            handle.send_heartbeat(),
            Err(Error::Transport { .. })
        ));
    }

    #[test]
    fn test_handle_debug_does_not_panic() {
        let handle = LiveStreamHandle::new_for_test();
        let text = format!("{handle:?}");
        assert!(text.contains("LiveStreamHandle"));
    }

    #[tokio::test]
    async fn test_connect_to_unreachable_server_fails() {
        let result = LiveStreamClient::connect("ws://127.0.0.1:1/logs/ws").await;
        assert!(matches!(result, Err(Error::Transport { .. })));
    }

    #[tokio::test]
    async fn test_heartbeat_echo_is_ignored() {
        let (tx, mut rx) = mpsc::channel(4);
        handle_ws_text("heartbeat", &tx).await;
        handle_ws_text(r#"{"level":"INFO","formatted":"x | INFO | y"}"#, &tx).await;
        match rx.try_recv().unwrap() {
            LiveStreamEvent::Entry(entry) => assert_eq!(entry.formatted(), "x | INFO | y"),
            other => panic!("unexpected event {other:?}"),
        }
        assert!(rx.try_recv().is_err());
    }
}
