//! Live stream connection and event forwarding.
//!
//! [`spawn_live_stream`] connects, hands the transport's command handle to the
//! TEA loop and then translates [`LiveStreamEvent`]s into [`Message`]s tagged
//! with the connection's generation. Exactly one `LiveStreamClosed` is sent
//! per generation, whether the connect failed or the socket went away.

use std::time::Duration;

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use logview_client::{LiveStreamClient, LiveStreamEvent};
use logview_core::Error;

use crate::message::Message;

/// Maximum time to wait for the WebSocket handshake.
const LIVE_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Spawn a task that connects the live stream and forwards its events.
pub(super) fn spawn_live_stream(
    generation: u64,
    url: String,
    msg_tx: mpsc::Sender<Message>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let connect_result =
            match tokio::time::timeout(LIVE_CONNECT_TIMEOUT, LiveStreamClient::connect(&url)).await
            {
                Ok(result) => result,
                Err(_) => Err(Error::transport("Connection timed out")),
            };

        match connect_result {
            Ok(client) => {
                let _ = msg_tx
                    .send(Message::LiveStreamAttached {
                        generation,
                        handle: client.handle(),
                    })
                    .await;
                let _ = msg_tx.send(Message::LiveStreamOpened { generation }).await;

                forward_live_events(client, generation, msg_tx).await;
            }
            Err(e) => {
                warn!("Live stream: connection failed ({}): {}", url, e);
                let _ = msg_tx
                    .send(Message::LiveStreamError {
                        generation,
                        error: e.to_string(),
                    })
                    .await;
                let _ = msg_tx
                    .send(Message::LiveStreamClosed {
                        generation,
                        reason: None,
                    })
                    .await;
            }
        }
    })
}

/// Forward events until the connection reports `Closed` or the TEA loop goes away.
async fn forward_live_events(
    mut client: LiveStreamClient,
    generation: u64,
    msg_tx: mpsc::Sender<Message>,
) {
    while let Some(event) = client.event_receiver().recv().await {
        let (msg, last) = match event {
            LiveStreamEvent::Entry(entry) => (Message::LiveStreamEntry { generation, entry }, false),
            LiveStreamEvent::Error(error) => (Message::LiveStreamError { generation, error }, false),
            LiveStreamEvent::Closed { reason } => {
                info!("Live stream: generation {} closed", generation);
                (Message::LiveStreamClosed { generation, reason }, true)
            }
        };

        if msg_tx.send(msg).await.is_err() {
            debug!("Live stream: message channel closed, stopping forwarder");
            return;
        }
        if last {
            return;
        }
    }

    let _ = msg_tx
        .send(Message::LiveStreamClosed {
            generation,
            reason: None,
        })
        .await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_failed_connect_reports_error_then_close() {
        let (tx, mut rx) = mpsc::channel(8);
        let task = spawn_live_stream(3, "ws://127.0.0.1:1/logs/ws".to_string(), tx);

        let first = rx.recv().await.unwrap();
        assert!(matches!(first, Message::LiveStreamError { generation: 3, .. }));
        let second = rx.recv().await.unwrap();
        assert!(matches!(
            second,
            Message::LiveStreamClosed {
                generation: 3,
                reason: None
            }
        ));

        task.await.unwrap();
    }
}
