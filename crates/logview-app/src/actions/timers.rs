//! Keepalive and reconnect timers. Both only send messages; the supervisor
//! decides what a firing means.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::message::Message;

/// Send `HeartbeatTick { generation }` every `interval`, starting one
/// interval from now.
pub(super) fn spawn_heartbeat(
    generation: u64,
    interval: Duration,
    msg_tx: mpsc::Sender<Message>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        // The first tick completes immediately.
        ticker.tick().await;
        loop {
            ticker.tick().await;
            if msg_tx.send(Message::HeartbeatTick { generation }).await.is_err() {
                break;
            }
        }
    })
}

/// Send `ReconnectDue { token }` once after `delay`.
pub(super) fn spawn_reconnect(
    token: u64,
    delay: Duration,
    msg_tx: mpsc::Sender<Message>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        let _ = msg_tx.send(Message::ReconnectDue { token }).await;
    })
}
