//! Live stream connection lifecycle.
//!
//! [`ConnectionSupervisor`] is a pure state machine: every method takes an
//! input (user intent, transport event, timer firing) and returns the
//! [`SupervisorEffect`]s the caller must carry out. It never performs I/O.
//!
//! Each transport gets a generation number. Events tagged with an older
//! generation come from a superseded transport and are ignored, so they can
//! neither render nor trigger a reconnect. Reconnect timers carry a token
//! that is invalidated whenever the timer is cancelled.
//!
//! ```text
//!             start()                 on_open()
//! Disconnected ───────▶ Connecting ───────────▶ Connected
//!      ▲                    │                       │
//!      │   on_close()       │ on_close()            │ stop()
//!      ├────────────────────┘                       ▼
//!      └──────────────────────────────────────── Closing
//!                         on_close()
//! ```

use std::time::Duration;

use logview_client::LiveStreamHandle;
use logview_core::prelude::*;

/// Connection lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionState {
    #[default]
    Disconnected,
    Connecting,
    Connected,
    /// Close requested, waiting for the transport to confirm.
    Closing,
}

impl ConnectionState {
    pub fn label(&self) -> &'static str {
        match self {
            ConnectionState::Disconnected => "disconnected",
            ConnectionState::Connecting => "connecting",
            ConnectionState::Connected => "connected",
            ConnectionState::Closing => "closing",
        }
    }
}

/// Timing policy for keepalive and reconnect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectionPolicy {
    pub heartbeat_interval: Duration,
    pub reconnect_delay: Duration,
}

impl Default for ConnectionPolicy {
    fn default() -> Self {
        Self {
            heartbeat_interval: Duration::from_secs(30),
            reconnect_delay: Duration::from_secs(3),
        }
    }
}

/// Work the caller must perform after a transition.
#[derive(Debug, Clone)]
pub enum SupervisorEffect {
    /// Empty the live log buffer.
    ClearLiveBuffer,
    /// Open a new transport; its events must carry `generation`.
    OpenTransport { generation: u64 },
    /// Close a transport that is no longer wanted.
    CloseTransport(LiveStreamHandle),
    /// Start the periodic keepalive timer for `generation`.
    StartHeartbeat { generation: u64, interval: Duration },
    StopHeartbeat,
    /// Write the keepalive payload now.
    SendHeartbeat(LiveStreamHandle),
    /// Fire a reconnect attempt carrying `token` after `delay`.
    ScheduleReconnect { token: u64, delay: Duration },
    CancelReconnect,
}

/// Owner of the live stream connection state and transport handle.
#[derive(Debug)]
pub struct ConnectionSupervisor {
    state: ConnectionState,
    enabled: bool,
    manual_disconnect: bool,
    generation: u64,
    transport: Option<LiveStreamHandle>,
    pending_reconnect: Option<u64>,
    next_reconnect_token: u64,
    policy: ConnectionPolicy,
    last_error: Option<String>,
}

impl ConnectionSupervisor {
    pub fn new(enabled: bool, policy: ConnectionPolicy) -> Self {
        Self {
            state: ConnectionState::Disconnected,
            enabled,
            manual_disconnect: false,
            generation: 0,
            transport: None,
            pending_reconnect: None,
            next_reconnect_token: 0,
            policy,
            last_error: None,
        }
    }

    // ─────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────

    pub fn state(&self) -> ConnectionState {
        self.state
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn manual_disconnect(&self) -> bool {
        self.manual_disconnect
    }

    /// Generation of the current (or most recently requested) transport.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn has_transport(&self) -> bool {
        self.transport.is_some()
    }

    pub fn reconnect_pending(&self) -> bool {
        self.pending_reconnect.is_some()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn policy(&self) -> ConnectionPolicy {
        self.policy
    }

    /// Whether an event tagged with `generation` belongs to the live transport.
    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.generation
    }

    /// Status line text.
    pub fn status_text(&self) -> &'static str {
        match self.state {
            ConnectionState::Connected => "Connected",
            ConnectionState::Connecting => "Connecting…",
            ConnectionState::Closing | ConnectionState::Disconnected => {
                if self.manual_disconnect {
                    "Disconnected"
                } else {
                    "Not connected"
                }
            }
        }
    }

    /// Label of the connect/disconnect toggle.
    pub fn toggle_label(&self) -> &'static str {
        if self.enabled {
            "Disconnect"
        } else {
            "Connect"
        }
    }

    // ─────────────────────────────────────────────────────────
    // Intents
    // ─────────────────────────────────────────────────────────

    /// Open a fresh transport, tearing down any existing one.
    ///
    /// No-op while streaming is disabled.
    pub fn start(&mut self) -> Vec<SupervisorEffect> {
        if !self.enabled {
            debug!("Live stream: start ignored, streaming disabled");
            return Vec::new();
        }

        let mut effects = vec![SupervisorEffect::CancelReconnect, SupervisorEffect::StopHeartbeat];
        self.pending_reconnect = None;
        if let Some(handle) = self.transport.take() {
            effects.push(SupervisorEffect::CloseTransport(handle));
        }

        self.generation += 1;
        self.state = ConnectionState::Connecting;
        self.last_error = None;
        info!("Live stream: connecting (generation {})", self.generation);

        effects.push(SupervisorEffect::ClearLiveBuffer);
        effects.push(SupervisorEffect::OpenTransport {
            generation: self.generation,
        });
        effects
    }

    /// Close the transport.
    ///
    /// A user-initiated stop suppresses the reconnect that the resulting
    /// close would otherwise schedule.
    pub fn stop(&mut self, user_initiated: bool) -> Vec<SupervisorEffect> {
        self.manual_disconnect = user_initiated;
        self.pending_reconnect = None;
        let mut effects = vec![SupervisorEffect::StopHeartbeat, SupervisorEffect::CancelReconnect];

        match self.transport.take() {
            Some(handle) => {
                effects.push(SupervisorEffect::CloseTransport(handle));
                self.state = ConnectionState::Closing;
            }
            None => {
                if self.state == ConnectionState::Connecting {
                    // Orphan the in-flight connect; it is closed when it attaches.
                    self.generation += 1;
                }
                self.state = ConnectionState::Disconnected;
            }
        }
        info!(
            "Live stream: stop (user_initiated={}) -> {}",
            user_initiated,
            self.state.label()
        );
        effects
    }

    /// Enable or disable streaming.
    pub fn set_enabled(&mut self, enabled: bool) -> Vec<SupervisorEffect> {
        if enabled == self.enabled {
            return Vec::new();
        }
        self.enabled = enabled;
        if enabled {
            self.manual_disconnect = false;
            self.start()
        } else {
            self.stop(true)
        }
    }

    pub fn toggle_enabled(&mut self) -> Vec<SupervisorEffect> {
        self.set_enabled(!self.enabled)
    }

    // ─────────────────────────────────────────────────────────
    // Transport events
    // ─────────────────────────────────────────────────────────

    /// The transport for `generation` is ready to accept commands.
    pub fn on_attached(
        &mut self,
        generation: u64,
        handle: LiveStreamHandle,
    ) -> Vec<SupervisorEffect> {
        if !self.is_current(generation) {
            debug!(
                "Live stream: closing superseded transport (generation {}, current {})",
                generation, self.generation
            );
            return vec![SupervisorEffect::CloseTransport(handle)];
        }
        self.transport = Some(handle);
        Vec::new()
    }

    pub fn on_open(&mut self, generation: u64) -> Vec<SupervisorEffect> {
        if !self.is_current(generation) {
            debug!("Live stream: ignoring open of generation {}", generation);
            return Vec::new();
        }
        // A stop between attach and open leaves the transport closing.
        if self.state != ConnectionState::Connecting || self.transport.is_none() {
            debug!(
                "Live stream: ignoring open of generation {} while {}",
                generation,
                self.state.label()
            );
            return Vec::new();
        }
        self.manual_disconnect = false;
        self.state = ConnectionState::Connected;
        self.pending_reconnect = None;
        info!("Live stream: connected (generation {})", generation);
        vec![
            SupervisorEffect::CancelReconnect,
            SupervisorEffect::StartHeartbeat {
                generation,
                interval: self.policy.heartbeat_interval,
            },
        ]
    }

    /// Marks the connection down for display. The close that follows decides
    /// about reconnecting.
    pub fn on_error(&mut self, generation: u64, error: &str) -> Vec<SupervisorEffect> {
        if !self.is_current(generation) {
            return Vec::new();
        }
        warn!("Live stream: transport error: {}", error);
        self.last_error = Some(error.to_string());
        if self.state != ConnectionState::Closing {
            self.state = ConnectionState::Disconnected;
        }
        Vec::new()
    }

    pub fn on_close(&mut self, generation: u64, reason: Option<&str>) -> Vec<SupervisorEffect> {
        if !self.is_current(generation) {
            debug!("Live stream: ignoring close of generation {}", generation);
            return Vec::new();
        }
        info!(
            "Live stream: closed (generation {}): {}",
            generation,
            reason.unwrap_or("no reason")
        );
        self.transport = None;
        self.state = ConnectionState::Disconnected;

        let mut effects = vec![SupervisorEffect::StopHeartbeat];
        if self.enabled && !self.manual_disconnect {
            self.next_reconnect_token += 1;
            let token = self.next_reconnect_token;
            self.pending_reconnect = Some(token);
            info!(
                "Live stream: reconnecting in {:?}",
                self.policy.reconnect_delay
            );
            effects.push(SupervisorEffect::ScheduleReconnect {
                token,
                delay: self.policy.reconnect_delay,
            });
        }
        effects
    }

    // ─────────────────────────────────────────────────────────
    // Timers
    // ─────────────────────────────────────────────────────────

    /// Keepalive timer fired. Only an open, current transport is pinged.
    pub fn on_heartbeat_tick(&mut self, generation: u64) -> Vec<SupervisorEffect> {
        if !self.is_current(generation) || self.state != ConnectionState::Connected {
            return Vec::new();
        }
        match &self.transport {
            Some(handle) => vec![SupervisorEffect::SendHeartbeat(handle.clone())],
            None => Vec::new(),
        }
    }

    /// Reconnect timer fired.
    pub fn on_reconnect_due(&mut self, token: u64) -> Vec<SupervisorEffect> {
        if self.pending_reconnect != Some(token) {
            debug!("Live stream: ignoring cancelled reconnect {}", token);
            return Vec::new();
        }
        self.pending_reconnect = None;
        if self.manual_disconnect {
            return Vec::new();
        }
        self.start()
    }
}
