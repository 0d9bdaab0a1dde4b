//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `stream`: Live stream lifecycle handlers
//! - `history`: File listing and paging handlers
//! - `keys`: Key event handlers for UI modes

pub(crate) mod history;
pub(crate) mod keys;
pub(crate) mod stream;
pub(crate) mod update;


use std::time::Duration;

use logview_client::LiveStreamHandle;

use crate::history::PageRequest;
use crate::message::Message;

pub use keys::handle_key;
pub use update::update;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone)]
pub enum UpdateAction {
    /// Fetch `/logs/config` for the page title
    FetchConfig,

    /// Fetch the log file listing
    FetchFiles,

    /// Fetch one page of a log file
    FetchPage(PageRequest),

    /// Connect the live stream; events are tagged with `generation`
    OpenLiveStream { generation: u64 },

    /// Ask a transport to close
    CloseLiveStream(LiveStreamHandle),

    /// Start the keepalive timer for `generation`
    StartHeartbeat {
        generation: u64,
        interval: Duration,
    },

    StopHeartbeat,

    /// Write the keepalive payload
    SendHeartbeat(LiveStreamHandle),

    /// Send `ReconnectDue { token }` after `delay`
    ScheduleReconnect { token: u64, delay: Duration },

    CancelReconnect,
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Actions for the event loop to perform, in order
    pub actions: Vec<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            actions: Vec::new(),
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            actions: vec![action],
        }
    }

    pub fn actions(actions: Vec<UpdateAction>) -> Self {
        Self {
            message: None,
            actions,
        }
    }

    /// Append an action to run after the ones already queued.
    pub fn with_action(mut self, action: UpdateAction) -> Self {
        self.actions.push(action);
        self
    }
}
