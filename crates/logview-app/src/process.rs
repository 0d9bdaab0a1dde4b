//! Message processing
//!
//! Runs a message through the TEA update function, follows up any chained
//! messages and dispatches the resulting actions in order.

use tokio::sync::mpsc;

use logview_client::HistoryApi;

use crate::actions::{handle_action, BackgroundTasks};
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function
pub fn process_message(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    api: &HistoryApi,
    tasks: &mut BackgroundTasks,
) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        for action in result.actions {
            handle_action(action, msg_tx, api, tasks);
        }

        msg = result.message;
    }
}
