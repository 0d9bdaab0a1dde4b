//! Live stream lifecycle handlers
//!
//! Transport and timer events go through [`ConnectionSupervisor`]; its effects
//! are applied here. State-only effects mutate [`AppState`] directly, the rest
//! become [`UpdateAction`]s for the event loop.

use logview_client::LiveStreamHandle;
use logview_core::prelude::*;
use logview_core::LogEntry;

use crate::state::AppState;
use crate::supervisor::{ConnectionState, SupervisorEffect};

use super::{UpdateAction, UpdateResult};

/// Apply supervisor effects, returning the I/O part as actions.
pub(crate) fn apply_effects(state: &mut AppState, effects: Vec<SupervisorEffect>) -> Vec<UpdateAction> {
    let mut actions = Vec::with_capacity(effects.len());
    for effect in effects {
        match effect {
            SupervisorEffect::ClearLiveBuffer => {
                state.live.clear();
                state.live_view.scroll_to_bottom();
            }
            SupervisorEffect::OpenTransport { generation } => {
                actions.push(UpdateAction::OpenLiveStream { generation });
            }
            SupervisorEffect::CloseTransport(handle) => {
                actions.push(UpdateAction::CloseLiveStream(handle));
            }
            SupervisorEffect::StartHeartbeat {
                generation,
                interval,
            } => {
                actions.push(UpdateAction::StartHeartbeat {
                    generation,
                    interval,
                });
            }
            SupervisorEffect::StopHeartbeat => actions.push(UpdateAction::StopHeartbeat),
            SupervisorEffect::SendHeartbeat(handle) => {
                actions.push(UpdateAction::SendHeartbeat(handle));
            }
            SupervisorEffect::ScheduleReconnect { token, delay } => {
                actions.push(UpdateAction::ScheduleReconnect { token, delay });
            }
            SupervisorEffect::CancelReconnect => actions.push(UpdateAction::CancelReconnect),
        }
    }
    actions
}

fn effects_result(state: &mut AppState, effects: Vec<SupervisorEffect>) -> UpdateResult {
    UpdateResult::actions(apply_effects(state, effects))
}

pub(super) fn handle_toggle_streaming(state: &mut AppState) -> UpdateResult {
    let effects = state.supervisor.toggle_enabled();
    effects_result(state, effects)
}

pub(super) fn handle_set_streaming(state: &mut AppState, enabled: bool) -> UpdateResult {
    let effects = state.supervisor.set_enabled(enabled);
    effects_result(state, effects)
}

pub(super) fn handle_attached(
    state: &mut AppState,
    generation: u64,
    handle: LiveStreamHandle,
) -> UpdateResult {
    let effects = state.supervisor.on_attached(generation, handle);
    effects_result(state, effects)
}

pub(super) fn handle_opened(state: &mut AppState, generation: u64) -> UpdateResult {
    let effects = state.supervisor.on_open(generation);
    effects_result(state, effects)
}

pub(super) fn handle_entry(state: &mut AppState, generation: u64, entry: LogEntry) -> UpdateResult {
    if !state.supervisor.is_current(generation) {
        trace!("Dropping entry from superseded generation {}", generation);
        return UpdateResult::none();
    }
    if state.supervisor.state() != ConnectionState::Connected {
        trace!("Dropping entry received while {}", state.supervisor.state().label());
        return UpdateResult::none();
    }
    state.live.append(entry);
    UpdateResult::none()
}

pub(super) fn handle_error(state: &mut AppState, generation: u64, error: String) -> UpdateResult {
    if state.supervisor.is_current(generation) {
        state.set_notice(format!("Live stream error: {error}"));
    }
    let effects = state.supervisor.on_error(generation, &error);
    effects_result(state, effects)
}

pub(super) fn handle_closed(
    state: &mut AppState,
    generation: u64,
    reason: Option<String>,
) -> UpdateResult {
    let effects = state.supervisor.on_close(generation, reason.as_deref());
    effects_result(state, effects)
}

pub(super) fn handle_heartbeat_tick(state: &mut AppState, generation: u64) -> UpdateResult {
    let effects = state.supervisor.on_heartbeat_tick(generation);
    effects_result(state, effects)
}

pub(super) fn handle_reconnect_due(state: &mut AppState, token: u64) -> UpdateResult {
    let effects = state.supervisor.on_reconnect_due(token);
    effects_result(state, effects)
}

/// Flip auto-scroll; turning it on jumps the live pane to the bottom.
pub(super) fn handle_toggle_auto_scroll(state: &mut AppState) -> UpdateResult {
    if state.session.toggle_auto_scroll() {
        state.live_view.scroll_to_bottom();
    }
    debug!(
        "Auto-scroll {}",
        if state.session.auto_scroll_enabled() { "on" } else { "off" }
    );
    UpdateResult::none()
}
