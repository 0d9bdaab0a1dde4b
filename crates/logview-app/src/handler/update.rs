//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::{AppPhase, AppState};
use crate::supervisor::ConnectionState;

use super::{history, keys::handle_key, stream, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and actions
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => UpdateResult::none(),

        Message::Startup => {
            state.files.loading = true;
            let mut actions = vec![UpdateAction::FetchConfig, UpdateAction::FetchFiles];
            if state.supervisor.state() == ConnectionState::Disconnected {
                let effects = state.supervisor.start();
                actions.extend(stream::apply_effects(state, effects));
            }
            UpdateResult::actions(actions)
        }

        // ─────────────────────────────────────────────────────────
        // Server Metadata
        // ─────────────────────────────────────────────────────────
        Message::ConfigLoaded { title } => history::handle_config_loaded(state, title),
        Message::ConfigFailed { error } => history::handle_config_failed(error),
        Message::RefreshFiles => history::handle_refresh_files(state),
        Message::FilesLoaded { files } => history::handle_files_loaded(state, files),
        Message::FilesFailed { error } => history::handle_files_failed(state, error),

        // ─────────────────────────────────────────────────────────
        // Live Stream
        // ─────────────────────────────────────────────────────────
        Message::ToggleStreaming => stream::handle_toggle_streaming(state),
        Message::SetStreamingEnabled(enabled) => stream::handle_set_streaming(state, enabled),
        Message::LiveStreamAttached { generation, handle } => {
            stream::handle_attached(state, generation, handle)
        }
        Message::LiveStreamOpened { generation } => stream::handle_opened(state, generation),
        Message::LiveStreamEntry { generation, entry } => {
            stream::handle_entry(state, generation, entry)
        }
        Message::LiveStreamError { generation, error } => {
            stream::handle_error(state, generation, error)
        }
        Message::LiveStreamClosed { generation, reason } => {
            stream::handle_closed(state, generation, reason)
        }
        Message::HeartbeatTick { generation } => stream::handle_heartbeat_tick(state, generation),
        Message::ReconnectDue { token } => stream::handle_reconnect_due(state, token),

        // ─────────────────────────────────────────────────────────
        // View
        // ─────────────────────────────────────────────────────────
        Message::SwitchTab(tab) => {
            state.session.switch_tab(tab);
            UpdateResult::none()
        }
        Message::NextTab => {
            let next = state.session.active_tab().other();
            state.session.switch_tab(next);
            UpdateResult::none()
        }
        Message::ToggleAutoScroll => stream::handle_toggle_auto_scroll(state),
        Message::ToggleTheme => {
            state.session.toggle_theme();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Scroll Messages
        // ─────────────────────────────────────────────────────────
        Message::ScrollUp => {
            state.active_view_mut().scroll_up(1);
            UpdateResult::none()
        }
        Message::ScrollDown => {
            state.active_view_mut().scroll_down(1);
            UpdateResult::none()
        }
        Message::ScrollToTop => {
            state.active_view_mut().scroll_to_top();
            UpdateResult::none()
        }
        Message::ScrollToBottom => {
            state.active_view_mut().scroll_to_bottom();
            UpdateResult::none()
        }
        Message::PageUp => {
            state.active_view_mut().page_up();
            UpdateResult::none()
        }
        Message::PageDown => {
            state.active_view_mut().page_down();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // File Picker
        // ─────────────────────────────────────────────────────────
        Message::OpenFilePicker => history::handle_open_file_picker(state),
        Message::CloseFilePicker => history::handle_close_file_picker(state),
        Message::FilePickerUp => {
            state.files.select_previous();
            UpdateResult::none()
        }
        Message::FilePickerDown => {
            state.files.select_next();
            UpdateResult::none()
        }
        Message::FilePickerConfirm => history::handle_file_picker_confirm(state),

        // ─────────────────────────────────────────────────────────
        // History Paging
        // ─────────────────────────────────────────────────────────
        Message::SelectFile(filename) => history::handle_select_file(state, filename),
        Message::ChangePage(direction) => history::handle_change_page(state, direction),
        Message::GoToPage(page) => history::handle_go_to_page(state, page),
        Message::ChangePageSize(size) => history::handle_change_page_size(state, size),
        Message::CyclePageSize { forward } => history::handle_cycle_page_size(state, forward),
        Message::RefreshPage => history::handle_refresh_page(state),
        Message::PageLoaded { request, result } => {
            history::handle_page_loaded(state, request, result)
        }

        // ─────────────────────────────────────────────────────────
        // Input Prompt
        // ─────────────────────────────────────────────────────────
        Message::OpenPrompt(kind) => history::handle_open_prompt(state, kind),
        Message::PromptInput(c) => history::handle_prompt_input(state, c),
        Message::PromptBackspace => history::handle_prompt_backspace(state),
        Message::PromptSubmit => history::handle_prompt_submit(state),
        Message::PromptCancel => history::handle_prompt_cancel(state),
    }
}
