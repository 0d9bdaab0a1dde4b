//! File listing and history paging handlers

use logview_client::ContentPage;
use logview_core::prelude::*;
use logview_core::LogFileDescriptor;

use crate::config::PAGE_SIZE_OPTIONS;
use crate::history::{PageOutcome, PageRequest};
use crate::message::Message;
use crate::session::Tab;
use crate::state::{AppState, PromptKind, UiMode};

use super::{UpdateAction, UpdateResult};

/// Turn a pager intent into a fetch, or surface the local rejection.
fn page_intent(state: &mut AppState, intent: Result<PageRequest>) -> UpdateResult {
    match intent {
        Ok(request) => {
            state.clear_notice();
            UpdateResult::action(UpdateAction::FetchPage(request))
        }
        Err(e) => {
            debug!("History: rejected input: {}", e);
            state.set_notice(e.to_string());
            UpdateResult::none()
        }
    }
}

// ─────────────────────────────────────────────────────────
// Server metadata
// ─────────────────────────────────────────────────────────

pub(super) fn handle_config_loaded(state: &mut AppState, title: String) -> UpdateResult {
    if !title.trim().is_empty() {
        state.title = title;
    }
    UpdateResult::none()
}

pub(super) fn handle_config_failed(error: String) -> UpdateResult {
    warn!("Failed to load server config: {}", error);
    UpdateResult::none()
}

pub(super) fn handle_refresh_files(state: &mut AppState) -> UpdateResult {
    state.files.loading = true;
    UpdateResult::action(UpdateAction::FetchFiles)
}

pub(super) fn handle_files_loaded(
    state: &mut AppState,
    files: Vec<LogFileDescriptor>,
) -> UpdateResult {
    debug!("Loaded {} log files", files.len());
    state.files.replace(files);
    UpdateResult::none()
}

pub(super) fn handle_files_failed(state: &mut AppState, error: String) -> UpdateResult {
    warn!("Failed to list log files: {}", error);
    state.files.fail(error);
    UpdateResult::none()
}

// ─────────────────────────────────────────────────────────
// File picker
// ─────────────────────────────────────────────────────────

/// Opening the picker always refreshes the listing.
pub(super) fn handle_open_file_picker(state: &mut AppState) -> UpdateResult {
    state.ui_mode = UiMode::FilePicker;
    handle_refresh_files(state)
}

pub(super) fn handle_close_file_picker(state: &mut AppState) -> UpdateResult {
    state.ui_mode = UiMode::Normal;
    UpdateResult::none()
}

pub(super) fn handle_file_picker_confirm(state: &mut AppState) -> UpdateResult {
    match state.files.selected() {
        Some(file) => UpdateResult::message(Message::SelectFile(file.filename.clone())),
        None => UpdateResult::none(),
    }
}

/// Select a file: fetch page 1, close the picker, show the history tab.
pub(super) fn handle_select_file(state: &mut AppState, filename: String) -> UpdateResult {
    let intent = state.history.select_file(filename);
    state.ui_mode = UiMode::Normal;
    state.session.switch_tab(Tab::History);
    state.history_view.reset();
    page_intent(state, intent)
}

// ─────────────────────────────────────────────────────────
// Paging
// ─────────────────────────────────────────────────────────

pub(super) fn handle_change_page(
    state: &mut AppState,
    direction: crate::history::PageDirection,
) -> UpdateResult {
    let intent = state.history.change_page(direction);
    page_intent(state, intent)
}

pub(super) fn handle_go_to_page(state: &mut AppState, page: u32) -> UpdateResult {
    let intent = state.history.go_to_page(page);
    page_intent(state, intent)
}

pub(super) fn handle_change_page_size(state: &mut AppState, size: u32) -> UpdateResult {
    let intent = state.history.change_page_size(size);
    page_intent(state, intent)
}

/// Next (or previous) entry of [`PAGE_SIZE_OPTIONS`] relative to the current size.
pub(super) fn handle_cycle_page_size(state: &mut AppState, forward: bool) -> UpdateResult {
    let current = state.history.page_size();
    let next = if forward {
        PAGE_SIZE_OPTIONS.iter().copied().find(|size| *size > current)
    } else {
        PAGE_SIZE_OPTIONS
            .iter()
            .rev()
            .copied()
            .find(|size| *size < current)
    };

    match next {
        Some(size) => handle_change_page_size(state, size),
        None => UpdateResult::none(),
    }
}

pub(super) fn handle_refresh_page(state: &mut AppState) -> UpdateResult {
    let intent = state.history.fetch_page();
    page_intent(state, intent)
}

pub(super) fn handle_page_loaded(
    state: &mut AppState,
    request: PageRequest,
    result: std::result::Result<ContentPage, String>,
) -> UpdateResult {
    match state.history.apply_response(&request, result) {
        PageOutcome::Applied => {
            state.history_view.reset();
        }
        PageOutcome::Failed => {
            if let Some(error) = state.history.last_error() {
                let notice = format!("Failed to load {}: {}", request.filename, error);
                state.set_notice(notice);
            }
        }
        PageOutcome::Stale => {}
    }
    UpdateResult::none()
}

// ─────────────────────────────────────────────────────────
// Prompt
// ─────────────────────────────────────────────────────────

pub(super) fn handle_open_prompt(state: &mut AppState, kind: PromptKind) -> UpdateResult {
    state.input_buffer.clear();
    state.ui_mode = UiMode::Prompt(kind);
    UpdateResult::none()
}

pub(super) fn handle_prompt_input(state: &mut AppState, c: char) -> UpdateResult {
    if !c.is_control() {
        state.input_buffer.push(c);
    }
    UpdateResult::none()
}

pub(super) fn handle_prompt_backspace(state: &mut AppState) -> UpdateResult {
    state.input_buffer.pop();
    UpdateResult::none()
}

pub(super) fn handle_prompt_cancel(state: &mut AppState) -> UpdateResult {
    state.input_buffer.clear();
    state.ui_mode = UiMode::Normal;
    UpdateResult::none()
}

/// Submit the prompt. The input is cleared whether or not it was accepted.
pub(super) fn handle_prompt_submit(state: &mut AppState) -> UpdateResult {
    let UiMode::Prompt(kind) = state.ui_mode else {
        return UpdateResult::none();
    };
    let input = std::mem::take(&mut state.input_buffer);
    state.ui_mode = UiMode::Normal;

    let intent = match kind {
        PromptKind::PageNumber => state.history.go_to_page_input(&input),
        PromptKind::PageSize => state.history.change_page_size_input(&input),
    };
    page_intent(state, intent)
}
