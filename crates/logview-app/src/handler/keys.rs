//! Key event handlers for UI modes

use crate::history::PageDirection;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::session::Tab;
use crate::state::{AppState, PromptKind, UiMode};

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.ui_mode {
        UiMode::Normal => handle_key_normal(state, key),
        UiMode::FilePicker => handle_key_file_picker(key),
        UiMode::Prompt(_) => handle_key_prompt(key),
    }
}

fn handle_key_normal(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        // Quit
        InputKey::Char('q') => Some(Message::Quit),
        InputKey::CharCtrl('c') => Some(Message::Quit),

        // Tabs
        InputKey::Tab | InputKey::BackTab => Some(Message::NextTab),
        InputKey::Char('1') => Some(Message::SwitchTab(Tab::Realtime)),
        InputKey::Char('2') => Some(Message::SwitchTab(Tab::History)),

        // View toggles
        InputKey::Char('a') => Some(Message::ToggleAutoScroll),
        InputKey::Char('t') => Some(Message::ToggleTheme),
        InputKey::Char('s') => Some(Message::ToggleStreaming),
        InputKey::Char('f') => Some(Message::OpenFilePicker),

        // Scrolling
        InputKey::Char('k') | InputKey::Up => Some(Message::ScrollUp),
        InputKey::Char('j') | InputKey::Down => Some(Message::ScrollDown),
        InputKey::Home => Some(Message::ScrollToTop),
        InputKey::Char('G') | InputKey::End => Some(Message::ScrollToBottom),
        InputKey::PageUp => Some(Message::PageUp),
        InputKey::PageDown => Some(Message::PageDown),

        _ if state.session.active_tab() == Tab::History => handle_key_history(key),
        _ => None,
    }
}

/// Paging keys, only meaningful on the history tab
fn handle_key_history(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('h') | InputKey::Left => Some(Message::ChangePage(PageDirection::Prev)),
        InputKey::Char('l') | InputKey::Right => Some(Message::ChangePage(PageDirection::Next)),
        InputKey::Char('[') => Some(Message::ChangePage(PageDirection::First)),
        InputKey::Char(']') => Some(Message::ChangePage(PageDirection::Last)),
        InputKey::Char('g') => Some(Message::OpenPrompt(PromptKind::PageNumber)),
        InputKey::Char('z') => Some(Message::OpenPrompt(PromptKind::PageSize)),
        InputKey::Char('+') | InputKey::Char('=') => {
            Some(Message::CyclePageSize { forward: true })
        }
        InputKey::Char('-') => Some(Message::CyclePageSize { forward: false }),
        InputKey::Char('r') => Some(Message::RefreshPage),
        _ => None,
    }
}

fn handle_key_file_picker(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('k') | InputKey::Up => Some(Message::FilePickerUp),
        InputKey::Char('j') | InputKey::Down => Some(Message::FilePickerDown),
        InputKey::Enter => Some(Message::FilePickerConfirm),
        InputKey::Char('r') => Some(Message::RefreshFiles),
        InputKey::Esc | InputKey::Char('q') | InputKey::Char('f') => {
            Some(Message::CloseFilePicker)
        }
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

fn handle_key_prompt(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter => Some(Message::PromptSubmit),
        InputKey::Esc => Some(Message::PromptCancel),
        InputKey::Backspace => Some(Message::PromptBackspace),
        InputKey::Char(c) => Some(Message::PromptInput(c)),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}
