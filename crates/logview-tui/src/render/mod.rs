//! Main render/view function (View in TEA pattern)


use logview_app::state::{AppState, PromptKind, UiMode};
use logview_app::Tab;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use super::{layout, widgets};
use crate::theme::palette;
use crate::widgets::{LogLines, LogView};
use logview_app::config::MAX_PAGE_SIZE;

/// Render the complete UI (View function in TEA)
///
/// Pure apart from the log view states, which record scroll bounds.
pub fn view(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();
    let palette = palette::for_theme(state.session.theme_dark());

    frame.render_widget(
        Block::default().style(Style::default().bg(palette.deepest_bg)),
        area,
    );

    let areas = layout::create(area);

    let header =
        widgets::MainHeader::new(&state.title, &state.session, &state.supervisor, palette);
    frame.render_widget(header, areas.header);

    match state.session.active_tab() {
        Tab::Realtime => {
            let log_view = LogView::new(LogLines::Live(&state.live), palette)
                .title(live_title(state))
                .empty_message(live_empty_message(state))
                .pin_to_bottom(state.session.should_follow_live());
            frame.render_stateful_widget(log_view, areas.body, &mut state.live_view);
        }
        Tab::History => {
            let split = layout::split_history(areas.body);
            frame.render_widget(
                widgets::PaginationBar::new(&state.history, palette),
                split.pagination,
            );

            let title = state
                .history
                .selected_file()
                .unwrap_or(Tab::History.label())
                .to_string();
            let log_view = LogView::new(LogLines::Page(state.history.entries()), palette)
                .title(title)
                .empty_message(history_empty_message(state));
            frame.render_stateful_widget(log_view, split.logs, &mut state.history_view);
        }
    }

    frame.render_widget(widgets::StatusBar::new(state, palette), areas.status);

    // Modal overlays based on UI mode
    match state.ui_mode {
        UiMode::Normal => {}
        UiMode::FilePicker => {
            frame.render_widget(widgets::FilePicker::new(&state.files, palette), area);
        }
        UiMode::Prompt(kind) => {
            let hint = match kind {
                PromptKind::PageNumber => format!("1-{}", state.history.total_pages()),
                PromptKind::PageSize => format!("1-{}", MAX_PAGE_SIZE),
            };
            frame.render_widget(
                widgets::PromptInput::new(kind, &state.input_buffer, palette).range_hint(hint),
                area,
            );
        }
    }
}

fn live_title(state: &AppState) -> String {
    if state.supervisor.is_enabled() {
        Tab::Realtime.label().to_string()
    } else {
        format!("{} (paused)", Tab::Realtime.label())
    }
}

fn live_empty_message(state: &AppState) -> &'static str {
    if state.supervisor.is_enabled() {
        "Waiting for log lines…"
    } else {
        "Streaming is off, press s to connect"
    }
}

fn history_empty_message(state: &AppState) -> &'static str {
    let history = &state.history;
    if history.selected_file().is_none() {
        "Press f to choose a log file"
    } else if history.is_loading() {
        "Loading…"
    } else if history.last_error().is_some() {
        "Failed to load this page"
    } else {
        "This page is empty"
    }
}
