//! Headless mode runner - main event loop without TUI
//!
//! Processes engine messages, prints engine events as NDJSON and reads
//! simple commands from stdin.

use tokio::sync::{broadcast, mpsc};
use tracing::{error, info, warn};

use logview_app::config::Settings;
use logview_app::{Engine, EngineEvent, Message, PageDirection};
use logview_core::prelude::*;

use super::HeadlessEvent;

/// Run in headless mode - output JSON events instead of TUI
pub async fn run_headless(settings: Settings) -> Result<()> {
    info!("═══════════════════════════════════════════════════════");
    info!("logview starting in HEADLESS mode");
    info!("Server: {}", settings.server.url);
    info!("═══════════════════════════════════════════════════════");

    let mut engine = Engine::new(settings)?;
    let mut events = engine.subscribe();

    // Blocking stdin reads live on their own thread
    let stdin_tx = engine.msg_sender();
    std::thread::spawn(move || {
        spawn_stdin_reader_blocking(stdin_tx);
    });

    engine.start();
    let mut last_notice = None;
    flush_events(&mut events, &engine, &mut last_notice);

    let result = headless_event_loop(&mut engine, &mut events, &mut last_notice).await;

    engine.shutdown().await;
    flush_events(&mut events, &engine, &mut last_notice);

    info!("logview headless mode exiting");
    result
}

/// Main headless event loop
async fn headless_event_loop(
    engine: &mut Engine,
    events: &mut broadcast::Receiver<EngineEvent>,
    last_notice: &mut Option<String>,
) -> Result<()> {
    loop {
        if engine.should_quit() {
            info!("Quit requested");
            break;
        }

        match engine.msg_rx.recv().await {
            Some(msg) => {
                engine.process_message(msg);
                flush_events(events, engine, last_notice);
            }
            None => {
                info!("Message channel closed");
                break;
            }
        }
    }

    Ok(())
}

/// Print every queued engine event, then the notice if it changed.
fn flush_events(
    events: &mut broadcast::Receiver<EngineEvent>,
    engine: &Engine,
    last_notice: &mut Option<String>,
) {
    loop {
        match events.try_recv() {
            Ok(event) => {
                for line in HeadlessEvent::from_engine_event(event) {
                    line.emit();
                }
            }
            Err(broadcast::error::TryRecvError::Lagged(n)) => {
                warn!("Headless output lagged, {} events dropped", n);
            }
            Err(_) => break,
        }
    }

    if engine.state.notice != *last_notice {
        if let Some(notice) = &engine.state.notice {
            HeadlessEvent::notice(notice.clone()).emit();
        }
        last_notice.clone_from(&engine.state.notice);
    }
}

/// Map one stdin line to a message.
///
/// Commands: `s`/`stream` (toggle), `connect`, `disconnect`, `files`,
/// `open <file>`, `page <n>`, `first`/`prev`/`next`/`last`, `size <n>`,
/// `reload`, `q`/`quit`.
pub fn parse_command(line: &str) -> Option<Message> {
    let line = line.trim();
    let (command, arg) = match line.split_once(char::is_whitespace) {
        Some((command, arg)) => (command, arg.trim()),
        None => (line, ""),
    };

    match (command, arg) {
        ("s" | "stream", "") => Some(Message::ToggleStreaming),
        ("connect", "") => Some(Message::SetStreamingEnabled(true)),
        ("disconnect", "") => Some(Message::SetStreamingEnabled(false)),
        ("files", "") => Some(Message::RefreshFiles),
        ("open", file) if !file.is_empty() => Some(Message::SelectFile(file.to_string())),
        ("page", n) => n.parse().ok().map(Message::GoToPage),
        ("size", n) => n.parse().ok().map(Message::ChangePageSize),
        ("first", "") => Some(Message::ChangePage(PageDirection::First)),
        ("prev", "") => Some(Message::ChangePage(PageDirection::Prev)),
        ("next", "") => Some(Message::ChangePage(PageDirection::Next)),
        ("last", "") => Some(Message::ChangePage(PageDirection::Last)),
        ("reload", "") => Some(Message::RefreshPage),
        ("q" | "quit", "") => Some(Message::Quit),
        _ => None,
    }
}

/// Read stdin commands and forward them to the message channel (blocking)
fn spawn_stdin_reader_blocking(msg_tx: mpsc::Sender<Message>) {
    use std::io::BufRead;

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        match line {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                match parse_command(trimmed) {
                    Some(msg) => {
                        let quit = matches!(msg, Message::Quit);
                        info!("Stdin: {}", trimmed);
                        if msg_tx.blocking_send(msg).is_err() || quit {
                            break;
                        }
                    }
                    None => {
                        warn!("Unknown stdin command: {}", trimmed);
                        HeadlessEvent::notice(format!("Unknown command: {}", trimmed)).emit();
                    }
                }
            }
            Err(e) => {
                error!("Failed to read stdin: {}", e);
                break;
            }
        }
    }

    info!("Stdin reader exiting");
}
