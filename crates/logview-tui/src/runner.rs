//! Main TUI runner - entry point and event loop

use logview_app::config::Settings;
use logview_app::Engine;
use logview_core::prelude::*;
use ratatui::DefaultTerminal;

use crate::{event, render, terminal};

/// Run the TUI until the user quits or a termination signal arrives.
///
/// The engine is created before the terminal switches to raw mode, so
/// configuration errors print normally.
pub async fn run_tui(settings: Settings) -> Result<()> {
    let mut engine = Engine::new(settings)?;

    terminal::install_panic_hook();
    let mut term = terminal::init()?;

    info!("logview TUI starting");
    engine.start();

    let result = run_loop(&mut term, &mut engine);
    if let Err(e) = &result {
        error!("TUI loop failed: {}", e);
    }

    engine.shutdown().await;
    terminal::restore();

    info!("logview TUI exiting");
    result
}

/// Main event loop
fn run_loop(terminal: &mut DefaultTerminal, engine: &mut Engine) -> Result<()> {
    while !engine.should_quit() {
        // Background results, timers and signals
        engine.drain_pending_messages();

        terminal.draw(|frame| render::view(frame, &mut engine.state))?;

        if let Some(message) = event::poll()? {
            engine.process_message(message);
        }
    }

    Ok(())
}
