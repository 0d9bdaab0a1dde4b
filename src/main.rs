//! logview - terminal viewer for a log server's live stream and stored files
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;

use clap::Parser;
use logview_app::config::{self, Settings, SettingsOverrides};
use tracing::warn;

/// logview - follow live logs and page through stored log files
#[derive(Parser, Debug)]
#[command(name = "logview")]
#[command(about = "A terminal viewer for live and historical server logs", long_about = None)]
struct Args {
    /// Log server base URL (http:// or https://)
    #[arg(long, value_name = "URL")]
    server: Option<String>,

    /// Lines per history page (1-1000)
    #[arg(long, value_name = "N")]
    page_size: Option<u32>,

    /// Start with live streaming turned off
    #[arg(long)]
    no_stream: bool,

    /// Run in headless mode (NDJSON output, no TUI)
    #[arg(long)]
    headless: bool,

    /// Config file to read instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

impl Args {
    fn overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            server_url: self.server.clone(),
            page_size: self.page_size,
            no_stream: self.no_stream,
        }
    }
}

/// Config file settings with command line overrides applied.
fn resolve_settings(args: &Args) -> Settings {
    let mut settings = match &args.config {
        Some(path) => config::load_settings(path),
        None => match config::default_config_path() {
            Some(path) => {
                if let Err(e) = config::init_config_file(&path) {
                    warn!("Could not create default config: {}", e);
                }
                config::load_settings(&path)
            }
            None => Settings::default(),
        },
    };
    settings.apply_overrides(&args.overrides());
    settings
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    if let Err(e) = logview_core::logging::init() {
        eprintln!("Warning: file logging disabled: {}", e);
    }

    let settings = resolve_settings(&args);

    if args.headless {
        logview::run_headless(settings).await?;
    } else {
        logview::run_tui(settings).await?;
    }
    Ok(())
}
