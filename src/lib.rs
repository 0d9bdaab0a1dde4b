//! logview library
//!
//! Terminal viewer for a log server's live stream and stored log files.
//! The binary in `main.rs` parses the command line and hands off to either
//! the TUI or the headless runner.

pub mod headless;

// Re-export main entry points
pub use headless::runner::run_headless;
pub use logview_tui::run_tui;
