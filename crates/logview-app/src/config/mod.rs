//! Configuration file parsing for logview
//!
//! Supports `<config dir>/logview/config.toml` plus command line overrides.

pub mod settings;
pub mod types;

pub use settings::{default_config_path, init_config_file, load_settings};
pub use types::*;
