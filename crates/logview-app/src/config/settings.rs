//! Settings parser for `config.toml`

use std::path::{Path, PathBuf};

use super::types::Settings;
use logview_core::prelude::*;

const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "logview";

/// Default location: `<config dir>/logview/config.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILENAME))
}

/// Load settings from `config_path`
///
/// Returns default settings if the file doesn't exist or can't be parsed.
pub fn load_settings(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Write a commented default config to `config_path` if none exists.
pub fn init_config_file(config_path: &Path) -> Result<()> {
    if config_path.exists() {
        return Ok(());
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| Error::config(format!("Failed to create {:?}: {}", parent, e)))?;
    }

    std::fs::write(config_path, generate_default_config())
        .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;
    info!("Created default config at {:?}", config_path);
    Ok(())
}

fn generate_default_config() -> &'static str {
    r#"# logview configuration

[server]
url = "http://127.0.0.1:8000"   # http:// or https://
stream_path = "/logs/ws"        # live stream endpoint (ws/wss derived from url)

[stream]
enabled = true                  # connect to the live stream on startup
heartbeat_secs = 30             # keepalive interval while connected
reconnect_delay_secs = 3        # fixed delay before reconnecting

[history]
page_size = 100                 # 1..=1000
request_timeout_secs = 10

[ui]
auto_scroll = true
dark_theme = true
"#
}
