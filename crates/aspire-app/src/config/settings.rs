//! Settings parser for config.toml

use super::types::Settings;
use aspire_core::prelude::*;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "aspire";

/// Platform config directory for the page (`~/.config/aspire` on Linux)
pub fn default_config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR))
        .ok_or_else(|| Error::config_dir_unavailable(APP_DIR))
}

/// Load settings from `<config_dir>/config.toml`
///
/// Returns default settings if file doesn't exist or can't be parsed.
pub fn load_settings(config_dir: &Path) -> Settings {
    let config_path = config_dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match read_settings(&config_path) {
        Ok(settings) => {
            debug!("Loaded settings from {:?}", config_path);
            settings
        }
        Err(e) => {
            warn!("{}, using defaults", e);
            Settings::default()
        }
    }
}

/// Parse one settings file; malformed TOML is a [`Error::Config`]
fn read_settings(path: &Path) -> Result<Settings> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| Error::config(format!("{}: {}", path.display(), e.message())))
}
