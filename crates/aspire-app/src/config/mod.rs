//! Configuration and persisted preferences
//!
//! Supports:
//! - `<config_dir>/config.toml` - UI and carousel settings
//! - `<config_dir>/preferences.toml` - theme chosen at runtime

pub mod preferences;
pub mod settings;
pub mod types;

pub use preferences::{
    render_preferences, save_preferences, FilePreferenceStore, MemoryPreferenceStore,
    PreferenceStore,
};
pub use settings::{default_config_dir, load_settings};
pub use types::*;

#[cfg(test)]
pub use preferences::MockPreferenceStore;
