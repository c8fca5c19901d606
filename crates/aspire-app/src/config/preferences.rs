//! Theme preference persistence
//!
//! The page remembers one value between runs: the chosen [`ThemeMode`].
//! Storage sits behind [`PreferenceStore`] so the update loop can be driven
//! with an in-memory or mock store.

use super::types::UserPreferences;
use aspire_core::prelude::*;
use aspire_core::ThemeMode;
use fs2::FileExt;
use std::io::Write;
use std::path::{Path, PathBuf};

const PREFERENCES_FILENAME: &str = "preferences.toml";
const TEMP_FILENAME: &str = ".preferences.toml.tmp";
const LOCK_FILENAME: &str = ".preferences.lock";

const HEADER: &str = "# Aspire UK Advisers page preferences\n\
                      # Written automatically when the theme is toggled\n\n";

/// Key-value persistence for the theme preference
#[cfg_attr(test, mockall::automock)]
pub trait PreferenceStore: Send {
    /// Stored theme, or `None` if absent or unreadable
    fn load_theme(&self) -> Option<ThemeMode>;

    /// Persist the theme
    fn save_theme(&mut self, theme: ThemeMode) -> Result<()>;
}

/// [`PreferenceStore`] backed by `preferences.toml` in the config directory
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    dir: PathBuf,
}

impl FilePreferenceStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(PREFERENCES_FILENAME)
    }

    fn load_preferences(&self) -> Option<UserPreferences> {
        let prefs_path = self.path();

        if !prefs_path.exists() {
            debug!("No preferences file at {:?}", prefs_path);
            return None;
        }

        match std::fs::read_to_string(&prefs_path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(prefs) => {
                    debug!("Loaded preferences from {:?}", prefs_path);
                    Some(prefs)
                }
                Err(e) => {
                    warn!("Failed to parse {:?}: {}", prefs_path, e);
                    None
                }
            },
            Err(e) => {
                warn!("Failed to read {:?}: {}", prefs_path, e);
                None
            }
        }
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn load_theme(&self) -> Option<ThemeMode> {
        self.load_preferences().and_then(|prefs| prefs.theme)
    }

    fn save_theme(&mut self, theme: ThemeMode) -> Result<()> {
        let prefs = UserPreferences { theme: Some(theme) };
        save_preferences(&self.dir, &prefs)
    }
}

/// Render preferences with the comment header
pub fn render_preferences(prefs: &UserPreferences) -> Result<String> {
    let content = toml::to_string_pretty(prefs)?;
    Ok(format!("{}{}", HEADER, content))
}

/// Write preferences to `<dir>/preferences.toml`
///
/// Holds an exclusive lock on a sibling lock file while writing so two
/// instances toggling at once cannot interleave, then renames a temp file
/// over the target.
pub fn save_preferences(dir: &Path, prefs: &UserPreferences) -> Result<()> {
    if !dir.exists() {
        std::fs::create_dir_all(dir)
            .map_err(|e| Error::preferences(format!("Failed to create {:?}: {}", dir, e)))?;
    }

    let prefs_path = dir.join(PREFERENCES_FILENAME);
    let temp_path = dir.join(TEMP_FILENAME);
    let full_content = render_preferences(prefs)?;

    let lock = std::fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(false)
        .open(dir.join(LOCK_FILENAME))
        .map_err(|e| Error::preferences(format!("Failed to open lock file: {}", e)))?;
    lock.lock_exclusive()
        .map_err(|e| Error::preferences(format!("Failed to lock preferences: {}", e)))?;

    let mut temp = std::fs::File::create(&temp_path)
        .map_err(|e| Error::preferences(format!("Failed to create temp file: {}", e)))?;
    temp.write_all(full_content.as_bytes())
        .map_err(|e| Error::preferences(format!("Failed to write temp file: {}", e)))?;
    temp.flush()
        .map_err(|e| Error::preferences(format!("Failed to flush temp file: {}", e)))?;
    drop(temp);

    std::fs::rename(&temp_path, &prefs_path)
        .map_err(|e| Error::preferences(format!("Failed to rename temp file: {}", e)))?;

    // Lock is released when `lock` is dropped
    debug!("Saved preferences to {:?}", prefs_path);
    Ok(())
}

/// In-memory store; nothing survives the process
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceStore {
    theme: Option<ThemeMode>,
}

impl MemoryPreferenceStore {
    pub fn with_theme(theme: ThemeMode) -> Self {
        Self { theme: Some(theme) }
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn load_theme(&self) -> Option<ThemeMode> {
        self.theme
    }

    fn save_theme(&mut self, theme: ThemeMode) -> Result<()> {
        self.theme = Some(theme);
        Ok(())
    }
}
