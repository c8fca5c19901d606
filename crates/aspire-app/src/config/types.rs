//! Configuration type definitions

use aspire_core::ThemeMode;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Shortest auto-advance period accepted from config
pub const MIN_INTERVAL_MS: u64 = 1000;

/// Default auto-advance period of the testimonial carousel
pub const DEFAULT_INTERVAL_MS: u64 = 8000;

/// Global settings from config.toml
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub ui: UiSettings,

    #[serde(default)]
    pub carousel: CarouselSettings,
}

/// Icon rendering mode for the TUI.
///
/// Unicode symbols work in every terminal; Nerd Font glyphs need a patched font.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IconMode {
    #[default]
    Unicode,
    NerdFonts,
}

impl std::fmt::Display for IconMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IconMode::Unicode => write!(f, "unicode"),
            IconMode::NerdFonts => write!(f, "nerd_fonts"),
        }
    }
}

/// UI settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiSettings {
    #[serde(default)]
    pub icons: IconMode,

    /// Capture the mouse wheel for scrolling
    #[serde(default = "default_true")]
    pub mouse: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            icons: IconMode::default(),
            mouse: true,
        }
    }
}

/// Testimonial carousel settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CarouselSettings {
    #[serde(default = "default_true")]
    pub auto_advance: bool,

    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
}

impl Default for CarouselSettings {
    fn default() -> Self {
        Self {
            auto_advance: true,
            interval_ms: DEFAULT_INTERVAL_MS,
        }
    }
}

impl CarouselSettings {
    /// Auto-advance period, never shorter than [`MIN_INTERVAL_MS`]
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms.max(MIN_INTERVAL_MS))
    }
}

fn default_true() -> bool {
    true
}

fn default_interval_ms() -> u64 {
    DEFAULT_INTERVAL_MS
}

/// Contents of preferences.toml
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct UserPreferences {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<ThemeMode>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.ui.icons, IconMode::Unicode);
        assert!(settings.ui.mouse);
        assert!(settings.carousel.auto_advance);
        assert_eq!(settings.carousel.interval(), Duration::from_millis(8000));
    }

    #[test]
    fn test_settings_partial_sections() {
        let settings: Settings = toml::from_str("[ui]\nicons = \"nerd_fonts\"\n").unwrap();
        assert_eq!(settings.ui.icons, IconMode::NerdFonts);
        assert!(settings.ui.mouse);
        assert_eq!(settings.carousel.interval_ms, DEFAULT_INTERVAL_MS);
    }

    #[test]
    fn test_interval_is_clamped() {
        let carousel = CarouselSettings {
            auto_advance: true,
            interval_ms: 10,
        };
        assert_eq!(carousel.interval(), Duration::from_millis(MIN_INTERVAL_MS));
    }

    #[test]
    fn test_icon_mode_display() {
        assert_eq!(IconMode::Unicode.to_string(), "unicode");
        assert_eq!(IconMode::NerdFonts.to_string(), "nerd_fonts");
    }

    #[test]
    fn test_user_preferences_theme_values() {
        let prefs: UserPreferences = toml::from_str("theme = \"dark\"").unwrap();
        assert_eq!(prefs.theme, Some(ThemeMode::Dark));

        let empty: UserPreferences = toml::from_str("").unwrap();
        assert_eq!(empty.theme, None);

        assert!(toml::from_str::<UserPreferences>("theme = \"sepia\"").is_err());
    }
}
