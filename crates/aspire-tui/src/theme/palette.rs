//! Color palette for the landing page.
//!
//! The brand colors are fixed; everything else is picked per [`ThemeMode`].

use aspire_core::ThemeMode;
use ratatui::style::Color;

// --- Brand ---
pub const BRAND_RED: Color = Color::Rgb(210, 30, 44);
pub const BRAND_NAVY: Color = Color::Rgb(34, 43, 56);
pub const WHITE: Color = Color::Rgb(255, 255, 255);

// --- Light mode ---
const LIGHT_BG: Color = Color::Rgb(248, 250, 252);
const LIGHT_SURFACE: Color = Color::Rgb(255, 255, 255);
const LIGHT_TEXT: Color = BRAND_NAVY;
const LIGHT_TEXT_MUTED: Color = Color::Rgb(100, 116, 139);
const LIGHT_BORDER: Color = Color::Rgb(226, 232, 240);
const LIGHT_SUPPRESSED: Color = Color::Rgb(203, 213, 225);

// --- Dark mode ---
const DARK_BG: Color = Color::Rgb(15, 23, 42);
const DARK_SURFACE: Color = Color::Rgb(30, 41, 59);
const DARK_TEXT: Color = Color::Rgb(241, 245, 249);
const DARK_TEXT_MUTED: Color = Color::Rgb(148, 163, 184);
const DARK_BORDER: Color = Color::Rgb(51, 65, 85);
const DARK_SUPPRESSED: Color = Color::Rgb(71, 85, 105);

/// Resolved colors for one visual mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub mode: ThemeMode,
    /// Page background
    pub bg: Color,
    /// Cards, solid header, inputs
    pub surface: Color,
    pub text: Color,
    pub text_muted: Color,
    pub accent: Color,
    pub border: Color,
    /// Inactive carousel cards and indicators
    pub suppressed: Color,
}

impl Palette {
    pub const LIGHT: Palette = Palette {
        mode: ThemeMode::Light,
        bg: LIGHT_BG,
        surface: LIGHT_SURFACE,
        text: LIGHT_TEXT,
        text_muted: LIGHT_TEXT_MUTED,
        accent: BRAND_RED,
        border: LIGHT_BORDER,
        suppressed: LIGHT_SUPPRESSED,
    };

    pub const DARK: Palette = Palette {
        mode: ThemeMode::Dark,
        bg: DARK_BG,
        surface: DARK_SURFACE,
        text: DARK_TEXT,
        text_muted: DARK_TEXT_MUTED,
        accent: BRAND_RED,
        border: DARK_BORDER,
        suppressed: DARK_SUPPRESSED,
    };

    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::LIGHT,
            ThemeMode::Dark => Self::DARK,
        }
    }
}
