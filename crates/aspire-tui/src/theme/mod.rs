//! Centralized theme system for the landing page.
//!
//! This module provides:
//! - `palette` - Brand colors and the light/dark [`palette::Palette`]
//! - `styles` - Semantic style builder functions
//! - `icons` - Nerd Font glyphs with Unicode fallbacks

pub mod icons;
pub mod palette;
pub mod styles;
