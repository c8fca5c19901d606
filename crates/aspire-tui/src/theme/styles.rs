//! Semantic style builders.
//!
//! Every builder takes the active [`Palette`] so widgets never read the
//! theme from anywhere else.

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette::{Palette, WHITE};

// --- Surfaces ---
pub fn page(p: &Palette) -> Style {
    Style::default().bg(p.bg).fg(p.text)
}

pub fn surface(p: &Palette) -> Style {
    Style::default().bg(p.surface).fg(p.text)
}

// --- Text styles ---
pub fn text(p: &Palette) -> Style {
    Style::default().fg(p.text)
}

pub fn text_muted(p: &Palette) -> Style {
    Style::default().fg(p.text_muted)
}

pub fn heading(p: &Palette) -> Style {
    Style::default().fg(p.text).add_modifier(Modifier::BOLD)
}

/// Small uppercase label above a section heading
pub fn kicker(p: &Palette) -> Style {
    Style::default().fg(p.accent).add_modifier(Modifier::BOLD)
}

// --- Accent styles ---
pub fn accent(p: &Palette) -> Style {
    Style::default().fg(p.accent)
}

pub fn accent_bold(p: &Palette) -> Style {
    accent(p).add_modifier(Modifier::BOLD)
}

/// Filled call-to-action button
pub fn button(p: &Palette) -> Style {
    Style::default()
        .bg(p.accent)
        .fg(WHITE)
        .add_modifier(Modifier::BOLD)
}

/// Outlined secondary button
pub fn button_outline(p: &Palette) -> Style {
    Style::default().fg(p.text).add_modifier(Modifier::BOLD)
}

// --- Border styles ---
pub fn border(p: &Palette) -> Style {
    Style::default().fg(p.border)
}

pub fn border_focused(p: &Palette) -> Style {
    Style::default().fg(p.accent)
}

// --- Carousel ---
pub fn suppressed(p: &Palette) -> Style {
    Style::default().fg(p.suppressed)
}

/// Keybinding hint letter
pub fn keybinding(p: &Palette) -> Style {
    Style::default()
        .fg(p.accent)
        .add_modifier(Modifier::BOLD)
}

/// Selected row in a list
pub fn selected(p: &Palette) -> Style {
    Style::default()
        .bg(p.accent)
        .fg(WHITE)
        .add_modifier(Modifier::BOLD)
}

/// Rounded overlay container
pub fn overlay_block(p: &Palette) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_focused(p))
        .style(surface(p))
}
