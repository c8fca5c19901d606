//! aspire-tui - Terminal UI for the Aspire landing page
//!
//! This crate renders the page with ratatui: section widgets laid out as one
//! scrolling page, the fixed header, the mobile menu overlay and key hints.
//! It converts crossterm events into app messages and drives the TEA loop
//! from aspire-app.

pub mod event;
pub mod layout;
pub mod page;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod text;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
