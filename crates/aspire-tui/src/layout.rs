//! Screen layout definitions for the TUI
//!
//! Fixed header on top, the scrolling page in the middle and a one-row key
//! hint bar at the bottom.

use ratatui::layout::{Constraint, Layout, Rect};

use crate::widgets::HEADER_HEIGHT;

/// Terminals narrower than this get the mobile header
pub const NARROW_WIDTH: u16 = 80;

/// Widest the menu overlay grows
const MENU_WIDTH: u16 = 32;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Fixed header bar
    pub header: Rect,

    /// Scrolling page content
    pub body: Rect,

    /// Key hint bar
    pub hints: Rect,
}

/// Create the main screen layout
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        body: chunks[1],
        hints: chunks[2],
    }
}

pub fn is_narrow(area: Rect) -> bool {
    area.width < NARROW_WIDTH
}

/// Menu overlay anchored to the top-right corner of the page body
pub fn menu_overlay(body: Rect, height: u16) -> Rect {
    let width = MENU_WIDTH.min(body.width);
    let height = height.min(body.height);
    Rect::new(body.x + body.width - width, body.y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout() {
        let layout = create(Rect::new(0, 0, 80, 24));

        assert_eq!(layout.header.height, HEADER_HEIGHT);
        assert_eq!(layout.body.y, HEADER_HEIGHT);
        assert_eq!(layout.body.height, 24 - HEADER_HEIGHT - 1);
        assert_eq!(layout.hints.y, 23);
        assert_eq!(layout.hints.height, 1);
    }

    #[test]
    fn test_is_narrow() {
        assert!(is_narrow(Rect::new(0, 0, 79, 24)));
        assert!(!is_narrow(Rect::new(0, 0, 80, 24)));
    }

    #[test]
    fn test_menu_overlay_anchors_top_right() {
        let body = Rect::new(0, 2, 60, 20);
        let rect = menu_overlay(body, 8);
        assert_eq!(rect, Rect::new(28, 2, 32, 8));
    }

    #[test]
    fn test_menu_overlay_clamps_to_body() {
        let body = Rect::new(0, 2, 20, 5);
        let rect = menu_overlay(body, 8);
        assert_eq!(rect, Rect::new(0, 2, 20, 5));
    }
}
