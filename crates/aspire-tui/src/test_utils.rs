//! Rendering helpers for widget and full-page tests
//!
//! Everything draws into ratatui's `TestBackend`; assertions work on the
//! buffer as plain text rows.

use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use ratatui::{Frame, Terminal};

use aspire_app::config::IconMode;
use aspire_core::ThemeMode;

use crate::widgets::RenderContext;

/// Default page size: wide enough for the full header nav
pub const PAGE_WIDTH: u16 = 100;
pub const PAGE_HEIGHT: u16 = 24;

pub struct TestTerminal {
    terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    /// A 100x24 terminal
    pub fn new() -> Self {
        Self::with_size(PAGE_WIDTH, PAGE_HEIGHT)
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        let terminal = Terminal::new(TestBackend::new(width, height))
            .expect("Failed to create test terminal");
        Self { terminal }
    }

    pub fn area(&self) -> Rect {
        *self.buffer().area()
    }

    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.terminal
            .draw(|frame| frame.render_widget(widget, area))
            .expect("Failed to render widget");
    }

    /// Draw a whole frame, e.g. through `render::draw`
    pub fn draw_with<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(f).expect("Failed to draw frame");
    }

    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    /// Text of one buffer row; empty past the bottom edge
    pub fn row(&self, y: u16) -> String {
        let buf = self.buffer();
        if y >= buf.area.height {
            return String::new();
        }
        (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect()
    }

    /// Cell position of the first occurrence of `text`
    pub fn find(&self, text: &str) -> Option<(u16, u16)> {
        let buf = self.buffer();
        (0..buf.area.height).find_map(|y| {
            let mut row = String::new();
            let mut starts = Vec::new();
            for x in 0..buf.area.width {
                starts.push((row.len(), x));
                row.push_str(buf[(x, y)].symbol());
            }
            let byte = row.find(text)?;
            starts
                .iter()
                .rev()
                .find(|(offset, _)| *offset <= byte)
                .map(|&(_, x)| (x, y))
        })
    }

    pub fn line_contains(&self, y: u16, text: &str) -> bool {
        self.row(y).contains(text)
    }

    pub fn buffer_contains(&self, text: &str) -> bool {
        self.content().contains(text)
    }

    /// All rows joined with newlines
    pub fn content(&self) -> String {
        (0..self.buffer().area.height)
            .map(|y| self.row(y))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Light theme, Unicode icons
pub fn test_context() -> RenderContext {
    RenderContext::new(ThemeMode::Light, IconMode::Unicode)
}

/// Dark theme, Unicode icons
pub fn dark_context() -> RenderContext {
    RenderContext::new(ThemeMode::Dark, IconMode::Unicode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::widgets::Paragraph;

    #[test]
    fn test_default_size_fits_wide_layout() {
        let term = TestTerminal::new();
        assert_eq!(term.area(), Rect::new(0, 0, PAGE_WIDTH, PAGE_HEIGHT));
        assert!(!crate::layout::is_narrow(term.area()));
    }

    #[test]
    fn test_rows_and_content() {
        let mut term = TestTerminal::with_size(12, 3);
        term.render_widget(Paragraph::new("Aspire\nUK"), term.area());

        assert_eq!(term.row(0), "Aspire      ");
        assert!(term.line_contains(1, "UK"));
        assert_eq!(term.row(9), "");
        assert_eq!(term.content().lines().count(), 3);
        assert!(term.buffer_contains("Aspire"));
        assert_eq!(term.find("UK"), Some((0, 1)));
        assert_eq!(term.find("pire"), Some((2, 0)));
        assert_eq!(term.find("Advisers"), None);
    }
}
