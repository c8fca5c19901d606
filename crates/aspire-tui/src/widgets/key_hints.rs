//! Bottom row of key hints for the active key map

use aspire_app::UiMode;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::styles;

use super::RenderContext;

const BROWSE_HINTS: &[(&str, &str)] = &[
    ("\u{2191}\u{2193}", "scroll"),
    ("s/a/w/c", "jump"),
    ("[ ]", "testimonials"),
    ("t", "theme"),
    ("m", "menu"),
    ("tab", "form"),
    ("q", "quit"),
];

const MENU_HINTS: &[(&str, &str)] = &[
    ("\u{2191}\u{2193}", "select"),
    ("enter", "go"),
    ("t", "theme"),
    ("esc", "close"),
];

const FORM_HINTS: &[(&str, &str)] = &[
    ("tab", "next field"),
    ("\u{2190}\u{2192}", "service"),
    ("enter", "send"),
    ("esc", "leave form"),
];

pub struct KeyHints {
    ctx: RenderContext,
    mode: UiMode,
}

impl KeyHints {
    pub fn new(ctx: RenderContext, mode: UiMode) -> Self {
        Self { ctx, mode }
    }

    fn hints(&self) -> &'static [(&'static str, &'static str)] {
        match self.mode {
            UiMode::Browse => BROWSE_HINTS,
            UiMode::Menu => MENU_HINTS,
            UiMode::Form => FORM_HINTS,
        }
    }
}

impl Widget for KeyHints {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }
        let p = &self.ctx.palette;
        buf.set_style(area, styles::surface(p));

        let mut spans = vec![Span::raw(" ")];
        for (key, action) in self.hints() {
            spans.push(Span::styled(*key, styles::keybinding(p)));
            spans.push(Span::styled(format!(" {action}  "), styles::text_muted(p)));
        }
        buf.set_line(area.x, area.y, &Line::from(spans), area.width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{test_context, TestTerminal};

    #[test]
    fn test_hints_follow_mode() {
        let mut term = TestTerminal::with_size(100, 1);

        term.render_widget(KeyHints::new(test_context(), UiMode::Browse), term.area());
        insta::assert_snapshot!(
            term.content().trim(),
            @"↑↓ scroll  s/a/w/c jump  [ ] testimonials  t theme  m menu  tab form  q quit"
        );

        term.render_widget(KeyHints::new(test_context(), UiMode::Menu), term.area());
        assert!(term.buffer_contains("esc close"));
        assert!(!term.buffer_contains("q quit"));

        term.render_widget(KeyHints::new(test_context(), UiMode::Form), term.area());
        assert!(term.buffer_contains("esc leave form"));
    }
}
