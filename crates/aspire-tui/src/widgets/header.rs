//! Fixed header bar
//!
//! Transparent over the hero until the page scrolls past the threshold, then
//! drawn solid with a bottom rule. Wide terminals get the nav links and the
//! consultation button; narrow ones get the menu toggle instead.

use aspire_core::content::HEADER_CTA;
use aspire_core::{IconRef, NAV_LINKS};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::styles;

use super::RenderContext;

/// Title row plus the rule row
pub const HEADER_HEIGHT: u16 = 2;

pub struct Header {
    ctx: RenderContext,
    solid: bool,
    narrow: bool,
    menu_open: bool,
}

impl Header {
    pub fn new(ctx: RenderContext) -> Self {
        Self {
            ctx,
            solid: false,
            narrow: false,
            menu_open: false,
        }
    }

    /// Draw the scrolled (solid) variant
    pub fn solid(mut self, solid: bool) -> Self {
        self.solid = solid;
        self
    }

    /// Swap the nav links for the menu toggle
    pub fn narrow(mut self, narrow: bool) -> Self {
        self.narrow = narrow;
        self
    }

    pub fn menu_open(mut self, open: bool) -> Self {
        self.menu_open = open;
        self
    }

    fn brand(&self) -> Line<'static> {
        let p = &self.ctx.palette;
        Line::from(vec![
            Span::raw(" "),
            Span::styled(self.ctx.icons.get(IconRef::Target), styles::accent_bold(p)),
            Span::styled(" ASPIRE", styles::heading(p)),
            Span::styled(" UK", styles::accent_bold(p)),
        ])
    }

    fn actions(&self) -> Line<'static> {
        let p = &self.ctx.palette;
        let theme_icon = self.ctx.icons.theme_toggle(p.mode.is_dark());
        let mut spans = Vec::new();

        if self.narrow {
            let menu_icon = if self.menu_open {
                IconRef::Close
            } else {
                IconRef::Menu
            };
            spans.push(Span::styled(theme_icon, styles::text(p)));
            spans.push(Span::raw("  "));
            spans.push(Span::styled(self.ctx.icons.get(menu_icon), styles::text(p)));
        } else {
            for link in NAV_LINKS {
                spans.push(Span::styled(link.label, styles::text_muted(p)));
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(theme_icon, styles::text(p)));
            spans.push(Span::raw("  "));
            spans.push(Span::styled(
                format!(" {} ", HEADER_CTA.label),
                styles::button(p),
            ));
        }
        spans.push(Span::raw(" "));
        Line::from(spans)
    }
}

impl Widget for Header {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }
        let p = &self.ctx.palette;

        let bg = if self.solid {
            styles::surface(p)
        } else {
            styles::page(p)
        };
        buf.set_style(area, bg);

        let brand = self.brand();
        let actions = self.actions();
        let brand_width = brand.width() as u16;
        let actions_width = actions.width() as u16;

        buf.set_line(area.x, area.y, &brand, area.width);
        if brand_width + actions_width + 2 <= area.width {
            let x = area.x + area.width - actions_width;
            buf.set_line(x, area.y, &actions, actions_width);
        }

        if self.solid && area.height > 1 {
            let rule = Line::from(Span::styled(
                "\u{2500}".repeat(area.width as usize),
                styles::border(p),
            ));
            buf.set_line(area.x, area.y + 1, &rule, area.width);
        }
    }
}
