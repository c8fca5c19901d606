//! Mobile menu overlay listing the nav links and the contact CTA

use aspire_app::MobileMenu;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget},
};

use crate::text;
use crate::theme::styles;

use super::RenderContext;

pub struct MobileMenuOverlay<'a> {
    ctx: RenderContext,
    menu: &'a MobileMenu,
}

impl<'a> MobileMenuOverlay<'a> {
    pub fn new(ctx: RenderContext, menu: &'a MobileMenu) -> Self {
        Self { ctx, menu }
    }

    /// Rows needed: borders, one per link, and a gap before the CTA
    pub fn height() -> u16 {
        MobileMenu::links().len() as u16 + 3
    }

    fn rows(&self, width: usize) -> Vec<Line<'static>> {
        let p = &self.ctx.palette;
        let links = MobileMenu::links();
        let cta = links.len() - 1;

        let mut rows = Vec::with_capacity(links.len() + 1);
        for (i, link) in links.iter().enumerate() {
            let selected = i == self.menu.selected();
            if i == cta {
                rows.push(Line::default());
                let style = if selected {
                    styles::selected(p)
                } else {
                    styles::button(p)
                };
                let label = text::center(Line::from(link.label.to_string()), width);
                rows.push(text::pad_line(label, width, style).style(style));
                continue;
            }

            let marker = if selected { "\u{25b6} " } else { "  " };
            let line = Line::from(vec![Span::raw(marker), Span::raw(link.label)]);
            if selected {
                let style = styles::selected(p);
                rows.push(text::pad_line(line, width, style).style(style));
            } else {
                rows.push(line.style(styles::text(p)));
            }
        }
        rows
    }
}

impl Widget for MobileMenuOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 4 || area.height < 3 {
            return;
        }
        Clear.render(area, buf);

        let block = styles::overlay_block(&self.ctx.palette).title(" Menu ");
        let inner = block.inner(area);
        block.render(area, buf);

        Paragraph::new(self.rows(inner.width as usize)).render(inner, buf);
    }
}
