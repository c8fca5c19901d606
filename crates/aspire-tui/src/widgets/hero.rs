//! Hero banner at the top of the page

use aspire_core::content::{HERO_ACTIONS, HERO_BADGE, HERO_HEADLINE, HERO_LEAD};
use aspire_core::IconRef;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::text;
use crate::theme::styles;

use super::{render_section, RenderContext, Section};

pub struct Hero {
    ctx: RenderContext,
}

impl Hero {
    pub fn new(ctx: RenderContext) -> Self {
        Self { ctx }
    }

    fn actions(&self, width: usize) -> Vec<Line<'static>> {
        let p = &self.ctx.palette;
        let primary = Span::styled(
            format!(
                " {} {} ",
                HERO_ACTIONS[0].label,
                self.ctx.icons.get(IconRef::ArrowRight)
            ),
            styles::button(p),
        );
        let secondary = Span::styled(
            format!(" {} ", HERO_ACTIONS[1].label),
            styles::button_outline(p),
        );

        if primary.width() + 2 + secondary.width() <= width {
            vec![Line::from(vec![primary, Span::raw("  "), secondary])]
        } else {
            vec![Line::from(primary), Line::default(), Line::from(secondary)]
        }
    }
}

impl Section for Hero {
    fn lines(&self, width: u16) -> Vec<Line<'static>> {
        let p = &self.ctx.palette;
        let width = width as usize;

        let badge = format!("{} {}", self.ctx.icons.get(IconRef::Target), HERO_BADGE);

        let mut lines = vec![Line::default()];
        lines.extend(text::paragraph(&badge, width, styles::kicker(p)));
        lines.push(Line::default());
        lines.extend(text::paragraph(HERO_HEADLINE[0], width, styles::heading(p)));
        lines.extend(text::paragraph(
            HERO_HEADLINE[1],
            width,
            styles::accent_bold(p),
        ));
        lines.push(Line::default());
        lines.extend(text::paragraph(HERO_LEAD, width.min(64), styles::text_muted(p)));
        lines.push(Line::default());
        lines.extend(self.actions(width));
        lines.push(Line::default());
        lines.push(Line::default());
        lines
    }
}

impl Widget for Hero {
    fn render(self, area: Rect, buf: &mut Buffer) {
        render_section(&self, area, buf);
    }
}
