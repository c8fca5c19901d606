//! Services section: six service cards in a responsive grid

use aspire_core::content::{SERVICES_HEADING, SERVICES_KICKER, SERVICES_LEAD};
use aspire_core::{Anchor, IconRef, Service, SERVICES};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::text;
use crate::theme::styles;

use super::{render_section, section_heading, RenderContext, Section};

/// Narrowest card before the grid drops a column
const MIN_CARD_WIDTH: usize = 34;

pub struct Services {
    ctx: RenderContext,
}

impl Services {
    pub fn new(ctx: RenderContext) -> Self {
        Self { ctx }
    }

    fn card(&self, service: &Service, width: usize) -> Vec<Line<'static>> {
        let p = &self.ctx.palette;
        let inner = width.saturating_sub(4).max(1);

        let mut body = Vec::new();
        let title = format!("{} {}", self.ctx.icons.get(service.icon), service.title);
        body.extend(text::paragraph(&title, inner, styles::heading(p)));
        body.push(Line::default());
        body.extend(text::paragraph(
            service.description,
            inner,
            styles::text_muted(p),
        ));
        body.push(Line::default());

        let tags: Vec<Span<'static>> = service
            .tags
            .iter()
            .map(|tag| Span::styled(format!("#{tag}"), styles::accent(p)))
            .collect();
        body.push(text::join(tags, Span::raw("  ")));
        body.push(Line::from(Span::styled(
            format!("Learn More {}", self.ctx.icons.get(IconRef::ArrowRight)),
            styles::accent_bold(p),
        )));

        text::boxed(body, width, styles::border(p))
    }
}

impl Section for Services {
    fn anchor(&self) -> Option<Anchor> {
        Some(Anchor::Services)
    }

    fn lines(&self, width: u16) -> Vec<Line<'static>> {
        let width = width as usize;
        let mut lines = section_heading(
            &self.ctx,
            Some(SERVICES_KICKER),
            SERVICES_HEADING,
            Some(SERVICES_LEAD),
            width,
        );
        lines.extend(text::grid(&SERVICES, width, MIN_CARD_WIDTH, 3, |s, w| {
            self.card(s, w)
        }));
        lines.push(Line::default());
        lines
    }
}

impl Widget for Services {
    fn render(self, area: Rect, buf: &mut Buffer) {
        render_section(&self, area, buf);
    }
}
