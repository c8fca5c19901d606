//! Why-us section: testimonial carousel and reasons grid

use aspire_app::Carousel;
use aspire_core::content::{WHY_US_HEADING, WHY_US_KICKER};
use aspire_core::{Anchor, IconRef, Reason, Testimonial, REASONS, TESTIMONIALS};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::Widget,
};

use crate::text;
use crate::theme::styles;

use super::{render_section, section_heading, RenderContext, Section};

/// Widest the testimonial card grows
const MAX_CARD_WIDTH: usize = 80;

pub struct WhyUs<'a> {
    ctx: RenderContext,
    carousel: &'a Carousel,
}

impl<'a> WhyUs<'a> {
    pub fn new(ctx: RenderContext, carousel: &'a Carousel) -> Self {
        Self { ctx, carousel }
    }

    fn testimonial_body(
        &self,
        t: &Testimonial,
        inner: usize,
        active: bool,
    ) -> Vec<Line<'static>> {
        let p = &self.ctx.palette;
        let (quote_style, author_style, attribution_style) = if active {
            (
                styles::text(p),
                styles::text(p).add_modifier(Modifier::BOLD),
                styles::text_muted(p),
            )
        } else {
            let dim = styles::suppressed(p);
            (dim, dim, dim)
        };

        let quote = format!("\u{201c}{}\u{201d}", t.quote);
        let mut body = text::paragraph(&quote, inner, quote_style);
        body.push(Line::default());
        body.extend(text::paragraph(t.author, inner, author_style));
        body.extend(text::paragraph(&t.attribution(), inner, attribution_style));
        body
    }

    /// Every testimonial in list order. Inactive cards stay on the page in
    /// the suppressed style; all cards share the tallest body height.
    fn cards(&self, width: usize) -> Vec<Line<'static>> {
        let p = &self.ctx.palette;
        let width = width.min(MAX_CARD_WIDTH);
        let inner = width.saturating_sub(4).max(1);

        let bodies: Vec<(bool, Vec<Line<'static>>)> = TESTIMONIALS
            .iter()
            .enumerate()
            .map(|(i, t)| {
                let active = self.carousel.is_active(i);
                (active, self.testimonial_body(t, inner, active))
            })
            .collect();
        let height = bodies.iter().map(|(_, b)| b.len()).max().unwrap_or(0);

        let mut lines = Vec::new();
        for (active, mut body) in bodies {
            body.resize(height, Line::default());
            let border = if active {
                styles::border_focused(p)
            } else {
                styles::suppressed(p)
            };
            lines.extend(text::boxed(body, width, border));
        }
        lines
    }

    fn indicators(&self) -> Line<'static> {
        let p = &self.ctx.palette;
        let mut spans = vec![
            Span::styled(self.ctx.icons.get(IconRef::ChevronLeft), styles::accent(p)),
            Span::raw(" "),
        ];
        for i in 0..self.carousel.count() {
            let (dot, style) = if self.carousel.is_active(i) {
                ("\u{25cf}", styles::accent_bold(p))
            } else {
                ("\u{25cb}", styles::suppressed(p))
            };
            spans.push(Span::styled(dot, style));
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(
            self.ctx.icons.get(IconRef::ChevronRight),
            styles::accent(p),
        ));
        Line::from(spans)
    }

    fn reason_card(&self, reason: &Reason, width: usize) -> Vec<Line<'static>> {
        let p = &self.ctx.palette;
        let inner = width.saturating_sub(4).max(1);
        let title = format!("{} {}", self.ctx.icons.get(reason.icon), reason.title);

        let mut body = text::paragraph(&title, inner, styles::heading(p));
        body.extend(text::paragraph(
            reason.description,
            inner,
            styles::text_muted(p),
        ));
        text::boxed(body, width, styles::border(p))
    }
}

impl Section for WhyUs<'_> {
    fn anchor(&self) -> Option<Anchor> {
        Some(Anchor::WhyUs)
    }

    fn lines(&self, width: u16) -> Vec<Line<'static>> {
        let width = width as usize;
        let mut lines = section_heading(
            &self.ctx,
            Some(WHY_US_KICKER),
            WHY_US_HEADING,
            None,
            width,
        );

        lines.extend(self.cards(width));
        lines.push(self.indicators());
        lines.push(Line::default());

        lines.extend(text::grid(&REASONS, width, 30, 2, |r, w| {
            self.reason_card(r, w)
        }));
        lines.push(Line::default());
        lines
    }
}

impl Widget for WhyUs<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        render_section(&self, area, buf);
    }
}
