//! Page footer: firm blurb, link columns, newsletter signup and legal line

use aspire_app::contact::NewsletterForm;
use aspire_app::FormField;
use aspire_core::content::{copyright_line, FOOTER_BLURB, NEWSLETTER_LEAD};
use aspire_core::{FooterColumn, IconRef, FOOTER_COLUMNS, LEGAL_LINKS};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::Widget,
};

use crate::text;
use crate::theme::styles;

use super::contact::{input_line, placeholder};
use super::{render_section, RenderContext, Section};

const NEWSLETTER_INPUT_WIDTH: usize = 32;

pub struct Footer<'a> {
    ctx: RenderContext,
    newsletter: &'a NewsletterForm,
    focused: bool,
    year: i32,
}

impl<'a> Footer<'a> {
    pub fn new(
        ctx: RenderContext,
        newsletter: &'a NewsletterForm,
        focused: bool,
        year: i32,
    ) -> Self {
        Self {
            ctx,
            newsletter,
            focused,
            year,
        }
    }

    fn rule(&self, width: usize) -> Line<'static> {
        Line::from(Span::styled(
            "\u{2500}".repeat(width),
            styles::border(&self.ctx.palette),
        ))
    }

    fn column(&self, column: &FooterColumn) -> Vec<Line<'static>> {
        let p = &self.ctx.palette;
        let mut lines = vec![
            Line::from(Span::styled(
                column.title.to_uppercase(),
                styles::heading(p),
            )),
            Line::default(),
        ];
        for link in column.links {
            let style = if link.anchor.is_placeholder() {
                styles::suppressed(p)
            } else {
                styles::text_muted(p)
            };
            lines.push(Line::from(Span::styled(link.label, style)));
        }
        lines
    }

    fn newsletter(&self, width: usize) -> Vec<Line<'static>> {
        let p = &self.ctx.palette;
        let join = Span::styled(" Join ", styles::button(p));
        let marker = if self.focused {
            Span::styled("\u{25b6} ", styles::accent_bold(p))
        } else {
            Span::raw("  ")
        };
        let input_width = width
            .saturating_sub(marker.width() + join.width() + 1)
            .min(NEWSLETTER_INPUT_WIDTH);
        let input = input_line(
            &self.ctx,
            &self.newsletter.email,
            placeholder(FormField::Newsletter),
            self.focused,
            input_width,
        );

        let mut row = vec![marker];
        row.extend(text::pad_line(input, input_width, styles::surface(p)).spans);
        row.push(Span::raw(" "));
        row.push(join);

        let mut lines = vec![
            Line::from(Span::styled("NEWSLETTER", styles::heading(p))),
            Line::default(),
        ];
        lines.extend(text::paragraph(NEWSLETTER_LEAD, width, styles::text_muted(p)));
        lines.push(Line::from(row));
        lines
    }
}

impl Section for Footer<'_> {
    fn lines(&self, width: u16) -> Vec<Line<'static>> {
        let p = &self.ctx.palette;
        let width = width as usize;

        let mut lines = vec![self.rule(width), Line::default()];
        lines.push(Line::from(vec![
            Span::styled(self.ctx.icons.get(IconRef::Target), styles::accent_bold(p)),
            Span::styled(" ASPIRE", styles::heading(p)),
            Span::styled(" UK", styles::accent_bold(p)),
        ]));
        lines.push(Line::default());
        lines.extend(text::paragraph(
            FOOTER_BLURB,
            width.min(64),
            styles::text_muted(p),
        ));
        lines.push(Line::default());

        lines.extend(text::grid(&FOOTER_COLUMNS, width, 24, 2, |c, _| {
            self.column(c)
        }));
        lines.push(Line::default());
        lines.extend(self.newsletter(width));
        lines.push(Line::default());

        lines.push(self.rule(width));
        lines.extend(text::paragraph(
            &copyright_line(self.year),
            width,
            styles::text_muted(p).add_modifier(Modifier::BOLD),
        ));
        let legal = LEGAL_LINKS
            .iter()
            .map(|link| Span::styled(link.label.to_uppercase(), styles::suppressed(p)))
            .collect();
        lines.push(text::join(legal, Span::styled(" \u{b7} ", styles::text_muted(p))));
        lines.push(Line::default());
        lines
    }
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        render_section(&self, area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{test_context, TestTerminal};

    #[test]
    fn test_footer_renders_copyright_for_year() {
        let newsletter = NewsletterForm::default();
        let mut term = TestTerminal::with_size(80, 40);
        term.render_widget(
            Footer::new(test_context(), &newsletter, false, 2031),
            term.area(),
        );

        assert!(term.buffer_contains("© 2031 Aspire UK Advisers"));
        assert!(term.buffer_contains("PRIVACY · TERMS · COOKIES"));
        assert!(term.buffer_contains("Payroll Solutions"));
        assert!(term.buffer_contains("Why Choose Us"));
    }

    #[test]
    fn test_newsletter_shows_placeholder_until_focused() {
        let mut newsletter = NewsletterForm::default();
        let text = |n: &NewsletterForm, focused: bool| -> String {
            Footer::new(test_context(), n, focused, 2025)
                .lines(80)
                .iter()
                .map(|l| l.to_string() + "\n")
                .collect()
        };

        assert!(text(&newsletter, false).contains("  Email"));
        assert!(text(&newsletter, true).contains("\u{25b6} \u{2588}"));

        newsletter.email = "me@firm.co.uk".to_string();
        assert!(text(&newsletter, false).contains("me@firm.co.uk"));
    }

    #[test]
    fn test_footer_fits_narrow_width() {
        let newsletter = NewsletterForm::default();
        let lines = Footer::new(test_context(), &newsletter, true, 2025).lines(30);
        assert!(lines.iter().all(|l| l.width() <= 30));
    }
}
