//! About section: firm pillars, badges and headline stats

use aspire_core::content::{ABOUT_BADGES, ABOUT_HEADING, ABOUT_KICKER, ABOUT_LEAD};
use aspire_core::{Anchor, IconRef, Stat, ABOUT_PILLARS, ABOUT_STATS};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::text;
use crate::theme::styles;

use super::{render_section, section_heading, RenderContext, Section};

pub struct About {
    ctx: RenderContext,
}

impl About {
    pub fn new(ctx: RenderContext) -> Self {
        Self { ctx }
    }

    fn stat_card(&self, stat: &Stat, width: usize) -> Vec<Line<'static>> {
        let p = &self.ctx.palette;
        let inner = width.saturating_sub(4);
        let body = vec![
            text::center(
                Line::from(Span::styled(stat.value, styles::accent_bold(p))),
                inner,
            ),
            text::center(
                Line::from(Span::styled(stat.label, styles::text_muted(p))),
                inner,
            ),
        ];
        text::boxed(body, width, styles::border(p))
    }
}

impl Section for About {
    fn anchor(&self) -> Option<Anchor> {
        Some(Anchor::About)
    }

    fn lines(&self, width: u16) -> Vec<Line<'static>> {
        let p = &self.ctx.palette;
        let width = width as usize;
        let mut lines = section_heading(
            &self.ctx,
            Some(ABOUT_KICKER),
            ABOUT_HEADING,
            Some(ABOUT_LEAD),
            width,
        );

        let check = self.ctx.icons.get(IconRef::CheckCircle);
        for pillar in ABOUT_PILLARS {
            lines.extend(text::paragraph(
                &format!("{check} {}", pillar.title),
                width,
                styles::heading(p),
            ));
            for line in text::wrap(pillar.description, width.saturating_sub(2).min(70)) {
                lines.push(Line::from(vec![
                    Span::raw("  "),
                    Span::styled(line, styles::text_muted(p)),
                ]));
            }
            lines.push(Line::default());
        }

        let badges: Vec<Span<'static>> = ABOUT_BADGES
            .iter()
            .flat_map(|(value, label)| {
                [
                    Span::styled(*value, styles::accent_bold(p)),
                    Span::styled(format!(" {label}"), styles::text(p)),
                ]
            })
            .collect();
        let mut badge_line = Vec::new();
        for (i, pair) in badges.chunks(2).enumerate() {
            if i > 0 {
                badge_line.push(Span::styled("  ·  ", styles::text_muted(p)));
            }
            badge_line.extend(pair.iter().cloned());
        }
        lines.push(Line::from(badge_line));
        lines.push(Line::default());

        lines.extend(text::grid(&ABOUT_STATS, width, 20, 3, |s, w| {
            self.stat_card(s, w)
        }));
        lines.push(Line::default());
        lines
    }
}

impl Widget for About {
    fn render(self, area: Rect, buf: &mut Buffer) {
        render_section(&self, area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{test_context, TestTerminal};

    #[test]
    fn test_about_renders_stats_and_badges() {
        let mut term = TestTerminal::with_size(80, 40);
        term.render_widget(About::new(test_context()), term.area());

        assert!(term.buffer_contains("Years Experience"));
        assert!(term.buffer_contains("Satisfied Clients"));
        assert!(term.buffer_contains("Tax Saved"));
        assert!(term.buffer_contains("100% Compliance"));
        assert!(term.buffer_contains("HMRC Certified"));
    }

    #[test]
    fn test_about_lists_pillars() {
        let joined: String = About::new(test_context())
            .lines(80)
            .iter()
            .map(|l| l.to_string() + "\n")
            .collect();

        for pillar in ABOUT_PILLARS {
            assert!(joined.contains(pillar.title));
        }
    }
}
