//! The scrolling page: every section laid out top to bottom.
//!
//! Layout happens once per frame at the current width. The resulting height
//! and anchor rows are fed back into the app state so scrolling and in-page
//! links work against what is actually on screen.

use aspire_app::{AppState, FormField};
use aspire_core::Anchor;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::widgets::{About, Contact, Footer, Hero, RenderContext, Section, Services, WhyUs};

/// Columns of padding on each side of the page
const MARGIN: u16 = 2;

/// Laid-out page content
#[derive(Debug, Clone, Default)]
pub struct Page {
    lines: Vec<Line<'static>>,
    anchors: Vec<(Anchor, u16)>,
}

impl Page {
    pub fn build(state: &AppState, ctx: RenderContext, width: u16, year: i32) -> Self {
        let inner = width.saturating_sub(MARGIN * 2).max(1);
        let newsletter_focused = state.form.focus == Some(FormField::Newsletter);

        let hero = Hero::new(ctx);
        let services = Services::new(ctx);
        let about = About::new(ctx);
        let why_us = WhyUs::new(ctx, &state.carousel);
        let contact = Contact::new(ctx, &state.form);
        let footer = Footer::new(ctx, &state.form.newsletter, newsletter_focused, year);
        let sections: [&dyn Section; 6] = [&hero, &services, &about, &why_us, &contact, &footer];

        let margin = " ".repeat(MARGIN as usize);
        let mut page = Page::default();
        for section in sections {
            if let Some(anchor) = section.anchor() {
                let row = u16::try_from(page.lines.len()).unwrap_or(u16::MAX);
                page.anchors.push((anchor, row));
            }
            page.lines
                .extend(section.lines(inner).into_iter().map(|line| {
                    let mut spans = vec![Span::raw(margin.clone())];
                    spans.extend(line.spans);
                    Line::from(spans).style(line.style)
                }));
        }
        page
    }

    /// Total rows of content
    pub fn height(&self) -> u16 {
        u16::try_from(self.lines.len()).unwrap_or(u16::MAX)
    }

    /// Row at which each anchored section starts
    pub fn anchors(&self) -> &[(Anchor, u16)] {
        &self.anchors
    }

    pub fn anchor_row(&self, anchor: Anchor) -> Option<u16> {
        self.anchors
            .iter()
            .find(|(a, _)| *a == anchor)
            .map(|(_, row)| *row)
    }

    #[cfg(test)]
    pub(crate) fn lines(&self) -> &[Line<'static>] {
        &self.lines
    }
}

/// The visible slice of a [`Page`]
pub struct PageView<'a> {
    page: &'a Page,
    offset: u16,
}

impl<'a> PageView<'a> {
    pub fn new(page: &'a Page, offset: u16) -> Self {
        Self { page, offset }
    }
}

impl Widget for PageView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let start = (self.offset as usize).min(self.page.lines.len());
        let end = (start + area.height as usize).min(self.page.lines.len());
        Paragraph::new(self.page.lines[start..end].to_vec()).render(area, buf);
    }
}
