//! Custom widget components
//!
//! Fixed-position chrome (header, menu overlay, key hints) are plain
//! [`Widget`]s. Page sections also implement [`Section`] so the page can lay
//! them out as lines, measure them, and record where each anchor starts.

mod about;
mod contact;
mod footer;
mod header;
mod hero;
mod key_hints;
mod mobile_menu;
mod services;
mod why_us;

pub use about::About;
pub use contact::Contact;
pub use footer::Footer;
pub use header::{Header, HEADER_HEIGHT};
pub use hero::Hero;
pub use key_hints::KeyHints;
pub use mobile_menu::MobileMenuOverlay;
pub use services::Services;
pub use why_us::WhyUs;

use aspire_app::config::IconMode;
use aspire_core::{Anchor, ThemeMode};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::text;
use crate::theme::{icons::IconSet, palette::Palette, styles};

/// Colors and glyphs for one frame
#[derive(Debug, Clone, Copy)]
pub struct RenderContext {
    pub palette: Palette,
    pub icons: IconSet,
}

impl RenderContext {
    pub fn new(mode: ThemeMode, icons: IconMode) -> Self {
        Self {
            palette: Palette::for_mode(mode),
            icons: IconSet::new(icons),
        }
    }
}

/// A block of the scrolling page
pub trait Section {
    /// In-page anchor that jumps to this section
    fn anchor(&self) -> Option<Anchor> {
        None
    }

    /// Lay the section out for `width` columns
    fn lines(&self, width: u16) -> Vec<Line<'static>>;
}

/// Render a section's lines from the top of `area`
fn render_section(section: &impl Section, area: Rect, buf: &mut Buffer) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    Paragraph::new(section.lines(area.width)).render(area, buf);
}

/// Kicker, heading and optional lead paragraph opening a section
fn section_heading(
    ctx: &RenderContext,
    kicker: Option<&str>,
    heading: &str,
    lead: Option<&str>,
    width: usize,
) -> Vec<Line<'static>> {
    let p = &ctx.palette;
    let mut lines = vec![Line::default()];

    if let Some(kicker) = kicker {
        lines.push(Line::from(Span::styled(
            kicker.to_uppercase(),
            styles::kicker(p),
        )));
    }
    lines.extend(text::paragraph(heading, width, styles::heading(p)));
    if let Some(lead) = lead {
        lines.push(Line::default());
        lines.extend(text::paragraph(lead, width.min(72), styles::text_muted(p)));
    }
    lines.push(Line::default());
    lines
}
