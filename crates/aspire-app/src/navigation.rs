//! Navigation shell state
//!
//! Two independent state machines live here:
//! - [`ScrollIndicator`] - whether the page has scrolled past the header threshold
//! - [`MobileMenu`] - the collapsible link menu shown on narrow terminals
//!
//! plus [`Viewport`], the renderer-maintained geometry that link jumps and
//! scroll handlers operate on.

use aspire_core::content::MENU_CTA;
use aspire_core::{Anchor, NavLink, NAV_LINKS};

/// Rows the page must scroll past before the header switches to its solid style
pub const SCROLL_THRESHOLD: u16 = 20;

/// Binary "scrolled past threshold" flag derived from the scroll offset
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollIndicator {
    past_threshold: bool,
}

impl ScrollIndicator {
    /// Recompute from the current offset. Returns true if the state flipped.
    pub fn observe(&mut self, offset: u16) -> bool {
        let past = offset > SCROLL_THRESHOLD;
        let changed = past != self.past_threshold;
        self.past_threshold = past;
        changed
    }

    pub fn is_past_threshold(&self) -> bool {
        self.past_threshold
    }
}

/// Open/closed state of the mobile link menu
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
    selected: usize,
}

impl MobileMenu {
    /// Links listed in the menu: the nav links followed by the contact CTA
    pub fn links() -> [NavLink; NAV_LINKS.len() + 1] {
        let mut links = [MENU_CTA; NAV_LINKS.len() + 1];
        links[..NAV_LINKS.len()].copy_from_slice(&NAV_LINKS);
        links
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
        self.selected = 0;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn select_next(&mut self) {
        let len = Self::links().len();
        self.selected = (self.selected + 1) % len;
    }

    pub fn select_previous(&mut self) {
        let len = Self::links().len();
        self.selected = (self.selected + len - 1) % len;
    }

    pub fn selected_link(&self) -> NavLink {
        Self::links()[self.selected]
    }
}

/// What following a link does to the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkOutcome {
    /// Placeholder link: the default jump is suppressed
    Suppressed,
    /// Scroll so the section starts at the top of the viewport
    ScrollTo(Anchor),
}

/// Decide how a link behaves. Only the empty `#` anchor is suppressed.
pub fn resolve_link(link: &NavLink) -> LinkOutcome {
    if link.anchor.is_placeholder() {
        LinkOutcome::Suppressed
    } else {
        LinkOutcome::ScrollTo(link.anchor)
    }
}

/// Scrollable page geometry, refreshed by the renderer every frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Viewport {
    offset: u16,
    content_height: u16,
    visible_height: u16,
    anchors: Vec<(Anchor, u16)>,
}

impl Viewport {
    pub fn offset(&self) -> u16 {
        self.offset
    }

    pub fn content_height(&self) -> u16 {
        self.content_height
    }

    pub fn visible_height(&self) -> u16 {
        self.visible_height
    }

    /// Largest offset that still fills the viewport
    pub fn max_offset(&self) -> u16 {
        self.content_height.saturating_sub(self.visible_height)
    }

    /// Record the rendered geometry and clamp the offset into range
    pub fn set_geometry(
        &mut self,
        content_height: u16,
        visible_height: u16,
        anchors: Vec<(Anchor, u16)>,
    ) {
        self.content_height = content_height;
        self.visible_height = visible_height;
        self.anchors = anchors;
        self.offset = self.offset.min(self.max_offset());
    }

    pub fn set_offset(&mut self, offset: u16) {
        self.offset = offset.min(self.max_offset());
    }

    pub fn scroll_up(&mut self, rows: u16) {
        self.offset = self.offset.saturating_sub(rows);
    }

    pub fn scroll_down(&mut self, rows: u16) {
        self.set_offset(self.offset.saturating_add(rows));
    }

    /// Rows moved by PageUp/PageDown, keeping one row of overlap
    pub fn page_size(&self) -> u16 {
        self.visible_height.saturating_sub(1).max(1)
    }

    /// Row at which an anchored section starts, if it was laid out
    pub fn anchor_offset(&self, anchor: Anchor) -> Option<u16> {
        self.anchors
            .iter()
            .find(|(a, _)| *a == anchor)
            .map(|(_, row)| *row)
    }
}
