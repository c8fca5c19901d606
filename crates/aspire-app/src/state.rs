//! Application state (Model in TEA pattern)

use aspire_core::prelude::*;
use aspire_core::{Anchor, ThemeMode, TESTIMONIALS};

use crate::carousel::Carousel;
use crate::config::{PreferenceStore, Settings};
use crate::contact::FormState;
use crate::navigation::{MobileMenu, ScrollIndicator, Viewport};

/// Which key map is active
///
/// Derived from the open menu and form focus rather than stored, so it can
/// never disagree with them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Reading the page: scrolling, theme, carousel, section jumps
    #[default]
    Browse,

    /// Mobile menu overlay is open
    Menu,

    /// A contact form or newsletter control has focus
    Form,
}

/// Pick the startup theme: the stored preference if any, else light.
pub fn initial_theme(store: &dyn PreferenceStore) -> ThemeMode {
    match store.load_theme() {
        Some(theme) => {
            debug!("Restored theme preference: {}", theme);
            theme
        }
        None => ThemeMode::default(),
    }
}

/// Complete view state of the page
#[derive(Debug, Clone)]
pub struct AppState {
    pub theme: ThemeMode,
    pub scroll: ScrollIndicator,
    pub menu: MobileMenu,
    pub carousel: Carousel,
    pub form: FormState,
    pub viewport: Viewport,
    pub settings: Settings,
    quitting: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Settings::default(), ThemeMode::default())
    }
}

impl AppState {
    pub fn new(settings: Settings, theme: ThemeMode) -> Self {
        Self {
            theme,
            scroll: ScrollIndicator::default(),
            menu: MobileMenu::default(),
            carousel: Carousel::new(TESTIMONIALS.len()),
            form: FormState::default(),
            viewport: Viewport::default(),
            settings,
            quitting: false,
        }
    }

    /// Build the startup state, restoring the theme from the store
    pub fn with_store(settings: Settings, store: &dyn PreferenceStore) -> Self {
        Self::new(settings, initial_theme(store))
    }

    pub fn ui_mode(&self) -> UiMode {
        if self.menu.is_open() {
            UiMode::Menu
        } else if self.form.focus.is_some() {
            UiMode::Form
        } else {
            UiMode::Browse
        }
    }

    /// Current vertical scroll offset of the page
    pub fn scroll_offset(&self) -> u16 {
        self.viewport.offset()
    }

    /// Re-derive the scroll indicator from the viewport offset
    pub fn observe_scroll(&mut self) {
        if self.scroll.observe(self.viewport.offset()) {
            trace!(
                "Header state changed (past threshold: {})",
                self.scroll.is_past_threshold()
            );
        }
    }

    /// Record the geometry produced by the last layout pass
    pub fn sync_viewport(
        &mut self,
        content_height: u16,
        visible_height: u16,
        anchors: Vec<(Anchor, u16)>,
    ) {
        self.viewport
            .set_geometry(content_height, visible_height, anchors);
        self.observe_scroll();
    }

    pub fn request_quit(&mut self) {
        self.quitting = true;
    }

    pub fn should_quit(&self) -> bool {
        self.quitting
    }
}
