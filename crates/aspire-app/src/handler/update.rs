//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::AppState;
use aspire_core::prelude::*;

use super::{carousel, form, keys, navigation, scroll, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns an optional follow-up message and/or action for the event loop
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Key(key) => match keys::handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Quit => {
            state.request_quit();
            if state.carousel.is_mounted() {
                UpdateResult::message(Message::CarouselUnmounted)
            } else {
                UpdateResult::none()
            }
        }

        // ─────────────────────────────────────────────────────────
        // Theme Messages
        // ─────────────────────────────────────────────────────────
        Message::ToggleTheme => {
            state.theme = state.theme.toggled();
            debug!("Theme toggled to {}", state.theme);
            UpdateResult::action(UpdateAction::PersistTheme(state.theme))
        }

        // ─────────────────────────────────────────────────────────
        // Scroll Messages
        // ─────────────────────────────────────────────────────────
        Message::ScrollUp(rows) => scroll::handle_scroll_up(state, rows),
        Message::ScrollDown(rows) => scroll::handle_scroll_down(state, rows),
        Message::PageUp => scroll::handle_page_up(state),
        Message::PageDown => scroll::handle_page_down(state),
        Message::ScrollToTop => scroll::handle_scroll_to_top(state),
        Message::ScrollToBottom => scroll::handle_scroll_to_bottom(state),

        // ─────────────────────────────────────────────────────────
        // Navigation Messages
        // ─────────────────────────────────────────────────────────
        Message::ToggleMobileMenu => navigation::handle_toggle_menu(state),
        Message::CloseMobileMenu => navigation::handle_close_menu(state),
        Message::MenuSelectNext => navigation::handle_menu_select(state, true),
        Message::MenuSelectPrevious => navigation::handle_menu_select(state, false),
        Message::MenuActivate => navigation::handle_menu_activate(state),
        Message::FollowLink(link) => navigation::handle_follow_link(state, link),

        // ─────────────────────────────────────────────────────────
        // Carousel Messages
        // ─────────────────────────────────────────────────────────
        Message::CarouselMounted => carousel::handle_mounted(state),
        Message::CarouselUnmounted => carousel::handle_unmounted(state),
        Message::CarouselNext => carousel::handle_next(state),
        Message::CarouselPrevious => carousel::handle_previous(state),
        Message::CarouselJumpTo(index) => carousel::handle_jump_to(state, index),
        Message::CarouselTick => carousel::handle_tick(state),

        // ─────────────────────────────────────────────────────────
        // Contact Form Messages
        // ─────────────────────────────────────────────────────────
        Message::FocusNextField => form::handle_focus_next(state),
        Message::FocusPreviousField => form::handle_focus_previous(state),
        Message::LeaveForm => form::handle_leave(state),
        Message::FormInput(c) => form::handle_input(state, c),
        Message::FormBackspace => form::handle_backspace(state),
        Message::FormCycleOption { forward } => form::handle_cycle_option(state, forward),
        Message::FormActivate => form::handle_activate(state),
    }
}
