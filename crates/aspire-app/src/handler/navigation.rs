//! Mobile menu and in-page link handlers

use crate::message::Message;
use crate::navigation::{resolve_link, LinkOutcome};
use crate::state::AppState;
use aspire_core::prelude::*;
use aspire_core::NavLink;

use super::UpdateResult;

pub fn handle_toggle_menu(state: &mut AppState) -> UpdateResult {
    state.menu.toggle();
    debug!("Mobile menu open: {}", state.menu.is_open());
    UpdateResult::none()
}

pub fn handle_close_menu(state: &mut AppState) -> UpdateResult {
    state.menu.close();
    UpdateResult::none()
}

pub fn handle_menu_select(state: &mut AppState, forward: bool) -> UpdateResult {
    if forward {
        state.menu.select_next();
    } else {
        state.menu.select_previous();
    }
    UpdateResult::none()
}

/// Follow the highlighted menu entry
pub fn handle_menu_activate(state: &mut AppState) -> UpdateResult {
    if !state.menu.is_open() {
        return UpdateResult::none();
    }
    UpdateResult::message(Message::FollowLink(state.menu.selected_link()))
}

/// Follow an in-page link.
///
/// The menu closes before any scrolling happens. Placeholder links stop
/// there and leave the offset alone.
pub fn handle_follow_link(state: &mut AppState, link: NavLink) -> UpdateResult {
    state.menu.close();

    match resolve_link(&link) {
        LinkOutcome::Suppressed => {
            debug!("Placeholder link {:?} followed, page not moved", link.label);
        }
        LinkOutcome::ScrollTo(anchor) => match state.viewport.anchor_offset(anchor) {
            Some(row) => {
                state.viewport.set_offset(row);
                state.observe_scroll();
                debug!("Jumped to {} at row {}", anchor.href(), state.scroll_offset());
            }
            None => {
                debug!("Anchor {} not laid out yet", anchor.href());
            }
        },
    }

    UpdateResult::none()
}
