//! Scroll message handlers
//!
//! Every handler moves the viewport and then re-derives the header's
//! scroll indicator.

use crate::state::AppState;

use super::UpdateResult;

/// Handle scroll up message
pub fn handle_scroll_up(state: &mut AppState, rows: u16) -> UpdateResult {
    state.viewport.scroll_up(rows);
    state.observe_scroll();
    UpdateResult::none()
}

/// Handle scroll down message
pub fn handle_scroll_down(state: &mut AppState, rows: u16) -> UpdateResult {
    state.viewport.scroll_down(rows);
    state.observe_scroll();
    UpdateResult::none()
}

/// Handle page up message
pub fn handle_page_up(state: &mut AppState) -> UpdateResult {
    let rows = state.viewport.page_size();
    handle_scroll_up(state, rows)
}

/// Handle page down message
pub fn handle_page_down(state: &mut AppState) -> UpdateResult {
    let rows = state.viewport.page_size();
    handle_scroll_down(state, rows)
}

/// Handle scroll to top message
pub fn handle_scroll_to_top(state: &mut AppState) -> UpdateResult {
    state.viewport.set_offset(0);
    state.observe_scroll();
    UpdateResult::none()
}

/// Handle scroll to bottom message
pub fn handle_scroll_to_bottom(state: &mut AppState) -> UpdateResult {
    let bottom = state.viewport.max_offset();
    state.viewport.set_offset(bottom);
    state.observe_scroll();
    UpdateResult::none()
}
