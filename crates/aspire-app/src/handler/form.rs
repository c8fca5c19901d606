//! Contact form and newsletter handlers

use crate::state::AppState;

use super::UpdateResult;

pub fn handle_focus_next(state: &mut AppState) -> UpdateResult {
    state.form.focus_next();
    UpdateResult::none()
}

pub fn handle_focus_previous(state: &mut AppState) -> UpdateResult {
    state.form.focus_previous();
    UpdateResult::none()
}

pub fn handle_leave(state: &mut AppState) -> UpdateResult {
    state.form.leave();
    UpdateResult::none()
}

pub fn handle_input(state: &mut AppState, c: char) -> UpdateResult {
    state.form.input(c);
    UpdateResult::none()
}

pub fn handle_backspace(state: &mut AppState) -> UpdateResult {
    state.form.backspace();
    UpdateResult::none()
}

pub fn handle_cycle_option(state: &mut AppState, forward: bool) -> UpdateResult {
    state.form.cycle_option(forward);
    UpdateResult::none()
}

pub fn handle_activate(state: &mut AppState) -> UpdateResult {
    state.form.activate();
    UpdateResult::none()
}
