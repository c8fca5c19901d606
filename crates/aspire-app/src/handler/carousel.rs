//! Testimonial carousel handlers

use crate::state::AppState;
use aspire_core::prelude::*;

use super::{UpdateAction, UpdateResult};

/// Testimonials are on screen: start auto-advance if enabled
pub fn handle_mounted(state: &mut AppState) -> UpdateResult {
    if state.carousel.is_mounted() {
        return UpdateResult::none();
    }
    state.carousel.mount();

    if !state.settings.carousel.auto_advance {
        info!("Carousel auto-advance disabled in config");
        return UpdateResult::none();
    }

    UpdateResult::action(UpdateAction::StartCarouselTimer {
        period: state.settings.carousel.interval(),
    })
}

/// Testimonials are gone: stop the timer so no further ticks apply
pub fn handle_unmounted(state: &mut AppState) -> UpdateResult {
    if !state.carousel.is_mounted() {
        return UpdateResult::none();
    }
    state.carousel.unmount();
    UpdateResult::action(UpdateAction::StopCarouselTimer)
}

pub fn handle_next(state: &mut AppState) -> UpdateResult {
    state.carousel.next();
    UpdateResult::none()
}

pub fn handle_previous(state: &mut AppState) -> UpdateResult {
    state.carousel.previous();
    UpdateResult::none()
}

pub fn handle_jump_to(state: &mut AppState, index: usize) -> UpdateResult {
    state.carousel.jump_to(index);
    UpdateResult::none()
}

/// Timer tick. Manual navigation never resets the timer, so a tick right
/// after a manual `next` advances again.
pub fn handle_tick(state: &mut AppState) -> UpdateResult {
    if state.carousel.auto_advance() {
        trace!("Carousel auto-advanced to {}", state.carousel.index());
    }
    UpdateResult::none()
}
