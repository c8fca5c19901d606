//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers for UI modes
//! - `scroll`: Scroll handlers
//! - `navigation`: Menu and link handlers
//! - `carousel`: Testimonial carousel handlers
//! - `form`: Contact form and newsletter handlers

pub(crate) mod carousel;
pub(crate) mod form;
pub(crate) mod keys;
pub(crate) mod navigation;
pub(crate) mod scroll;
pub(crate) mod update;

#[cfg(test)]
mod tests;

use std::time::Duration;

use crate::message::Message;
use aspire_core::ThemeMode;

// Re-export main entry point
pub use keys::handle_key;
pub use update::update;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Write the theme to the preference store
    PersistTheme(ThemeMode),

    /// Start the carousel auto-advance timer
    StartCarouselTimer { period: Duration },

    /// Stop the carousel auto-advance timer
    StopCarouselTimer,
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
