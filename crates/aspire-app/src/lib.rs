//! aspire-app - View state and orchestration for the Aspire landing page
//!
//! This crate implements the TEA (The Elm Architecture) pattern for the page:
//! theme preference, scroll indicator, mobile menu, testimonial carousel and
//! contact form state, plus configuration loading and the carousel timer.

pub mod actions;
pub mod carousel;
pub mod config;
pub mod contact;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod navigation;
pub mod process;
pub mod signals;
pub mod state;
pub mod ticker;

// Re-export primary types
pub use actions::ActionContext;
pub use carousel::{Carousel, AUTO_ADVANCE_PERIOD};
pub use contact::{FormField, FormState};
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use navigation::{MobileMenu, ScrollIndicator, Viewport, SCROLL_THRESHOLD};
pub use process::process_message;
pub use state::{initial_theme, AppState, UiMode};
pub use ticker::CarouselTicker;
