//! Testimonial carousel state
//!
//! Holds the active slide index over a fixed-length collection. Navigation
//! wraps in both directions. Auto-advance only applies while the carousel is
//! mounted; the timer itself lives in [`crate::ticker`].

use aspire_core::prelude::*;
use std::time::Duration;

/// Period between automatic advances
pub const AUTO_ADVANCE_PERIOD: Duration = Duration::from_millis(8000);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
    mounted: bool,
}

impl Carousel {
    /// Create a carousel over `len` slides starting at the first.
    ///
    /// A zero length is treated as one slide so the index is always valid.
    pub fn new(len: usize) -> Self {
        Self {
            index: 0,
            len: len.max(1),
            mounted: false,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of slides, never zero
    pub fn count(&self) -> usize {
        self.len
    }

    pub fn next(&mut self) {
        self.index = (self.index + 1) % self.len;
    }

    pub fn previous(&mut self) {
        self.index = (self.index + self.len - 1) % self.len;
    }

    /// Make slide `i` active. Out-of-range targets leave the state untouched.
    pub fn jump_to(&mut self, i: usize) -> bool {
        if i >= self.len {
            warn!("Ignoring carousel jump to {} (len {})", i, self.len);
            return false;
        }
        self.index = i;
        true
    }

    /// Timer-driven advance; a no-op once unmounted
    pub fn auto_advance(&mut self) -> bool {
        if !self.mounted {
            trace!("Carousel tick after unmount ignored");
            return false;
        }
        self.next();
        true
    }

    pub fn is_active(&self, i: usize) -> bool {
        i == self.index
    }

    pub fn mount(&mut self) {
        self.mounted = true;
    }

    pub fn unmount(&mut self) {
        self.mounted = false;
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }
}
