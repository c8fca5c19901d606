//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;
use aspire_core::NavLink;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Leave the page (Ctrl+C, `q`, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Theme Messages
    // ─────────────────────────────────────────────────────────
    /// Flip between light and dark mode
    ToggleTheme,

    // ─────────────────────────────────────────────────────────
    // Scroll Messages
    // ─────────────────────────────────────────────────────────
    /// Scroll the page up by N rows
    ScrollUp(u16),
    /// Scroll the page down by N rows
    ScrollDown(u16),
    PageUp,
    PageDown,
    ScrollToTop,
    ScrollToBottom,

    // ─────────────────────────────────────────────────────────
    // Navigation Messages
    // ─────────────────────────────────────────────────────────
    ToggleMobileMenu,
    CloseMobileMenu,
    MenuSelectNext,
    MenuSelectPrevious,
    /// Follow the link highlighted in the mobile menu
    MenuActivate,
    /// Follow an in-page link
    FollowLink(NavLink),

    // ─────────────────────────────────────────────────────────
    // Carousel Messages
    // ─────────────────────────────────────────────────────────
    /// The testimonials section is on screen; start auto-advance
    CarouselMounted,
    /// The testimonials section is gone; release the timer
    CarouselUnmounted,
    CarouselNext,
    CarouselPrevious,
    CarouselJumpTo(usize),
    /// Fired by the auto-advance timer
    CarouselTick,

    // ─────────────────────────────────────────────────────────
    // Contact Form Messages
    // ─────────────────────────────────────────────────────────
    FocusNextField,
    FocusPreviousField,
    LeaveForm,
    FormInput(char),
    FormBackspace,
    /// Cycle the service selector forwards or backwards
    FormCycleOption { forward: bool },
    /// Enter on the focused field (submit / join buttons)
    FormActivate,
}
