//! Key event handlers for different UI modes

use crate::contact::FormField;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, UiMode};
use aspire_core::{Anchor, NavLink, LEGAL_LINKS, NAV_LINKS};

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.ui_mode() {
        UiMode::Browse => handle_key_browse(key),
        UiMode::Menu => handle_key_menu(key),
        UiMode::Form => handle_key_form(state, key),
    }
}

/// Nav link pointing at `anchor`
fn section_link(anchor: Anchor) -> Option<Message> {
    NAV_LINKS
        .iter()
        .find(|link| link.anchor == anchor)
        .copied()
        .map(Message::FollowLink)
}

/// The footer's "Privacy" placeholder link
fn placeholder_link() -> Message {
    let link = LEGAL_LINKS.first().copied().unwrap_or(NavLink {
        label: "Privacy",
        anchor: Anchor::Placeholder,
    });
    Message::FollowLink(link)
}

/// Handle key events while reading the page
fn handle_key_browse(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::Esc | InputKey::CharCtrl('c') => Some(Message::Quit),

        // Theme and menu
        InputKey::Char('t') => Some(Message::ToggleTheme),
        InputKey::Char('m') => Some(Message::ToggleMobileMenu),

        // Scrolling
        InputKey::Up | InputKey::Char('k') => Some(Message::ScrollUp(1)),
        InputKey::Down | InputKey::Char('j') => Some(Message::ScrollDown(1)),
        InputKey::PageUp => Some(Message::PageUp),
        InputKey::PageDown => Some(Message::PageDown),
        InputKey::Home => Some(Message::ScrollToTop),
        InputKey::End => Some(Message::ScrollToBottom),

        // Section jumps
        InputKey::Char('s') => section_link(Anchor::Services),
        InputKey::Char('a') => section_link(Anchor::About),
        InputKey::Char('w') => section_link(Anchor::WhyUs),
        InputKey::Char('c') => section_link(Anchor::Contact),
        InputKey::Char('p') => Some(placeholder_link()),

        // Carousel
        InputKey::Char('[') | InputKey::Left => Some(Message::CarouselPrevious),
        InputKey::Char(']') | InputKey::Right => Some(Message::CarouselNext),
        InputKey::Char(c @ '1'..='9') => {
            let index = (c as usize) - ('1' as usize);
            Some(Message::CarouselJumpTo(index))
        }

        // Enter the contact form
        InputKey::Tab => Some(Message::FocusNextField),
        InputKey::BackTab => Some(Message::FocusPreviousField),

        _ => None,
    }
}

/// Handle key events while the mobile menu is open
fn handle_key_menu(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('m') | InputKey::Esc => Some(Message::CloseMobileMenu),
        InputKey::CharCtrl('c') => Some(Message::Quit),

        InputKey::Up | InputKey::Char('k') | InputKey::BackTab => {
            Some(Message::MenuSelectPrevious)
        }
        InputKey::Down | InputKey::Char('j') | InputKey::Tab => Some(Message::MenuSelectNext),
        InputKey::Enter => Some(Message::MenuActivate),

        InputKey::Char('t') => Some(Message::ToggleTheme),

        _ => None,
    }
}

/// Handle key events while a form control has focus
fn handle_key_form(state: &AppState, key: InputKey) -> Option<Message> {
    let focus = state.form.focus?;

    match key {
        InputKey::Esc => Some(Message::LeaveForm),
        InputKey::CharCtrl('c') => Some(Message::Quit),

        InputKey::Tab => Some(Message::FocusNextField),
        InputKey::BackTab => Some(Message::FocusPreviousField),
        InputKey::Enter => Some(Message::FormActivate),

        InputKey::Left if focus == FormField::Service => {
            Some(Message::FormCycleOption { forward: false })
        }
        InputKey::Right if focus == FormField::Service => {
            Some(Message::FormCycleOption { forward: true })
        }

        InputKey::Char(c) if focus.is_text() => Some(Message::FormInput(c)),
        InputKey::Backspace if focus.is_text() => Some(Message::FormBackspace),

        _ => None,
    }
}
