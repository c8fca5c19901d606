//! Terminal event polling

use aspire_app::{InputKey, Message};
use aspire_core::prelude::*;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers, MouseEventKind};
use std::time::Duration;

/// Rows scrolled per mouse wheel notch
pub const MOUSE_SCROLL_ROWS: u16 = 3;

/// Convert crossterm KeyEvent to InputKey
pub fn key_event_to_input(key: crossterm::event::KeyEvent) -> Option<InputKey> {
    match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputKey::CharCtrl(c))
        }
        KeyCode::Char(c) => Some(InputKey::Char(c)),
        KeyCode::Enter => Some(InputKey::Enter),
        KeyCode::Esc => Some(InputKey::Esc),
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => Some(InputKey::BackTab),
        KeyCode::Tab => Some(InputKey::Tab),
        KeyCode::BackTab => Some(InputKey::BackTab),
        KeyCode::Backspace => Some(InputKey::Backspace),
        KeyCode::Up => Some(InputKey::Up),
        KeyCode::Down => Some(InputKey::Down),
        KeyCode::Left => Some(InputKey::Left),
        KeyCode::Right => Some(InputKey::Right),
        KeyCode::Home => Some(InputKey::Home),
        KeyCode::End => Some(InputKey::End),
        KeyCode::PageUp => Some(InputKey::PageUp),
        KeyCode::PageDown => Some(InputKey::PageDown),
        _ => None, // Unsupported keys ignored
    }
}

/// Map a terminal event to a message, if it means anything to the page
pub fn event_to_message(event: Event) -> Option<Message> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            key_event_to_input(key).map(Message::Key)
        }
        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::ScrollUp => Some(Message::ScrollUp(MOUSE_SCROLL_ROWS)),
            MouseEventKind::ScrollDown => Some(Message::ScrollDown(MOUSE_SCROLL_ROWS)),
            _ => None,
        },
        _ => None,
    }
}

/// Poll for terminal events with timeout
///
/// Returns `None` on timeout so the caller can redraw and drain its channel.
/// Resize events need no message: the next frame lays the page out again.
pub fn poll() -> Result<Option<Message>> {
    // Poll with 50ms timeout (20 FPS)
    if event::poll(Duration::from_millis(50))? {
        Ok(event_to_message(event::read()?))
    } else {
        Ok(None)
    }
}
