//! Terminal setup and restoration

use aspire_core::prelude::*;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

/// Install a panic hook that restores the terminal
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = execute!(std::io::stdout(), DisableMouseCapture);
        ratatui::restore();
        original_hook(panic_info);
    }));
}

/// Mouse wheel reporting, switched off again when dropped
#[derive(Debug)]
pub struct MouseCapture {
    enabled: bool,
}

impl MouseCapture {
    /// Turn on mouse capture when `enabled`; otherwise a no-op guard
    pub fn acquire(enabled: bool) -> Result<Self> {
        if enabled {
            execute!(std::io::stdout(), EnableMouseCapture)?;
            debug!("Mouse capture enabled");
        }
        Ok(Self { enabled })
    }
}

impl Drop for MouseCapture {
    fn drop(&mut self) {
        if self.enabled {
            if let Err(e) = execute!(std::io::stdout(), DisableMouseCapture) {
                warn!("Failed to disable mouse capture: {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_capture_is_noop() {
        let capture = MouseCapture::acquire(false).expect("no-op guard");
        assert!(!capture.enabled);
        drop(capture);
    }
}
