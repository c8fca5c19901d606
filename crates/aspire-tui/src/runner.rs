//! Main TUI runner - entry point and event loop
//!
//! Contains the application lifecycle:
//! - `run`: load settings and preferences, set up the terminal, run the loop
//! - `run_loop`: drain queued messages, draw, then poll the terminal

use std::path::Path;

use aspire_app::config::{self, FilePreferenceStore};
use aspire_app::signals;
use aspire_app::{process_message, ActionContext, AppState, Message};
use aspire_core::prelude::*;
use tokio::sync::mpsc;

use crate::{event, render, terminal};

/// Run the landing page until the user quits
///
/// `config_dir` holds `config.toml` and the persisted theme preference.
/// `no_mouse` overrides the `ui.mouse` setting.
pub async fn run(config_dir: &Path, no_mouse: bool) -> Result<()> {
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    // Load configuration
    let mut settings = config::load_settings(config_dir);
    if no_mouse {
        settings.ui.mouse = false;
    }
    info!(
        "Loaded settings: icons={}, mouse={}, auto_advance={}",
        settings.ui.icons, settings.ui.mouse, settings.carousel.auto_advance
    );

    // Restore the theme before the first frame
    let store = FilePreferenceStore::new(config_dir);
    let mut state = AppState::with_store(settings, &store);
    let mouse_enabled = state.settings.ui.mouse;

    // Create unified message channel (carousel ticker, signal handler)
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);

    // Spawn signal handler (sends Message::Quit on SIGINT/SIGTERM)
    signals::spawn_signal_handler(msg_tx.clone());

    let mut actions = ActionContext::new(msg_tx, Box::new(store));

    // Initialize terminal
    let mut term = ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))?;
    let mouse = match terminal::MouseCapture::acquire(mouse_enabled) {
        Ok(guard) => Some(guard),
        Err(e) => {
            warn!("Failed to enable mouse capture: {}", e);
            None
        }
    };

    // The testimonials section is part of the page from the first frame
    process_message(&mut state, Message::CarouselMounted, &mut actions);

    let result = run_loop(&mut term, &mut state, msg_rx, &mut actions);

    if state.carousel.is_mounted() {
        process_message(&mut state, Message::CarouselUnmounted, &mut actions);
    }
    drop(actions);
    drop(mouse);

    // Restore terminal
    let restored = ratatui::try_restore().map_err(|e| Error::TerminalRestore(e.to_string()));

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }
    result.and(restored)
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    actions: &mut ActionContext,
) -> Result<()> {
    while !state.should_quit() {
        // Process external messages (carousel ticks, signal handler)
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, actions);
        }
        if state.should_quit() {
            break;
        }

        // Render
        terminal
            .draw(|frame| render::view(frame, state))
            .context("Failed to draw frame")?;

        // Handle terminal events
        if let Some(message) = event::poll().context("Failed to poll terminal events")? {
            process_message(state, message, actions);
        }
    }
    Ok(())
}
