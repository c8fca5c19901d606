//! Quit on SIGINT/SIGTERM (Ctrl+C elsewhere)
//!
//! Raw mode swallows Ctrl+C as a key, so this mostly catches signals sent
//! from outside the terminal.

use tokio::sync::mpsc;

use crate::message::Message;
use aspire_core::prelude::*;

/// Spawn a task that turns the first termination signal into [`Message::Quit`]
pub fn spawn_signal_handler(tx: mpsc::Sender<Message>) {
    tokio::spawn(async move {
        match termination().await {
            Ok(name) => {
                info!("Received {}, quitting", name);
                let _ = tx.send(Message::Quit).await;
            }
            Err(e) => error!("Signal handler unavailable: {}", e),
        }
    });
}

#[cfg(unix)]
async fn termination() -> Result<&'static str> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut interrupt = signal(SignalKind::interrupt())?;
    let mut terminate = signal(SignalKind::terminate())?;

    Ok(tokio::select! {
        _ = interrupt.recv() => "SIGINT",
        _ = terminate.recv() => "SIGTERM",
    })
}

#[cfg(not(unix))]
async fn termination() -> Result<&'static str> {
    tokio::signal::ctrl_c().await?;
    Ok("Ctrl+C")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_no_quit_without_signal() {
        let (tx, mut rx) = mpsc::channel::<Message>(1);

        spawn_signal_handler(tx);
        tokio::time::sleep(Duration::from_millis(10)).await;

        assert!(rx.try_recv().is_err());
    }
}
