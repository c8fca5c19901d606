//! Side effects requested by the update function
//!
//! [`ActionContext`] owns everything `update` is not allowed to touch: the
//! preference store and the carousel ticker. Dropping the context stops the
//! ticker.

use tokio::sync::mpsc;

use crate::config::PreferenceStore;
use crate::handler::UpdateAction;
use crate::message::Message;
use crate::ticker::CarouselTicker;
use aspire_core::prelude::*;

pub struct ActionContext {
    msg_tx: mpsc::Sender<Message>,
    store: Box<dyn PreferenceStore>,
    ticker: Option<CarouselTicker>,
}

impl ActionContext {
    pub fn new(msg_tx: mpsc::Sender<Message>, store: Box<dyn PreferenceStore>) -> Self {
        Self {
            msg_tx,
            store,
            ticker: None,
        }
    }

    /// Whether the carousel auto-advance timer is running
    pub fn is_ticking(&self) -> bool {
        self.ticker.as_ref().is_some_and(|t| !t.is_finished())
    }

    /// Execute an action returned by `update`
    pub fn handle_action(&mut self, action: UpdateAction) {
        match action {
            UpdateAction::PersistTheme(theme) => {
                // The in-memory theme stays authoritative if the write fails
                match self.store.save_theme(theme) {
                    Ok(()) => {}
                    Err(e) if e.is_recoverable() => {
                        warn!("Failed to persist theme {}: {}", theme, e);
                    }
                    Err(e) => error!("Unexpected error persisting theme {}: {}", theme, e),
                }
            }

            UpdateAction::StartCarouselTimer { period } => {
                // Replacing an old ticker drops (and stops) it
                self.ticker = Some(CarouselTicker::spawn(period, self.msg_tx.clone()));
            }

            UpdateAction::StopCarouselTimer => {
                self.ticker = None;
            }
        }
    }
}

impl std::fmt::Debug for ActionContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionContext")
            .field("ticker", &self.ticker)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MemoryPreferenceStore, MockPreferenceStore};
    use aspire_core::ThemeMode;
    use mockall::predicate::eq;
    use std::time::Duration;

    #[tokio::test]
    async fn test_persist_theme_writes_store() {
        let (tx, _rx) = mpsc::channel(1);
        let mut store = MockPreferenceStore::new();
        store
            .expect_save_theme()
            .with(eq(ThemeMode::Dark))
            .times(1)
            .returning(|_| Ok(()));

        let mut ctx = ActionContext::new(tx, Box::new(store));
        ctx.handle_action(UpdateAction::PersistTheme(ThemeMode::Dark));
    }

    #[tokio::test]
    async fn test_persist_failure_is_swallowed() {
        let (tx, _rx) = mpsc::channel(1);
        let mut store = MockPreferenceStore::new();
        store
            .expect_save_theme()
            .times(1)
            .returning(|_| Err(Error::preferences("disk full")));

        let mut ctx = ActionContext::new(tx, Box::new(store));
        ctx.handle_action(UpdateAction::PersistTheme(ThemeMode::Light));
    }

    #[tokio::test]
    async fn test_unexpected_persist_error_is_swallowed() {
        let (tx, _rx) = mpsc::channel(1);
        let mut store = MockPreferenceStore::new();
        store.expect_save_theme().times(2).returning(|_| {
            Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "read-only",
            )))
        });

        let mut ctx = ActionContext::new(tx, Box::new(store));
        ctx.handle_action(UpdateAction::PersistTheme(ThemeMode::Dark));
        ctx.handle_action(UpdateAction::PersistTheme(ThemeMode::Light));
        assert!(!ctx.is_ticking());
    }

    #[tokio::test(start_paused = true)]
    async fn test_start_and_stop_timer() {
        let (tx, mut rx) = mpsc::channel(4);
        let mut ctx = ActionContext::new(tx, Box::new(MemoryPreferenceStore::default()));

        ctx.handle_action(UpdateAction::StartCarouselTimer {
            period: Duration::from_millis(8000),
        });
        assert!(ctx.is_ticking());
        assert_eq!(rx.recv().await, Some(Message::CarouselTick));

        ctx.handle_action(UpdateAction::StopCarouselTimer);
        assert!(!ctx.is_ticking());

        tokio::time::sleep(Duration::from_secs(30)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_timer_not_ticking_once_channel_closes() {
        let (tx, rx) = mpsc::channel(4);
        let mut ctx = ActionContext::new(tx, Box::new(MemoryPreferenceStore::default()));
        ctx.handle_action(UpdateAction::StartCarouselTimer {
            period: Duration::from_millis(1000),
        });
        assert!(ctx.is_ticking());

        drop(rx);
        tokio::time::sleep(Duration::from_millis(1500)).await;
        tokio::task::yield_now().await;
        assert!(!ctx.is_ticking());
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_context_stops_timer() {
        let (tx, mut rx) = mpsc::channel(4);
        let mut ctx = ActionContext::new(tx, Box::new(MemoryPreferenceStore::default()));
        ctx.handle_action(UpdateAction::StartCarouselTimer {
            period: Duration::from_millis(8000),
        });

        drop(ctx);

        let result = tokio::time::timeout(Duration::from_secs(30), rx.recv()).await;
        assert!(!matches!(result, Ok(Some(_))));
    }
}
