//! Auto-advance timer for the testimonial carousel.
//!
//! [`CarouselTicker::spawn`] starts a background task that sends
//! [`Message::CarouselTick`] once per period. The first tick fires one full
//! period after spawning. Dropping the ticker sends `true` on its shutdown
//! channel and aborts the task, so no tick is delivered after release.

use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::message::Message;

/// Handle to a running auto-advance task
#[derive(Debug)]
pub struct CarouselTicker {
    shutdown_tx: watch::Sender<bool>,
    handle: JoinHandle<()>,
}

impl CarouselTicker {
    /// Spawn the timer task on the current tokio runtime.
    pub fn spawn(period: Duration, msg_tx: mpsc::Sender<Message>) -> Self {
        let (shutdown_tx, mut shutdown_rx) = watch::channel(false);

        let handle = tokio::spawn(async move {
            let start = tokio::time::Instant::now() + period;
            let mut tick = tokio::time::interval_at(start, period);

            loop {
                tokio::select! {
                    _ = tick.tick() => {
                        if msg_tx.send(Message::CarouselTick).await.is_err() {
                            debug!("Message channel closed, stopping carousel ticker");
                            break;
                        }
                    }

                    _ = shutdown_rx.changed() => {
                        if *shutdown_rx.borrow() {
                            break;
                        }
                    }
                }
            }
        });

        info!("Carousel auto-advance started ({}ms)", period.as_millis());
        Self {
            shutdown_tx,
            handle,
        }
    }

    /// The task exits on its own once the message channel closes
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for CarouselTicker {
    fn drop(&mut self) {
        let _ = self.shutdown_tx.send(true);
        self.handle.abort();
        info!("Carousel auto-advance stopped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::AUTO_ADVANCE_PERIOD;

    #[tokio::test(start_paused = true)]
    async fn test_first_tick_after_one_period() {
        let (tx, mut rx) = mpsc::channel(8);
        let started = tokio::time::Instant::now();
        let _ticker = CarouselTicker::spawn(AUTO_ADVANCE_PERIOD, tx);

        let msg = rx.recv().await;
        assert_eq!(msg, Some(Message::CarouselTick));
        assert!(started.elapsed() >= AUTO_ADVANCE_PERIOD);
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_tick_before_first_period() {
        let (tx, mut rx) = mpsc::channel(8);
        let _ticker = CarouselTicker::spawn(AUTO_ADVANCE_PERIOD, tx);

        tokio::time::sleep(AUTO_ADVANCE_PERIOD - Duration::from_millis(1)).await;

        let mut recv = tokio_test::task::spawn(rx.recv());
        tokio_test::assert_pending!(recv.poll());
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticks_repeat_every_period() {
        let (tx, mut rx) = mpsc::channel(8);
        let started = tokio::time::Instant::now();
        let _ticker = CarouselTicker::spawn(AUTO_ADVANCE_PERIOD, tx);

        for _ in 0..3 {
            assert_eq!(rx.recv().await, Some(Message::CarouselTick));
        }
        assert!(started.elapsed() >= AUTO_ADVANCE_PERIOD * 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_tick_after_drop() {
        let (tx, mut rx) = mpsc::channel(8);
        let ticker = CarouselTicker::spawn(AUTO_ADVANCE_PERIOD, tx);

        tokio::time::sleep(Duration::from_millis(3000)).await;
        drop(ticker);

        let result = tokio::time::timeout(AUTO_ADVANCE_PERIOD * 4, rx.recv()).await;
        assert!(
            !matches!(result, Ok(Some(_))),
            "no tick may arrive after the ticker is dropped"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_stops_when_receiver_closes() {
        let (tx, rx) = mpsc::channel(1);
        let ticker = CarouselTicker::spawn(Duration::from_millis(1000), tx);
        drop(rx);

        tokio::time::sleep(Duration::from_millis(2500)).await;
        tokio::task::yield_now().await;
        assert!(ticker.is_finished());
    }
}
