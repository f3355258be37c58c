//! Sender task: emits timestamped messages at random intervals

use std::ops::RangeInclusive;
use std::time::Duration;

use rand::Rng;
use tokio::sync::{broadcast, mpsc};
use tracing::{debug, warn};

use crate::config::RelayConfig;
use crate::message::Message;

/// One independent message producer identified by an id in `[1, N]`.
pub struct Sender {
    id: usize,
    delay_ticks: RangeInclusive<u64>,
    tick: Duration,
    messages: mpsc::Sender<Message>,
    shutdown: broadcast::Receiver<()>,
}

impl Sender {
    /// Create a sender bound to the message channel and an already-held
    /// shutdown subscription.
    pub fn new(
        id: usize,
        config: &RelayConfig,
        messages: mpsc::Sender<Message>,
        shutdown: broadcast::Receiver<()>,
    ) -> Self {
        Self {
            id,
            delay_ticks: config.delay_ticks.clone(),
            tick: config.tick,
            messages,
            shutdown,
        }
    }

    /// Uniform draw from the configured discrete delay range.
    fn next_delay(&self) -> Duration {
        let ticks = rand::rng().random_range(self.delay_ticks.clone());
        self.tick * ticks as u32
    }

    /// Emit until the shutdown signal wins the race.
    ///
    /// Each iteration draws a fresh delay and races it against the signal;
    /// once the signal fires, no further message is emitted.
    pub async fn run(mut self) {
        debug!(id = self.id, "sender started");

        loop {
            let delay = self.next_delay();

            tokio::select! {
                _ = self.shutdown.recv() => {
                    debug!(id = self.id, "sender stopped");
                    return;
                }
                _ = tokio::time::sleep(delay) => {
                    if self.messages.send(Message::new(self.id)).await.is_err() {
                        warn!(id = self.id, "relay channel closed before shutdown");
                        return;
                    }
                    debug!(id = self.id, delay_ms = delay.as_millis() as u64, "message emitted");
                }
            }
        }
    }
}
