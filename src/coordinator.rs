//! Process lifecycle: wires the relay together and waits it out

use std::collections::HashSet;

use eyre::{Context, Result};
use futures::future::try_join_all;
use tokio::sync::mpsc;
use tracing::info;

use crate::config::RelayConfig;
use crate::receiver::Receiver;
use crate::sender::Sender;
use crate::shutdown::Shutdown;

/// Owns the relay lifecycle: one receiver, N senders, one bounded channel,
/// one shutdown gate.
pub struct Coordinator {
    config: RelayConfig,
}

impl Coordinator {
    /// Create a coordinator for the given configuration.
    pub fn new(config: RelayConfig) -> Self {
        Self { config }
    }

    /// Run the relay to completion.
    ///
    /// Spawns the receiver and then one sender per id in `[1, N]`, each with
    /// its own shutdown subscription taken before the task starts, and joins
    /// every task. Returns the set of sender ids the receiver observed.
    pub async fn run(self) -> Result<HashSet<usize>> {
        let (tx, rx) = mpsc::channel(self.config.senders);
        let shutdown = Shutdown::new();

        let receiver = Receiver::new(self.config.senders, rx, shutdown.clone());
        let receiver_handle = tokio::spawn(receiver.run());

        let mut sender_handles = Vec::with_capacity(self.config.senders);
        for id in 1..=self.config.senders {
            let sender = Sender::new(id, &self.config, tx.clone(), shutdown.subscribe());
            sender_handles.push(tokio::spawn(sender.run()));
        }

        // The coordinator keeps no producer handle of its own: once every
        // sender exits, the channel closes.
        drop(tx);

        info!(senders = self.config.senders, "relay started");

        try_join_all(sender_handles)
            .await
            .context("sender task failed")?;
        let received = receiver_handle.await.context("receiver task failed")?;

        info!(distinct = received.len(), "relay finished");
        Ok(received)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_relay_runs_to_completion() {
        let config = RelayConfig {
            senders: 4,
            delay_ticks: 1..=3,
            tick: Duration::from_millis(2),
        };

        let received = tokio::time::timeout(Duration::from_secs(5), Coordinator::new(config).run())
            .await
            .expect("relay should terminate")
            .unwrap();

        assert_eq!(received, HashSet::from([1, 2, 3, 4]));
    }
}
