//! One-shot broadcast shutdown gate

use tokio::sync::broadcast;

/// One-shot shutdown gate shared by every task.
///
/// The receiver triggers it exactly once; each sender subscribes and races
/// the signal against its emission timer. Built on a broadcast channel so
/// the signal is observable by all subscribers simultaneously without being
/// consumed.
#[derive(Clone)]
pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    /// Create an unsignalled gate. Capacity 1 is enough: the signal is sent
    /// exactly once and never cleared.
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// New receiver handle for one waiting task.
    ///
    /// Must be called before the signal can be raised; a late subscriber
    /// does not observe an already-sent signal.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Raise the signal. Safe to call with no live subscribers.
    pub fn trigger(&self) {
        let _ = self.tx.send(());
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_trigger_wakes_all_subscribers() {
        let shutdown = Shutdown::new();
        let mut first = shutdown.subscribe();
        let mut second = shutdown.subscribe();

        shutdown.trigger();

        let woken = tokio::time::timeout(Duration::from_secs(1), async {
            first.recv().await.unwrap();
            second.recv().await.unwrap();
        })
        .await;
        assert!(woken.is_ok(), "both subscribers should observe the signal");
    }

    #[tokio::test]
    async fn test_trigger_without_subscribers() {
        let shutdown = Shutdown::new();
        shutdown.trigger();
    }

    #[tokio::test]
    async fn test_clone_shares_the_gate() {
        let shutdown = Shutdown::new();
        let mut rx = shutdown.subscribe();

        shutdown.clone().trigger();

        let woken = tokio::time::timeout(Duration::from_secs(1), rx.recv()).await;
        assert!(woken.is_ok());
    }
}
