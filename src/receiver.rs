//! Receiver task: collects one message per distinct sender

use std::collections::HashSet;

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::message::Message;
use crate::shutdown::Shutdown;

/// The sole consumer of the message channel; determines process-wide
/// completion.
pub struct Receiver {
    expected: usize,
    messages: mpsc::Receiver<Message>,
    shutdown: Shutdown,
}

impl Receiver {
    /// Create a receiver expecting one message from each of `expected`
    /// senders. The receiver is the only writer of the shutdown gate.
    pub fn new(expected: usize, messages: mpsc::Receiver<Message>, shutdown: Shutdown) -> Self {
        Self {
            expected,
            messages,
            shutdown,
        }
    }

    /// Collect until every sender has reported once, then raise shutdown.
    ///
    /// The first message from each sender is reported on stdout; a repeat
    /// sender id is absorbed silently and never advances completion, so the
    /// report holds exactly one line per sender. Returns the set of sender
    /// ids observed.
    pub async fn run(mut self) -> HashSet<usize> {
        debug!(expected = self.expected, "receiver started");
        let mut received = HashSet::new();

        while received.len() < self.expected {
            let Some(message) = self.messages.recv().await else {
                // All producer handles dropped; unreachable under the
                // coordinator's wiring.
                warn!("relay channel closed before all senders reported");
                break;
            };

            if received.insert(message.sender_id) {
                println!(
                    "Received message from send {} at {}",
                    message.sender_id,
                    message.stamp()
                );
            } else {
                debug!(id = message.sender_id, "duplicate message absorbed");
            }
        }

        info!(distinct = received.len(), "receiver done, raising shutdown");
        self.shutdown.trigger();
        received
    }
}
