//! The relay message type

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Timestamp format with millisecond precision, e.g. `Jan  2 15:04:05.000`
pub const STAMP_MILLI: &str = "%b %e %H:%M:%S%.3f";

/// A single emission from one sender
///
/// Created by a sender at emission time, read once by the receiver, never
/// mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Stable id of the emitting sender, in `[1, N]`
    #[serde(rename = "sender-id")]
    pub sender_id: usize,

    /// Local time at which the message was constructed
    #[serde(rename = "emitted-at")]
    pub emitted_at: DateTime<Local>,
}

impl Message {
    /// Stamp a new message from the given sender with the current time.
    pub fn new(sender_id: usize) -> Self {
        Self {
            sender_id,
            emitted_at: Local::now(),
        }
    }

    /// Emission time rendered with millisecond precision.
    pub fn stamp(&self) -> String {
        self.emitted_at.format(STAMP_MILLI).to_string()
    }
}
