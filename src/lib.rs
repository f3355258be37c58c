//! Muster - concurrent sender roll-call
//!
//! Muster spawns N independent senders that each emit timestamped messages
//! at random intervals into one bounded relay channel. A single receiver
//! collects until every sender has reported once, then raises a one-shot
//! broadcast shutdown that stops all senders.
//!
//! # Core Concepts
//!
//! - **One channel, one signal**: senders and receiver share nothing but a
//!   bounded mpsc channel and a broadcast shutdown gate
//! - **Roll-call completion**: the receiver counts distinct sender ids, not
//!   messages; duplicates are absorbed
//! - **Race, don't poll**: each sender races its emission timer against the
//!   shutdown signal and never emits after the signal fires
//!
//! # Modules
//!
//! - [`cli`] - argument parsing and validation
//! - [`config`] - relay configuration
//! - [`message`] - the relay message type
//! - [`shutdown`] - one-shot broadcast shutdown gate
//! - [`sender`] - sender task
//! - [`receiver`] - receiver task
//! - [`coordinator`] - process lifecycle

pub mod cli;
pub mod config;
pub mod coordinator;
pub mod message;
pub mod receiver;
pub mod sender;
pub mod shutdown;

// Re-export commonly used types
pub use cli::{ArgsError, Cli};
pub use config::RelayConfig;
pub use coordinator::Coordinator;
pub use message::{Message, STAMP_MILLI};
pub use receiver::Receiver;
pub use sender::Sender;
pub use shutdown::Shutdown;
