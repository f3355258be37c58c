//! Muster - concurrent sender roll-call
//!
//! CLI entry point: validates the sender count, then runs the relay.

use clap::Parser;
use clap::error::ErrorKind;
use eyre::Result;
use tracing::info;

use muster::cli::{ArgsError, Cli};
use muster::config::RelayConfig;
use muster::coordinator::Coordinator;

fn setup_logging() -> Result<()> {
    // Diagnostics go to stderr and only when RUST_LOG opts in; stdout stays
    // reserved for the message report lines.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init()
        .map_err(|e| eyre::eyre!("Failed to setup logging: {e}"))?;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Validation gate: nothing below runs, and no task is created, unless
    // the argument list is exactly one positive integer.
    let cli = Cli::try_parse().unwrap_or_else(|err| match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
        _ => exit_usage(&ArgsError::MissingArgument),
    });

    let count = match cli.sender_count() {
        Ok(count) => count,
        Err(err) => exit_usage(&err),
    };

    setup_logging()?;

    let config = RelayConfig::new(count);
    let received = Coordinator::new(config).run().await?;

    info!(senders = received.len(), "all senders reported");
    Ok(())
}

/// Report a validation failure and exit without starting any task.
fn exit_usage(err: &ArgsError) -> ! {
    eprintln!("{err}");
    eprintln!("Exactly one positive numeric argument is expected.");
    std::process::exit(1)
}
