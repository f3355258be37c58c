//! CLI definition and argument validation

use clap::Parser;
use thiserror::Error;

/// Muster - concurrent sender roll-call
#[derive(Parser, Debug)]
#[command(
    name = "muster",
    about = "Spawns N timed senders and waits until each has reported once",
    version
)]
pub struct Cli {
    /// Number of senders to spawn (positive integer)
    #[arg(value_name = "SENDERS", allow_negative_numbers = true)]
    pub senders: String,
}

/// Argument validation failures
///
/// All three are terminal: the binary reports the failure on stderr together
/// with a fixed guidance line and exits with status 1 before any task is
/// created.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArgsError {
    /// Wrong argument count (none, or more than one)
    #[error("missing argument")]
    MissingArgument,

    /// The argument is not a base-10 integer
    #[error("not a number: {0:?}")]
    NotANumber(String),

    /// The argument parsed but is zero or negative
    #[error("non-positive sender count: {0}")]
    NonPositive(i64),
}

impl Cli {
    /// Validate the positional argument as a strictly positive sender count.
    pub fn sender_count(&self) -> Result<usize, ArgsError> {
        let n: i64 = self
            .senders
            .parse()
            .map_err(|_| ArgsError::NotANumber(self.senders.clone()))?;

        if n <= 0 {
            return Err(ArgsError::NonPositive(n));
        }

        Ok(n as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("muster").chain(args.iter().copied()))
    }

    #[test]
    fn test_valid_count() {
        let cli = parse(&["3"]).unwrap();
        assert_eq!(cli.sender_count(), Ok(3));
    }

    #[test]
    fn test_no_argument_rejected() {
        assert!(parse(&[]).is_err());
    }

    #[test]
    fn test_two_arguments_rejected() {
        assert!(parse(&["3", "4"]).is_err());
    }

    #[test]
    fn test_not_a_number() {
        let cli = parse(&["three"]).unwrap();
        assert_eq!(
            cli.sender_count(),
            Err(ArgsError::NotANumber("three".to_string()))
        );
    }

    #[test]
    fn test_zero_rejected() {
        let cli = parse(&["0"]).unwrap();
        assert_eq!(cli.sender_count(), Err(ArgsError::NonPositive(0)));
    }

    #[test]
    fn test_negative_rejected() {
        let cli = parse(&["-4"]).unwrap();
        assert_eq!(cli.sender_count(), Err(ArgsError::NonPositive(-4)));
    }

    proptest! {
        #[test]
        fn prop_positive_counts_accepted(n in 1i64..=1_000_000) {
            let cli = parse(&[&n.to_string()]).unwrap();
            prop_assert_eq!(cli.sender_count(), Ok(n as usize));
        }

        #[test]
        fn prop_non_positive_counts_rejected(n in i64::MIN..=0) {
            let cli = parse(&[&n.to_string()]).unwrap();
            prop_assert_eq!(cli.sender_count(), Err(ArgsError::NonPositive(n)));
        }
    }
}
