//! Relay configuration

use std::ops::RangeInclusive;
use std::time::Duration;

/// Discrete delay range drawn by each sender, in ticks
const DEFAULT_DELAY_TICKS: RangeInclusive<u64> = 1..=9;

/// Duration of one delay tick
const DEFAULT_TICK: Duration = Duration::from_secs(1);

/// Relay configuration
///
/// Built from the validated CLI count; the tick duration exists so tests can
/// compress time without touching component logic.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// Number of senders to spawn; also the message channel capacity
    pub senders: usize,

    /// Discrete delay range, in ticks, drawn uniformly per emission
    pub delay_ticks: RangeInclusive<u64>,

    /// Duration of one delay tick
    pub tick: Duration,
}

impl RelayConfig {
    /// Default relay configuration for the given sender count.
    pub fn new(senders: usize) -> Self {
        Self {
            senders,
            delay_ticks: DEFAULT_DELAY_TICKS,
            tick: DEFAULT_TICK,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RelayConfig::new(4);
        assert_eq!(config.senders, 4);
        assert_eq!(config.delay_ticks, 1..=9);
        assert_eq!(config.tick, Duration::from_secs(1));
    }
}
