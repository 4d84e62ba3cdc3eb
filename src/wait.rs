//! Polling and timeout strategy.
//!
//! The CDP engine gives no implicit waiting, so every
//! interaction and assertion in this crate goes through one explicit
//! deadline-and-poll loop. There is no other retry mechanism.

use crate::result::{ComprarError, ComprarResult};
use std::time::{Duration, Instant};

/// Default timeout for interactions and assertions (10 seconds)
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Default polling interval (100ms)
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 100;

/// Options for wait operations
#[derive(Debug, Clone, Copy)]
pub struct WaitOptions {
    /// Timeout in milliseconds
    pub timeout_ms: u64,
    /// Polling interval in milliseconds
    pub poll_interval_ms: u64,
}

impl Default for WaitOptions {
    fn default() -> Self {
        Self {
            timeout_ms: DEFAULT_TIMEOUT_MS,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
        }
    }
}

impl WaitOptions {
    /// Create new wait options with defaults
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set timeout in milliseconds
    #[must_use]
    pub const fn with_timeout(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Set polling interval in milliseconds
    #[must_use]
    pub const fn with_poll_interval(mut self, poll_interval_ms: u64) -> Self {
        self.poll_interval_ms = poll_interval_ms;
        self
    }

    /// Get timeout as Duration
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Get poll interval as Duration
    #[must_use]
    pub const fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

/// One deadline-tracked poll loop.
///
/// Callers check their condition, and when it has not been met yet call
/// [`Poller::tick`], which either sleeps one interval or fails the loop with
/// [`ComprarError::Timeout`] naming the condition.
#[derive(Debug)]
pub struct Poller {
    start: Instant,
    options: WaitOptions,
}

impl Poller {
    /// Start a poll loop with the given options
    #[must_use]
    pub fn new(options: WaitOptions) -> Self {
        Self {
            start: Instant::now(),
            options,
        }
    }

    /// Whether the deadline has passed
    #[must_use]
    pub fn expired(&self) -> bool {
        self.start.elapsed() >= self.options.timeout()
    }

    /// Sleep one interval, or fail with a timeout naming `waited_for`.
    pub async fn tick(&self, waited_for: &str) -> ComprarResult<()> {
        if self.expired() {
            return Err(ComprarError::Timeout {
                ms: self.options.timeout_ms,
                waited_for: waited_for.to_string(),
            });
        }
        tokio::time::sleep(self.options.poll_interval()).await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wait_options_defaults() {
        let opts = WaitOptions::default();
        assert_eq!(opts.timeout_ms, DEFAULT_TIMEOUT_MS);
        assert_eq!(opts.poll_interval_ms, DEFAULT_POLL_INTERVAL_MS);
    }

    #[test]
    fn test_wait_options_builders() {
        let opts = WaitOptions::new().with_timeout(500).with_poll_interval(10);
        assert_eq!(opts.timeout(), Duration::from_millis(500));
        assert_eq!(opts.poll_interval(), Duration::from_millis(10));
    }

    #[tokio::test]
    async fn test_poller_ticks_until_deadline() {
        let poller = Poller::new(WaitOptions::new().with_timeout(60).with_poll_interval(10));
        let mut ticks = 0;
        loop {
            match poller.tick("never").await {
                Ok(()) => ticks += 1,
                Err(ComprarError::Timeout { ms, waited_for }) => {
                    assert_eq!(ms, 60);
                    assert_eq!(waited_for, "never");
                    break;
                }
                Err(other) => panic!("unexpected error: {other}"),
            }
        }
        assert!(ticks >= 1);
    }

    #[tokio::test]
    async fn test_poller_not_expired_at_start() {
        let poller = Poller::new(WaitOptions::new().with_timeout(1_000));
        assert!(!poller.expired());
        assert!(poller.tick("anything").await.is_ok());
    }
}
