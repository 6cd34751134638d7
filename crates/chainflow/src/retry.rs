//! Retry policy for failing steps.

use std::time::Duration;

use backon::ExponentialBuilder;
use chainflow_core::{Error, Result};
use serde::{Deserialize, Serialize};

const DEFAULT_MIN_DELAY_MS: u64 = 10;
const DEFAULT_MAX_DELAY_MS: u64 = 1_000;

/// How a step that reports a retryable failure is retried.
///
/// Delays grow exponentially from `min_delay_ms` up to `max_delay_ms`.
/// Only failures marked retryable are retried; permanent failures stop the
/// chain on the first attempt regardless of `max_attempts`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RetryPolicy {
    /// Total attempts per step, the first one included. Must be at least 1.
    pub max_attempts: u32,
    /// Delay before the first retry, in milliseconds
    pub min_delay_ms: u64,
    /// Upper bound on any single delay, in milliseconds
    pub max_delay_ms: u64,
}

impl RetryPolicy {
    /// A policy that never retries.
    pub fn none() -> Self {
        Self::default()
    }

    /// Sets the total number of attempts per step.
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Sets the delay bounds.
    pub fn with_delays(mut self, min: Duration, max: Duration) -> Self {
        self.min_delay_ms = u64::try_from(min.as_millis()).unwrap_or(u64::MAX);
        self.max_delay_ms = u64::try_from(max.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Checks the policy for values that cannot be honored.
    pub fn validate(&self) -> Result<()> {
        if self.max_attempts == 0 {
            return Err(Error::validation_field(
                "max_attempts",
                "must be at least 1",
            ));
        }
        if self.min_delay_ms > self.max_delay_ms {
            return Err(Error::validation_field(
                "min_delay_ms",
                format!(
                    "must not exceed max_delay_ms ({} > {})",
                    self.min_delay_ms, self.max_delay_ms
                ),
            ));
        }
        Ok(())
    }

    /// Builds the backoff schedule for one step.
    pub fn backoff(&self) -> ExponentialBuilder {
        let retries = self.max_attempts.saturating_sub(1) as usize;
        ExponentialBuilder::default()
            .with_min_delay(Duration::from_millis(self.min_delay_ms))
            .with_max_delay(Duration::from_millis(self.max_delay_ms))
            .with_max_times(retries)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 1,
            min_delay_ms: DEFAULT_MIN_DELAY_MS,
            max_delay_ms: DEFAULT_MAX_DELAY_MS,
        }
    }
}
