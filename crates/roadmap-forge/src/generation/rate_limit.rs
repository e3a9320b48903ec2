//! Per-session generation cooldown.
//!
//! The limiter is stateless: the caller owns a [`RateLimitState`] (one per
//! session) and passes it in together with the current time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Minimum interval between two generations from the same session.
pub const DEFAULT_COOLDOWN: Duration = Duration::from_secs(10);

/// Timestamp of the last successful generation, if any.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateLimitState {
    pub last_generation: Option<DateTime<Utc>>,
}

impl RateLimitState {
    /// State after a successful generation at `now`.
    pub fn record(self, now: DateTime<Utc>) -> Self {
        Self {
            last_generation: Some(now),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Please wait {seconds} seconds before generating another roadmap")]
pub struct RateLimitError {
    pub remaining: Duration,
    /// `remaining` in whole seconds, rounded up.
    pub seconds: u64,
}

impl RateLimitError {
    pub fn new(remaining: Duration) -> Self {
        let seconds = remaining.as_nanos().div_ceil(1_000_000_000) as u64;
        Self { remaining, seconds }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimiter {
    cooldown: Duration,
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(DEFAULT_COOLDOWN)
    }
}

impl RateLimiter {
    pub fn new(cooldown: Duration) -> Self {
        Self { cooldown }
    }

    pub fn cooldown(&self) -> Duration {
        self.cooldown
    }

    pub fn can_generate(&self, state: &RateLimitState, now: DateTime<Utc>) -> bool {
        self.remaining_cooldown(state, now).is_zero()
    }

    /// Time left before the next generation is allowed, never negative.
    ///
    /// A last-generation timestamp in the future (clock skew) counts as
    /// "just generated".
    pub fn remaining_cooldown(&self, state: &RateLimitState, now: DateTime<Utc>) -> Duration {
        let Some(last) = state.last_generation else {
            return Duration::ZERO;
        };
        match (now - last).to_std() {
            Ok(elapsed) => self.cooldown.saturating_sub(elapsed),
            Err(_) => self.cooldown,
        }
    }

    pub fn check(&self, state: &RateLimitState, now: DateTime<Utc>) -> Result<(), RateLimitError> {
        let remaining = self.remaining_cooldown(state, now);
        if remaining.is_zero() {
            Ok(())
        } else {
            Err(RateLimitError::new(remaining))
        }
    }
}
