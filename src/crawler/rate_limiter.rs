//! Politeness pacing for outbound requests
//!
//! The fetcher calls [`RateLimiter::wait`] before every request. One limiter
//! is owned by the fetcher for the whole run, so pacing is global rather than
//! per page or per card.

use std::time::Duration;

/// Decides when the next request may be sent
#[allow(async_fn_in_trait)]
pub trait RateLimiter {
    /// Returns once the next request is allowed to go out
    async fn wait(&self);
}

/// Sleeps a fixed interval before every request, the first one included
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedDelay {
    delay: Duration,
}

impl FixedDelay {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn from_millis(millis: u64) -> Self {
        Self::new(Duration::from_millis(millis))
    }

    /// A limiter that never waits
    pub fn none() -> Self {
        Self::new(Duration::ZERO)
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl RateLimiter for FixedDelay {
    async fn wait(&self) {
        if self.delay.is_zero() {
            return;
        }
        tracing::trace!("Waiting {:?} before next request", self.delay);
        tokio::time::sleep(self.delay).await;
    }
}
