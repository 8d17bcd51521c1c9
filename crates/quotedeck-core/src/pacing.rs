//! Minimum-spacing rate limiting for upstream calls.

use std::sync::Arc;
use std::time::Duration;

use governor::clock::DefaultClock;
use governor::state::direct::NotKeyed;
use governor::state::InMemoryState;
use governor::{Quota, RateLimiter};

type DirectRateLimiter = RateLimiter<NotKeyed, InMemoryState, DefaultClock>;

/// Enforces a minimum spacing between upstream request starts.
///
/// The quota admits a burst of one, so the first [`RequestPacer::wait`]
/// returns immediately and every subsequent call is delayed until at least
/// `min_interval` has passed since the previous admitted call. Awaiting the
/// pacer before each request in a sequential loop yields the upstream
/// provider's required ceiling regardless of how individual requests fare.
#[derive(Clone)]
pub struct RequestPacer {
    limiter: Arc<DirectRateLimiter>,
    min_interval: Duration,
}

impl RequestPacer {
    pub fn new(min_interval: Duration) -> Self {
        let period = min_interval.max(Duration::from_millis(1));
        let quota = Quota::with_period(period).expect("pacing period is non-zero");
        Self {
            limiter: Arc::new(RateLimiter::direct(quota)),
            min_interval,
        }
    }

    /// Waits until the next request slot is available.
    pub async fn wait(&self) {
        self.limiter.until_ready().await;
    }

    pub const fn min_interval(&self) -> Duration {
        self.min_interval
    }
}
