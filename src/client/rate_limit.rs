//! Request pacing.
//!
//! Wraps a governor token bucket behind a cancellable "acquire one permit"
//! operation. The limiter is owned by the client that built it; nothing in
//! this crate keeps global limiter state, so two client instances contend
//! only if they were cloned from one another.

use std::num::NonZeroU32;
use std::sync::Arc;

use governor::clock::DefaultClock;
use governor::middleware::NoOpMiddleware;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter as Governor};
use tokio_util::sync::CancellationToken;

use crate::{Error, Result};

type DirectLimiter = Governor<NotKeyed, InMemoryState, DefaultClock, NoOpMiddleware>;

/// A pacing gate granting one permit per `1/rate` seconds.
///
/// Permits are consumed on acquisition; there is no release step. The
/// bucket holds a single cell, so N calls against a limiter of N
/// requests/second spread over a full second rather than bursting.
#[derive(Clone)]
pub struct RateLimiter {
    limiter: Arc<DirectLimiter>,
}

impl RateLimiter {
    /// Create a limiter granting `requests_per_second` permits per second,
    /// or `None` when the rate is zero (pacing disabled).
    pub fn per_second(requests_per_second: u32) -> Option<Self> {
        let rate = NonZeroU32::new(requests_per_second)?;
        let quota = Quota::per_second(rate).allow_burst(NonZeroU32::MIN);
        Some(Self {
            limiter: Arc::new(Governor::direct(quota)),
        })
    }

    /// Wait until a permit is available, consuming it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Cancelled`] if `cancel` fires first; no permit is
    /// consumed in that case.
    pub async fn acquire(&self, cancel: &CancellationToken) -> Result<()> {
        tokio::select! {
            biased;
            () = cancel.cancelled() => Err(Error::Cancelled),
            () = self.limiter.until_ready() => Ok(()),
        }
    }
}

impl std::fmt::Debug for RateLimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RateLimiter").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    #[test]
    fn zero_rate_disables_pacing() {
        assert!(RateLimiter::per_second(0).is_none());
        assert!(RateLimiter::per_second(10).is_some());
    }

    #[tokio::test]
    async fn first_permit_is_immediate() {
        let limiter = RateLimiter::per_second(1).unwrap();
        let cancel = CancellationToken::new();

        let started = Instant::now();
        limiter.acquire(&cancel).await.unwrap();
        assert!(started.elapsed() < Duration::from_millis(100));
    }

    #[tokio::test]
    async fn permits_are_spaced_at_the_configured_rate() {
        let limiter = RateLimiter::per_second(10).unwrap();
        let cancel = CancellationToken::new();

        let started = Instant::now();
        for _ in 0..5 {
            limiter.acquire(&cancel).await.unwrap();
        }
        // 1 immediate + 4 spaced at 100ms
        assert!(started.elapsed() >= Duration::from_millis(350));
    }

    #[tokio::test]
    async fn acquire_aborts_on_cancellation() {
        let limiter = RateLimiter::per_second(1).unwrap();
        let cancel = CancellationToken::new();

        // Drain the only cell so the next acquire has to wait.
        limiter.acquire(&cancel).await.unwrap();

        let waiter = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(50)).await;
            waiter.cancel();
        });

        let started = Instant::now();
        let err = limiter.acquire(&cancel).await.unwrap_err();
        assert!(err.is_cancelled());
        assert!(started.elapsed() < Duration::from_millis(500));
    }

    #[tokio::test]
    async fn acquire_fails_fast_when_already_cancelled() {
        let limiter = RateLimiter::per_second(1).unwrap();
        let cancel = CancellationToken::new();
        limiter.acquire(&cancel).await.unwrap();
        cancel.cancel();

        let err = limiter.acquire(&cancel).await.unwrap_err();
        assert!(err.is_cancelled());
    }
}
