// SPDX-License-Identifier: GPL-3.0-or-later

use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::time::{sleep, Duration, Instant};

/// Sliding-window rate limiter for Discogs API calls.
///
/// Discogs allows 60 requests per minute for authenticated clients. The
/// limiter records the instant of every admitted request and suspends
/// callers whenever admitting one more would put the trailing window over
/// the limit.
#[derive(Debug, Clone)]
pub struct RateLimiter {
    max_requests: usize,
    time_window: Duration,
    admitted: Arc<Mutex<VecDeque<Instant>>>,
}

/// Snapshot of the limiter window, as reported by [`RateLimiter::status`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimiterStatus {
    /// Admissions still inside the trailing window.
    pub requests_made: usize,
    /// Admissions available without waiting.
    pub requests_remaining: usize,
    /// Length of the trailing window.
    pub time_window: Duration,
    /// Time until the oldest admission leaves the window; zero when empty.
    pub reset_after: Duration,
}

impl RateLimiter {
    /// Create a limiter admitting at most `max_requests` per `time_window`.
    ///
    /// A zero `max_requests` is coerced to 1, otherwise no request could
    /// ever be admitted.
    pub fn new(max_requests: usize, time_window: Duration) -> Self {
        Self {
            max_requests: max_requests.max(1),
            time_window,
            admitted: Arc::new(Mutex::new(VecDeque::new())),
        }
    }

    /// Create a limiter with Discogs defaults (60 requests per minute).
    pub fn discogs_default() -> Self {
        Self::new(60, Duration::from_secs(60))
    }

    /// Wait until a request can be made according to the rate limit, then
    /// record it.
    ///
    /// Concurrent callers may be admitted in any order; the guarantee is
    /// that no trailing window ever holds more than `max_requests`
    /// admissions. The lock is released while sleeping, so a waiting
    /// caller never blocks `status` or other waiters.
    pub async fn acquire(&self) {
        loop {
            let wait_time = {
                let mut admitted = self.admitted.lock().await;
                let now = Instant::now();
                Self::purge(&mut admitted, now, self.time_window);

                if admitted.len() < self.max_requests {
                    admitted.push_back(now);
                    return;
                }

                // Window is full: wait for the oldest admission to age out,
                // then re-check. Another waiter may take the freed slot first.
                let oldest = *admitted.front().expect("window is full, not empty");
                self.time_window - now.duration_since(oldest)
            };

            tracing::trace!(
                target: "discogs",
                "rate limiting: waiting {:?}",
                wait_time
            );
            sleep(wait_time).await;
        }
    }

    /// Report the current window state.
    ///
    /// Stale admissions are purged first, so the numbers match what a
    /// concurrent `acquire` would observe at the same instant.
    pub async fn status(&self) -> RateLimiterStatus {
        let mut admitted = self.admitted.lock().await;
        let now = Instant::now();
        Self::purge(&mut admitted, now, self.time_window);

        let requests_made = admitted.len();
        let reset_after = admitted
            .front()
            .map(|oldest| self.time_window - now.duration_since(*oldest))
            .unwrap_or(Duration::ZERO);

        RateLimiterStatus {
            requests_made,
            requests_remaining: self.max_requests.saturating_sub(requests_made),
            time_window: self.time_window,
            reset_after,
        }
    }

    fn purge(admitted: &mut VecDeque<Instant>, now: Instant, window: Duration) {
        while let Some(oldest) = admitted.front() {
            if now.duration_since(*oldest) >= window {
                admitted.pop_front();
            } else {
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::advance;

    #[tokio::test(start_paused = true)]
    async fn test_burst_within_limit_is_immediate() {
        let limiter = RateLimiter::new(5, Duration::from_secs(1));
        let start = Instant::now();

        for _ in 0..5 {
            limiter.acquire().await;
        }

        assert!(start.elapsed() < Duration::from_millis(10));
    }

    #[tokio::test(start_paused = true)]
    async fn test_blocks_until_window_frees_a_slot() {
        let limiter = RateLimiter::new(5, Duration::from_secs(1));

        for _ in 0..5 {
            limiter.acquire().await;
        }

        let start = Instant::now();
        limiter.acquire().await;
        let elapsed = start.elapsed();

        assert!(
            elapsed >= Duration::from_secs(1),
            "expected >= 1s, got {:?}",
            elapsed
        );
        assert!(elapsed < Duration::from_millis(1050));
    }

    #[tokio::test(start_paused = true)]
    async fn test_capacity_returns_after_window_passes() {
        let limiter = RateLimiter::new(2, Duration::from_millis(100));

        limiter.acquire().await;
        limiter.acquire().await;

        advance(Duration::from_millis(100)).await;

        let start = Instant::now();
        limiter.acquire().await;
        assert!(start.elapsed() < Duration::from_millis(10));
    }

    #[tokio::test(start_paused = true)]
    async fn test_sliding_window_never_overfilled() {
        let limiter = RateLimiter::new(3, Duration::from_millis(100));

        let mut handles = Vec::new();
        for _ in 0..9 {
            let limiter = limiter.clone();
            handles.push(tokio::spawn(async move {
                limiter.acquire().await;
                Instant::now()
            }));
        }

        let mut admissions = Vec::new();
        for handle in handles {
            admissions.push(handle.await.unwrap());
        }
        admissions.sort();

        // Any four consecutive admissions must span more than one window,
        // otherwise some trailing window held four.
        for pair in admissions.windows(4) {
            assert!(
                pair[3].duration_since(pair[0]) >= Duration::from_millis(100),
                "window overfilled: {:?}",
                pair
            );
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_status_reports_window_state() {
        let limiter = RateLimiter::new(5, Duration::from_secs(1));

        let status = limiter.status().await;
        assert_eq!(status.requests_made, 0);
        assert_eq!(status.requests_remaining, 5);
        assert_eq!(status.reset_after, Duration::ZERO);

        for _ in 0..3 {
            limiter.acquire().await;
        }

        let status = limiter.status().await;
        assert_eq!(status.requests_made, 3);
        assert_eq!(status.requests_remaining, 2);
        assert_eq!(status.time_window, Duration::from_secs(1));
        assert_eq!(status.reset_after, Duration::from_secs(1));

        advance(Duration::from_millis(600)).await;

        let status = limiter.status().await;
        assert_eq!(status.requests_made, 3);
        assert_eq!(status.reset_after, Duration::from_millis(400));

        advance(Duration::from_millis(400)).await;

        let status = limiter.status().await;
        assert_eq!(status.requests_made, 0);
        assert_eq!(status.requests_remaining, 5);
        assert_eq!(status.reset_after, Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_max_requests_is_coerced() {
        let limiter = RateLimiter::new(0, Duration::from_millis(100));

        let start = Instant::now();
        limiter.acquire().await;
        assert!(start.elapsed() < Duration::from_millis(10));

        let status = limiter.status().await;
        assert_eq!(status.requests_made, 1);
        assert_eq!(status.requests_remaining, 0);
    }
}
