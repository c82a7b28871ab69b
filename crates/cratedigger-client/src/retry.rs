// SPDX-License-Identifier: GPL-3.0-or-later

use crate::backoff::backoff_delay;
use crate::error::{DiscogsError, ErrorCategory, Result};
use std::future::Future;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, warn};

/// Retry policy for Discogs API calls.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Retries after the initial attempt; the call runs at most
    /// `max_retries + 1` times.
    pub max_retries: u32,
    /// Exponential growth factor for the backoff base.
    pub backoff_factor: f64,
    /// Ceiling for the backoff base before jitter.
    pub max_delay: Duration,
    /// Error categories worth retrying. Anything else fails immediately.
    pub retry_on: Vec<ErrorCategory>,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            backoff_factor: 2.0,
            max_delay: Duration::from_secs(60),
            retry_on: vec![
                ErrorCategory::Throttled,
                ErrorCategory::Server,
                ErrorCategory::Transport,
            ],
        }
    }
}

impl RetryPolicy {
    /// Policy that never retries; every error is terminal.
    pub fn none() -> Self {
        Self {
            max_retries: 0,
            ..Self::default()
        }
    }

    pub fn should_retry(&self, error: &DiscogsError) -> bool {
        self.retry_on.contains(&error.category())
    }

    /// Delay before retry number `attempt`. A server-provided wait on a
    /// throttling error takes precedence over the computed backoff.
    fn delay_for(&self, attempt: u32, error: &DiscogsError) -> Duration {
        match error.retry_after() {
            Some(hint) => hint,
            None => backoff_delay(attempt, self.backoff_factor, self.max_delay),
        }
    }
}

/// Run `operation`, retrying retryable failures with exponential backoff.
///
/// Non-retryable errors and the error from the final permitted attempt are
/// returned to the caller unchanged.
pub async fn run_with_retry<T, F, Fut>(policy: &RetryPolicy, mut operation: F) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let mut attempt: u32 = 1;
    loop {
        match operation().await {
            Ok(value) => {
                if attempt > 1 {
                    debug!(target: "discogs", "succeeded on attempt {}", attempt);
                }
                return Ok(value);
            }
            Err(error) => {
                if !policy.should_retry(&error) || attempt > policy.max_retries {
                    return Err(error);
                }

                let delay = policy.delay_for(attempt, &error);
                warn!(
                    target: "discogs",
                    "attempt {}/{} failed ({}), retrying in {:?}",
                    attempt,
                    policy.max_retries + 1,
                    error,
                    delay
                );
                sleep(delay).await;
                attempt += 1;
            }
        }
    }
}
