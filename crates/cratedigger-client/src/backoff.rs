// SPDX-License-Identifier: GPL-3.0-or-later

use rand::Rng;
use std::time::Duration;

/// Compute the delay before retry number `attempt` (1-indexed).
///
/// The base delay grows as `backoff_factor^(attempt - 1)` seconds and is
/// clamped to `max_delay` before jitter is applied, so the result never
/// exceeds `max_delay` by more than the jitter margin of 25%. Jitter is
/// drawn uniformly from `[0, base / 4)` to spread out competing clients
/// that fail at the same moment.
pub fn backoff_delay(attempt: u32, backoff_factor: f64, max_delay: Duration) -> Duration {
    let base = base_delay(attempt, backoff_factor, max_delay);
    let jitter_cap = base * 0.25;
    let jitter = if jitter_cap > 0.0 {
        rand::thread_rng().gen_range(0.0..jitter_cap)
    } else {
        0.0
    };
    Duration::from_secs_f64(base + jitter)
}

/// Exponential base in seconds, clamped to `[0, max_delay]`.
fn base_delay(attempt: u32, backoff_factor: f64, max_delay: Duration) -> f64 {
    let max_secs = max_delay.as_secs_f64();
    let raw = backoff_factor.powf(f64::from(attempt.saturating_sub(1)));
    if raw.is_finite() {
        raw.clamp(0.0, max_secs)
    } else {
        max_secs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_doubles_then_clamps() {
        let max = Duration::from_secs(60);

        assert_eq!(base_delay(1, 2.0, max), 1.0);
        assert_eq!(base_delay(2, 2.0, max), 2.0);
        assert_eq!(base_delay(3, 2.0, max), 4.0);
        assert_eq!(base_delay(6, 2.0, max), 32.0);
        // 2^6 = 64 exceeds the cap
        assert_eq!(base_delay(7, 2.0, max), 60.0);
        assert_eq!(base_delay(30, 2.0, max), 60.0);
    }

    #[test]
    fn test_base_is_monotonic_until_clamped() {
        let max = Duration::from_secs(60);
        let mut previous = 0.0;
        for attempt in 1..=12 {
            let base = base_delay(attempt, 2.0, max);
            assert!(base >= previous, "attempt {} regressed", attempt);
            previous = base;
        }
    }

    #[test]
    fn test_jitter_stays_within_margin() {
        let max = Duration::from_secs(60);
        for attempt in 1..=8 {
            let base = base_delay(attempt, 2.0, max);
            for _ in 0..50 {
                let delay = backoff_delay(attempt, 2.0, max);
                assert!(delay >= Duration::from_secs_f64(base));
                assert!(delay <= Duration::from_secs_f64(base * 1.25));
            }
        }
    }

    #[test]
    fn test_zero_max_delay_yields_zero() {
        assert_eq!(backoff_delay(1, 2.0, Duration::ZERO), Duration::ZERO);
        assert_eq!(backoff_delay(8, 2.0, Duration::ZERO), Duration::ZERO);
    }

    #[test]
    fn test_huge_attempt_does_not_overflow() {
        let max = Duration::from_secs(60);
        let delay = backoff_delay(u32::MAX, 2.0, max);
        assert!(delay <= Duration::from_secs_f64(60.0 * 1.25));
    }
}
