use std::time::Duration;

use rand::Rng;

use crate::config;

/// Bounded exponential backoff.
///
/// The delay slept after failed attempt `n` (0-based) is
/// `initial_delay * 2^n + jitter`, with `jitter` uniform in `[0, max_jitter)`.
#[derive(Debug, Clone, PartialEq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub initial_delay: Duration,
    pub max_jitter: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: config::MAX_FETCH_ATTEMPTS,
            initial_delay: Duration::from_millis(config::INITIAL_RETRY_DELAY_MS),
            max_jitter: Duration::from_millis(config::MAX_RETRY_JITTER_MS),
        }
    }
}

impl RetryPolicy {
    pub fn delay_for(&self, attempt: u32, jitter: Duration) -> Duration {
        let base = self.initial_delay.saturating_mul(2u32.saturating_pow(attempt));
        let jitter = if self.max_jitter.is_zero() {
            Duration::ZERO
        } else {
            jitter.min(self.max_jitter - Duration::from_millis(1))
        };
        base + jitter
    }

    pub fn backoff(&self, attempt: u32) -> Duration {
        let max_jitter_ms = self.max_jitter.as_millis() as u64;
        let jitter_ms = if max_jitter_ms == 0 {
            0
        } else {
            rand::thread_rng().gen_range(0..max_jitter_ms)
        };
        self.delay_for(attempt, Duration::from_millis(jitter_ms))
    }

    /// Whether another attempt follows the failed attempt `attempt`.
    pub fn should_retry(&self, attempt: u32) -> bool {
        attempt + 1 < self.max_attempts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_matches_site_constants() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.max_attempts, 3);
        assert_eq!(policy.initial_delay, Duration::from_millis(1_000));
        assert_eq!(policy.max_jitter, Duration::from_millis(500));
    }

    #[test]
    fn delay_doubles_per_attempt() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.delay_for(0, Duration::ZERO), Duration::from_millis(1_000));
        assert_eq!(policy.delay_for(1, Duration::ZERO), Duration::from_millis(2_000));
        assert_eq!(policy.delay_for(2, Duration::from_millis(250)), Duration::from_millis(4_250));
    }

    #[test]
    fn jitter_never_reaches_the_cap() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.delay_for(0, Duration::from_secs(10)), Duration::from_millis(1_499));
    }

    #[test]
    fn backoff_stays_inside_the_window() {
        let policy = RetryPolicy::default();
        for k in 1..=3u32 {
            let floor = 1_000u128 * 2u128.pow(k - 1);
            for _ in 0..200 {
                let delay = policy.backoff(k - 1).as_millis();
                assert!(delay >= floor, "attempt {k}: {delay} < {floor}");
                assert!(delay < floor + 500, "attempt {k}: {delay} >= {}", floor + 500);
            }
        }
    }

    #[test]
    fn zero_jitter_policy_is_deterministic() {
        let policy = RetryPolicy {
            max_jitter: Duration::ZERO,
            ..RetryPolicy::default()
        };
        assert_eq!(policy.backoff(1), Duration::from_millis(2_000));
    }

    #[test]
    fn retries_stop_at_the_last_attempt() {
        let policy = RetryPolicy::default();
        assert!(policy.should_retry(0));
        assert!(policy.should_retry(1));
        assert!(!policy.should_retry(2));
    }
}
