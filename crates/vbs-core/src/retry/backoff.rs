use std::time::Duration;

use rand::Rng;
use vbs_model::{BackoffStrategy, JitterStrategy, RetryStrategy};

use super::RetryPolicy;

/// [`RetryPolicy`] built from a declarative [`RetryStrategy`].
#[derive(Debug, Clone, Default)]
pub struct BackoffRetry {
    strategy: RetryStrategy,
}

impl BackoffRetry {
    pub fn new(strategy: RetryStrategy) -> Self {
        Self { strategy }
    }

    pub fn strategy(&self) -> &RetryStrategy {
        &self.strategy
    }
}

impl RetryPolicy for BackoffRetry {
    fn max_attempts(&self) -> u32 {
        self.strategy.min_attempts.max(1)
    }

    fn delay(&self, attempt: u32) -> Duration {
        jittered_delay(&self.strategy.backoff, attempt)
    }

    fn should_retry(&self, code: &str) -> bool {
        !self.strategy.skip_codes.iter().any(|c| c == code)
    }
}

/// Deterministic gap after the `attempt`-th failure: `first * factor^(attempt-1)`, clamped to `max`.
///
/// A non-finite factor or one below `1.0` is treated as `1.0`.
pub fn base_delay(s: &BackoffStrategy, attempt: u32) -> Duration {
    let factor = if s.factor.is_finite() && s.factor >= 1.0 {
        s.factor
    } else {
        1.0
    };
    let exp = attempt.saturating_sub(1).min(i32::MAX as u32) as i32;
    let raw = s.first_ms as f64 * factor.powi(exp);
    let ms = if raw.is_finite() {
        raw.min(s.max_ms as f64) as u64
    } else {
        s.max_ms
    };
    Duration::from_millis(ms)
}

/// [`base_delay`] shaped by the configured [`JitterStrategy`].
pub fn jittered_delay(s: &BackoffStrategy, attempt: u32) -> Duration {
    let base = base_delay(s, attempt).as_millis() as u64;
    if base == 0 {
        return Duration::ZERO;
    }

    let mut rng = rand::rng();
    let ms = match s.jitter {
        JitterStrategy::None => base,
        JitterStrategy::Full => rng.random_range(0..=base),
        JitterStrategy::Equal => {
            let half = base / 2;
            half + rng.random_range(0..=base - half)
        }
        JitterStrategy::Decorrelated => {
            let lo = s.first_ms.min(s.max_ms);
            let hi = base.saturating_mul(3);
            if hi <= lo {
                lo
            } else {
                rng.random_range(lo..=hi).min(s.max_ms)
            }
        }
    };
    Duration::from_millis(ms)
}
