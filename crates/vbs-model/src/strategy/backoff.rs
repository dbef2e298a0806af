use serde::{Deserialize, Serialize};

/// Gap schedule between two attempts of a retried operation.
///
/// The n-th gap (n starting at 1) is `first_ms * factor^(n-1)`, clamped to
/// `max_ms`, and then shaped by `jitter`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackoffStrategy {
    pub jitter: super::JitterStrategy,
    pub first_ms: u64,
    pub max_ms: u64,
    pub factor: f64,
}

impl BackoffStrategy {
    /// Backoff that never sleeps. Mostly useful in tests.
    pub fn immediate() -> Self {
        Self {
            jitter: super::JitterStrategy::None,
            first_ms: 0,
            max_ms: 0,
            factor: 1.0,
        }
    }
}

impl Default for BackoffStrategy {
    /// 3s, 6s, 12s ... up to 60s, deterministic.
    fn default() -> Self {
        Self {
            jitter: super::JitterStrategy::None,
            first_ms: 3_000,
            max_ms: 60_000,
            factor: 2.0,
        }
    }
}
