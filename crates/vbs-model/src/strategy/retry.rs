use serde::{Deserialize, Serialize};

use super::BackoffStrategy;

/// Backend error codes that will not go away by asking again.
///
/// A failed attempt carrying one of these codes ends the retry loop at once.
pub const DEFAULT_SKIP_CODES: &[&str] = &[
    "not_found",
    "validation_invalid_name",
    "volume_capacity_max",
    "volume_id_invalid",
    "volume_profile_iops_invalid",
    "volume_capacity_zero_or_negative",
    "volume_name_not_found",
];

/// Declarative retry configuration for a read-merge-write cycle.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RetryStrategy {
    /// Number of attempts, first one included. `0` is treated as `1`.
    pub min_attempts: u32,
    /// Gap schedule between attempts.
    pub backoff: BackoffStrategy,
    /// Error codes that stop retrying immediately.
    pub skip_codes: Vec<String>,
}

impl RetryStrategy {
    /// Strategy with `attempts` tries and no sleeping in between.
    pub fn immediate(attempts: u32) -> Self {
        Self {
            min_attempts: attempts,
            backoff: BackoffStrategy::immediate(),
            ..Default::default()
        }
    }
}

impl Default for RetryStrategy {
    fn default() -> Self {
        Self {
            min_attempts: 3,
            backoff: BackoffStrategy::default(),
            skip_codes: DEFAULT_SKIP_CODES.iter().map(|c| c.to_string()).collect(),
        }
    }
}
