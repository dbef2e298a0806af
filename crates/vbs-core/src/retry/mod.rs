//! Retry abstraction used by the volume session.
//!
//! A [`RetryPolicy`] answers three questions: how many attempts, how long to wait before the
//! next one, and whether a given error code is worth another try. [`retry_with_min_retries`]
//! drives an operation according to such a policy.
mod backoff;
pub use backoff::{BackoffRetry, base_delay, jittered_delay};

mod runner;
pub use runner::retry_with_min_retries;

use std::{sync::Arc, time::Duration};

/// Retry decision interface.
///
/// Implementations are injected into [`crate::VolumeSession`] via [`RetryHandle`].
pub trait RetryPolicy: Send + Sync + 'static {
    /// Total number of attempts, the first one included. Values below 1 are treated as 1.
    fn max_attempts(&self) -> u32;

    /// Gap to wait after the `attempt`-th failure (1-based) before trying again.
    fn delay(&self, attempt: u32) -> Duration;

    /// Returns `false` for error codes that must end the loop immediately.
    fn should_retry(&self, code: &str) -> bool;
}

/// Shared handle to a retry policy.
pub type RetryHandle = Arc<dyn RetryPolicy>;
