use std::{fmt, future::Future};

use tracing::{debug, warn};

use super::RetryPolicy;
use crate::error::ErrorCode;

/// Run `operation` until it succeeds or `policy` gives up.
///
/// The operation is always invoked at least once. After a failure the loop stops when the
/// error code is rejected by [`RetryPolicy::should_retry`] or when the attempt budget is spent;
/// otherwise it sleeps for [`RetryPolicy::delay`] and starts over. The last error is returned.
///
/// # Examples
///
/// ```
/// use vbs_core::{BackoffRetry, ServiceError, retry_with_min_retries};
/// use vbs_model::RetryStrategy;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let policy = BackoffRetry::new(RetryStrategy::immediate(3));
/// let mut calls = 0;
///
/// let out = retry_with_min_retries(&policy, || {
///     calls += 1;
///     let n = calls;
///     async move {
///         if n < 3 {
///             Err(ServiceError::Transport("reset".into()))
///         } else {
///             Ok(n)
///         }
///     }
/// })
/// .await;
///
/// assert_eq!(out.unwrap(), 3);
/// # }
/// ```
pub async fn retry_with_min_retries<T, E, F, Fut>(
    policy: &dyn RetryPolicy,
    mut operation: F,
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: ErrorCode + fmt::Display,
{
    let max_attempts = policy.max_attempts().max(1);
    let mut attempt = 1;

    loop {
        let err = match operation().await {
            Ok(value) => return Ok(value),
            Err(err) => err,
        };

        if !policy.should_retry(err.code()) {
            debug!(attempt, code = err.code(), error = %err, "error is not retryable");
            return Err(err);
        }
        if attempt >= max_attempts {
            debug!(attempt, code = err.code(), "retry budget exhausted");
            return Err(err);
        }

        let delay = policy.delay(attempt);
        warn!(
            attempt,
            max_attempts,
            code = err.code(),
            delay_ms = delay.as_millis() as u64,
            error = %err,
            "attempt failed, retrying"
        );
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        attempt += 1;
    }
}

#[cfg(test)]
mod tests {
    use std::{
        sync::atomic::{AtomicU32, Ordering},
        time::Duration,
    };

    use vbs_model::{BackoffStrategy, JitterStrategy, RetryStrategy};

    use super::*;
    use crate::{error::ServiceError, retry::BackoffRetry};

    fn immediate(attempts: u32) -> BackoffRetry {
        BackoffRetry::new(RetryStrategy::immediate(attempts))
    }

    #[tokio::test]
    async fn succeeds_first_attempt() {
        let calls = AtomicU32::new(0);
        let res: Result<u32, ServiceError> = retry_with_min_retries(&immediate(3), || {
            calls.fetch_add(1, Ordering::Relaxed);
            async { Ok(7) }
        })
        .await;

        assert_eq!(res.unwrap(), 7);
        assert_eq!(calls.load(Ordering::Relaxed), 1);
    }

    #[tokio::test]
    async fn succeeds_after_transient_failures() {
        let calls = AtomicU32::new(0);
        let res: Result<(), ServiceError> = retry_with_min_retries(&immediate(3), || {
            let n = calls.fetch_add(1, Ordering::Relaxed);
            async move {
                if n < 2 {
                    Err(ServiceError::Transport("reset".into()))
                } else {
                    Ok(())
                }
            }
        })
        .await;

        assert!(res.is_ok());
        assert_eq!(calls.load(Ordering::Relaxed), 3);
    }

    #[tokio::test]
    async fn returns_last_error_when_exhausted() {
        let calls = AtomicU32::new(0);
        let res: Result<(), ServiceError> = retry_with_min_retries(&immediate(4), || {
            let n = calls.fetch_add(1, Ordering::Relaxed);
            async move { Err(ServiceError::api("internal_error", format!("attempt {n}"))) }
        })
        .await;

        assert_eq!(res.unwrap_err(), ServiceError::api("internal_error", "attempt 3"));
        assert_eq!(calls.load(Ordering::Relaxed), 4);
    }

    #[tokio::test]
    async fn skip_code_stops_immediately() {
        let calls = AtomicU32::new(0);
        let res: Result<(), ServiceError> = retry_with_min_retries(&immediate(5), || {
            calls.fetch_add(1, Ordering::Relaxed);
            async { Err(ServiceError::NotFound("r006-1".into())) }
        })
        .await;

        assert!(matches!(res, Err(ServiceError::NotFound(_))));
        assert_eq!(calls.load(Ordering::Relaxed), 1);
    }

    #[tokio::test]
    async fn zero_attempts_still_runs_once() {
        let calls = AtomicU32::new(0);
        let res: Result<(), ServiceError> = retry_with_min_retries(&immediate(0), || {
            calls.fetch_add(1, Ordering::Relaxed);
            async { Err(ServiceError::Transport("down".into())) }
        })
        .await;

        assert!(res.is_err());
        assert_eq!(calls.load(Ordering::Relaxed), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn sleeps_between_attempts() {
        let policy = BackoffRetry::new(RetryStrategy {
            min_attempts: 3,
            backoff: BackoffStrategy {
                jitter: JitterStrategy::None,
                first_ms: 100,
                max_ms: 1_000,
                factor: 2.0,
            },
            ..RetryStrategy::default()
        });

        let started = tokio::time::Instant::now();
        let res: Result<(), ServiceError> = retry_with_min_retries(&policy, || async {
            Err(ServiceError::Transport("down".into()))
        })
        .await;

        assert!(res.is_err());
        assert!(started.elapsed() >= Duration::from_millis(300));
    }
}
