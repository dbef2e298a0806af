mod backoff;
pub use backoff::BackoffStrategy;

mod jitter;
pub use jitter::JitterStrategy;

mod retry;
pub use retry::{DEFAULT_SKIP_CODES, RetryStrategy};

mod tag_match;
pub use tag_match::TagMatch;
