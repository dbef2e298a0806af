mod domain;
pub use domain::{Etag, UserTags, VolumeId};

mod error;
pub use error::{ModelError, ModelResult};

mod strategy;
pub use strategy::{BackoffStrategy, JitterStrategy, RetryStrategy, TagMatch};
pub use strategy::DEFAULT_SKIP_CODES;

mod volume;
pub use volume::{Volume, VolumePatch, VolumeRequest, VolumeStatus};
