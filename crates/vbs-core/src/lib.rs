pub mod error;
pub mod retry;
pub mod service;
pub mod session;

pub use error::{
    CatalogErrorFactory, ErrorCause, ErrorCode, ErrorFactory, ErrorFactoryHandle, ErrorKind,
    ServiceError, ServiceResult, UserError,
};
pub use retry::{BackoffRetry, RetryHandle, RetryPolicy, retry_with_min_retries};
pub use service::{MemoryVolumeService, VolumeService, VolumeServiceHandle};
pub use session::{ConfigError, SessionConfig, VolumeSession};

pub mod prelude {
    pub use crate::error::{ErrorCause, ErrorKind, ServiceError, UserError};
    pub use crate::service::VolumeService;
    pub use crate::session::{SessionConfig, VolumeSession};
    pub use vbs_model::{Etag, UserTags, Volume, VolumePatch, VolumeRequest, VolumeStatus};
}
