//! Error types of the volume layer.
//!
//! Two families exist:
//! - [`ServiceError`]: what the backend or transport reported. Retried transparently.
//! - [`UserError`]: what callers of [`crate::VolumeSession`] see, classified by [`ErrorKind`].
mod service;
pub use service::{ServiceError, ServiceResult};

mod cause;
pub use cause::ErrorCause;

mod kind;
pub use kind::ErrorKind;

mod user;
pub use user::UserError;

mod factory;
pub use factory::{CatalogErrorFactory, ErrorFactory, ErrorFactoryHandle, catalog_errors};

/// Stable machine-readable classification of an error.
///
/// The retry policy looks at this code to decide whether another attempt makes sense.
pub trait ErrorCode {
    fn code(&self) -> &str;
}
