use std::sync::Arc;

use super::{ErrorCause, ErrorKind, UserError};

/// Builds caller-facing errors.
///
/// Injected into [`crate::VolumeSession`] so wording and codes can be swapped (localization,
/// a different catalog) without touching the update logic.
pub trait ErrorFactory: Send + Sync + 'static {
    /// Build an error of `kind` for `volume_id`.
    ///
    /// `cause` is the inner error, a backend failure or another [`UserError`].
    fn make(&self, kind: ErrorKind, cause: Option<ErrorCause>, volume_id: &str) -> UserError;
}

/// Shared handle to an error factory.
pub type ErrorFactoryHandle = Arc<dyn ErrorFactory>;

/// Factory backed by the built-in [`ErrorKind`] catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct CatalogErrorFactory;

impl ErrorFactory for CatalogErrorFactory {
    fn make(&self, kind: ErrorKind, cause: Option<ErrorCause>, volume_id: &str) -> UserError {
        UserError::new(
            kind,
            volume_id,
            kind.describe(volume_id),
            kind.action(),
            kind.rc(),
            cause,
        )
    }
}

/// Create a catalog-backed factory handle.
#[inline]
pub fn catalog_errors() -> ErrorFactoryHandle {
    Arc::new(CatalogErrorFactory)
}
