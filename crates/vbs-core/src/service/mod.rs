//! Backend seam for volume lookups and conditional updates.
//!
//! Concrete clients (HTTP, mocks, in-memory) implement [`VolumeService`] and are handed to
//! [`crate::VolumeSession`] as a [`VolumeServiceHandle`].
mod memory;
pub use memory::MemoryVolumeService;

use std::sync::Arc;

use async_trait::async_trait;
use vbs_model::{Etag, Volume, VolumePatch};

use crate::error::ServiceResult;

/// Volume lookup and update operations offered by the storage backend.
#[async_trait]
pub trait VolumeService: Send + Sync {
    /// Fetch the current volume snapshot together with its concurrency token.
    async fn get_volume_etag(&self, volume_id: &str) -> ServiceResult<(Volume, Etag)>;

    /// Apply `patch` only if `etag` still matches the server-side state.
    ///
    /// Fails with [`crate::ServiceError::PreconditionFailed`] on a stale token.
    async fn update_volume_with_etag(
        &self,
        volume_id: &str,
        etag: &Etag,
        patch: &VolumePatch,
    ) -> ServiceResult<()>;
}

/// Shared handle to a volume service.
pub type VolumeServiceHandle = Arc<dyn VolumeService>;
