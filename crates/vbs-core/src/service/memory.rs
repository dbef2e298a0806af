use std::{
    collections::{HashMap, VecDeque},
    sync::{Mutex, MutexGuard, PoisonError},
};

use async_trait::async_trait;
use tracing::trace;
use vbs_model::{Etag, Volume, VolumePatch, VolumeStatus};

use super::VolumeService;
use crate::error::{ServiceError, ServiceResult};

#[derive(Debug)]
struct Entry {
    volume: Volume,
    version: u64,
}

impl Entry {
    fn etag(&self) -> Etag {
        Etag::new(format!("W/\"{}\"", self.version))
    }
}

#[derive(Debug, Default)]
struct State {
    volumes: HashMap<String, Entry>,
    lookup_faults: VecDeque<ServiceError>,
    update_faults: VecDeque<ServiceError>,
    pending_conflicts: usize,
    lookup_calls: usize,
    update_calls: usize,
    applied: Vec<(String, VolumePatch)>,
}

/// Process-local [`VolumeService`] with real etag semantics.
///
/// Every volume carries a version that is bumped on each accepted update and used as its etag.
/// Faults can be queued per call type, and a concurrent writer can be simulated with
/// [`MemoryVolumeService::conflict_next_update`].
///
/// # Examples
///
/// ```
/// use vbs_core::{MemoryVolumeService, VolumeService};
/// use vbs_model::{UserTags, Volume, VolumePatch, VolumeStatus};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let svc = MemoryVolumeService::new().with_volume(Volume::new(
///     "vol-1",
///     VolumeStatus::Available,
///     UserTags::default(),
/// ));
///
/// let (_, etag) = svc.get_volume_etag("vol-1").await.unwrap();
/// let patch = VolumePatch::with_tags(["env:prod"].into_iter().collect());
/// svc.update_volume_with_etag("vol-1", &etag, &patch).await.unwrap();
///
/// // The etag moved on, so a second write with the old one is rejected.
/// assert!(svc.update_volume_with_etag("vol-1", &etag, &patch).await.is_err());
/// assert_eq!(svc.update_calls(), 2);
/// # }
/// ```
#[derive(Debug, Default)]
pub struct MemoryVolumeService {
    state: Mutex<State>,
}

impl MemoryVolumeService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`MemoryVolumeService::insert`].
    pub fn with_volume(self, volume: Volume) -> Self {
        self.insert(volume);
        self
    }

    /// Insert or replace a volume. Its version restarts at 1.
    pub fn insert(&self, volume: Volume) {
        self.state()
            .volumes
            .insert(volume.id.clone(), Entry { volume, version: 1 });
    }

    /// Current snapshot of a volume, if stored.
    pub fn volume(&self, volume_id: &str) -> Option<Volume> {
        self.state().volumes.get(volume_id).map(|e| e.volume.clone())
    }

    /// Change the status as an out-of-band actor would. Bumps the version.
    pub fn set_status(&self, volume_id: &str, status: VolumeStatus) {
        if let Some(entry) = self.state().volumes.get_mut(volume_id) {
            entry.volume.status = status;
            entry.version += 1;
        }
    }

    /// Fail the next lookup with `err`. Queued faults are consumed in order.
    pub fn fail_next_lookup(&self, err: ServiceError) {
        self.state().lookup_faults.push_back(err);
    }

    /// Fail the next update with `err`. Queued faults are consumed in order.
    pub fn fail_next_update(&self, err: ServiceError) {
        self.state().update_faults.push_back(err);
    }

    /// Make the next update race with another writer: the version moves on right before the
    /// etag check, so the update is rejected as stale.
    pub fn conflict_next_update(&self) {
        self.state().pending_conflicts += 1;
    }

    pub fn lookup_calls(&self) -> usize {
        self.state().lookup_calls
    }

    pub fn update_calls(&self) -> usize {
        self.state().update_calls
    }

    /// Patches that were accepted, in order.
    pub fn applied_patches(&self) -> Vec<(String, VolumePatch)> {
        self.state().applied.clone()
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl VolumeService for MemoryVolumeService {
    async fn get_volume_etag(&self, volume_id: &str) -> ServiceResult<(Volume, Etag)> {
        let mut state = self.state();
        state.lookup_calls += 1;

        if let Some(err) = state.lookup_faults.pop_front() {
            return Err(err);
        }

        let entry = state
            .volumes
            .get(volume_id)
            .ok_or_else(|| ServiceError::NotFound(volume_id.to_string()))?;
        let etag = entry.etag();
        trace!(volume_id, etag = %etag, "volume looked up");
        Ok((entry.volume.clone(), etag))
    }

    async fn update_volume_with_etag(
        &self,
        volume_id: &str,
        etag: &Etag,
        patch: &VolumePatch,
    ) -> ServiceResult<()> {
        let mut state = self.state();
        state.update_calls += 1;

        if let Some(err) = state.update_faults.pop_front() {
            return Err(err);
        }

        let conflict = state.pending_conflicts > 0;
        if conflict {
            state.pending_conflicts -= 1;
        }

        let entry = state
            .volumes
            .get_mut(volume_id)
            .ok_or_else(|| ServiceError::NotFound(volume_id.to_string()))?;
        if conflict {
            entry.version += 1;
        }
        if entry.etag() != *etag {
            return Err(ServiceError::precondition_failed(volume_id));
        }

        entry.volume.user_tags = patch.user_tags.clone();
        entry.version += 1;
        trace!(volume_id, tags = ?patch.user_tags, "volume updated");

        state.applied.push((volume_id.to_string(), patch.clone()));
        Ok(())
    }
}
