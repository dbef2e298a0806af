#![allow(dead_code)]

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use vbs_core::{MemoryVolumeService, ServiceResult, SessionConfig, VolumeService, VolumeSession};
use vbs_model::{Etag, RetryStrategy, TagMatch, UserTags, Volume, VolumePatch, VolumeStatus};

pub const VOLUME_ID: &str = "r006-7f3c1e2a";

pub fn memory_with(status: VolumeStatus, tags: &[&str]) -> Arc<MemoryVolumeService> {
    Arc::new(MemoryVolumeService::new().with_volume(Volume::new(
        VOLUME_ID,
        status,
        tags.iter().copied().collect::<UserTags>(),
    )))
}

pub fn session_for(
    svc: Arc<dyn VolumeService>,
    attempts: u32,
    tag_match: TagMatch,
) -> VolumeSession {
    let cfg = SessionConfig {
        retry: RetryStrategy::immediate(attempts),
        tag_match,
    };
    VolumeSession::from_config(svc, &cfg)
}

pub fn tags(v: &[&str]) -> UserTags {
    v.iter().copied().collect()
}

/// Overrides the reported status of successive lookups, one entry per lookup, then defers to
/// the in-memory backend unchanged.
pub struct ScriptedStatusService {
    pub inner: Arc<MemoryVolumeService>,
    script: Mutex<VecDeque<VolumeStatus>>,
}

impl ScriptedStatusService {
    pub fn new(inner: Arc<MemoryVolumeService>, script: Vec<VolumeStatus>) -> Self {
        Self {
            inner,
            script: Mutex::new(script.into()),
        }
    }
}

#[async_trait]
impl VolumeService for ScriptedStatusService {
    async fn get_volume_etag(&self, volume_id: &str) -> ServiceResult<(Volume, Etag)> {
        let (mut volume, etag) = self.inner.get_volume_etag(volume_id).await?;
        if let Some(status) = self.script.lock().unwrap().pop_front() {
            volume.status = status;
        }
        Ok((volume, etag))
    }

    async fn update_volume_with_etag(
        &self,
        volume_id: &str,
        etag: &Etag,
        patch: &VolumePatch,
    ) -> ServiceResult<()> {
        self.inner.update_volume_with_etag(volume_id, etag, patch).await
    }
}
