use serde::{Deserialize, Serialize};

use crate::{ModelError, ModelResult, UserTags, VolumeId};

/// Additive tag request: make sure `tags` are present on `volume_id`.
///
/// Existing tags are never removed by such a request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeRequest {
    pub volume_id: VolumeId,
    #[serde(default)]
    pub tags: UserTags,
}

impl VolumeRequest {
    pub fn new(volume_id: impl Into<VolumeId>, tags: impl Into<UserTags>) -> Self {
        Self {
            volume_id: volume_id.into(),
            tags: tags.into(),
        }
    }

    /// Rules:
    /// - `volume_id` is not empty or whitespace-only.
    pub fn validate(&self) -> ModelResult<()> {
        if self.volume_id.trim().is_empty() {
            return Err(ModelError::Invalid("volume id is empty".into()));
        }
        Ok(())
    }
}
