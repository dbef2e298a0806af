use serde::{Deserialize, Serialize};

use crate::{UserTags, VolumeId, VolumeStatus};

/// Snapshot of a volume as returned by the lookup service.
///
/// Fetched per call and discarded afterwards; never written back as a whole.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Volume {
    pub id: VolumeId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub status: VolumeStatus,
    #[serde(default)]
    pub user_tags: UserTags,
}

impl Volume {
    pub fn new(id: impl Into<VolumeId>, status: VolumeStatus, user_tags: UserTags) -> Self {
        Self {
            id: id.into(),
            name: None,
            status,
            user_tags,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}
