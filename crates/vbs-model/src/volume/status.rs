use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, ModelResult};

/// Lifecycle state reported by the backend for a volume.
///
/// Only [`VolumeStatus::Available`] accepts tag updates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VolumeStatus {
    Available,
    Pending,
    Updating,
    PendingDeletion,
    Failed,
    Unusable,
    /// Any value this client does not know about.
    #[serde(other)]
    Unknown,
}

impl VolumeStatus {
    #[inline]
    pub fn is_available(&self) -> bool {
        matches!(self, VolumeStatus::Available)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            VolumeStatus::Available => "available",
            VolumeStatus::Pending => "pending",
            VolumeStatus::Updating => "updating",
            VolumeStatus::PendingDeletion => "pending_deletion",
            VolumeStatus::Failed => "failed",
            VolumeStatus::Unusable => "unusable",
            VolumeStatus::Unknown => "unknown",
        }
    }
}

impl fmt::Display for VolumeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VolumeStatus {
    type Err = ModelError;
    fn from_str(s: &str) -> ModelResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "available" => Ok(VolumeStatus::Available),
            "pending" => Ok(VolumeStatus::Pending),
            "updating" => Ok(VolumeStatus::Updating),
            "pending_deletion" | "pending-deletion" => Ok(VolumeStatus::PendingDeletion),
            "failed" => Ok(VolumeStatus::Failed),
            "unusable" => Ok(VolumeStatus::Unusable),
            "unknown" => Ok(VolumeStatus::Unknown),
            other => Err(ModelError::UnknownStatus(other.to_string())),
        }
    }
}
