use std::fmt;

/// Classification of errors surfaced to callers.
///
/// Every kind carries a catalog entry: a code, a description template, a return code and a suggested action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The volume exists but is not in the one status that accepts tag updates.
    VolumeNotInValidState,
    /// The tag update could not be completed, retries included.
    FailedToUpdateVolume,
    /// The request was rejected before reaching the backend.
    InvalidVolumeRequest,
}

impl ErrorKind {
    #[inline]
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::VolumeNotInValidState => "VolumeNotInValidState",
            ErrorKind::FailedToUpdateVolume => "FailedToUpdateVolume",
            ErrorKind::InvalidVolumeRequest => "InvalidVolumeRequest",
        }
    }

    /// Human-readable description for the given volume.
    pub fn describe(&self, volume_id: &str) -> String {
        match self {
            ErrorKind::VolumeNotInValidState => {
                format!("Volume '{volume_id}' is not in valid (available) state.")
            }
            ErrorKind::FailedToUpdateVolume => format!("Failed to update volume '{volume_id}'."),
            ErrorKind::InvalidVolumeRequest => {
                format!("Update request for volume '{volume_id}' is invalid.")
            }
        }
    }

    /// What the user can do about it.
    pub fn action(&self) -> &'static str {
        match self {
            ErrorKind::VolumeNotInValidState => {
                "Wait until the volume reaches the available state and retry the request."
            }
            ErrorKind::FailedToUpdateVolume => {
                "Check that the volume exists and is available, then retry. If the problem persists, contact support with the backend error."
            }
            ErrorKind::InvalidVolumeRequest => "Provide a non-empty volume ID.",
        }
    }

    /// HTTP-like return code.
    pub fn rc(&self) -> u16 {
        match self {
            ErrorKind::VolumeNotInValidState => 500,
            ErrorKind::FailedToUpdateVolume => 500,
            ErrorKind::InvalidVolumeRequest => 400,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn description_mentions_volume() {
        for kind in [
            ErrorKind::VolumeNotInValidState,
            ErrorKind::FailedToUpdateVolume,
            ErrorKind::InvalidVolumeRequest,
        ] {
            assert!(kind.describe("r006-7").contains("r006-7"), "{kind}");
            assert!(!kind.action().is_empty());
        }
    }

    #[test]
    fn display_is_code() {
        assert_eq!(ErrorKind::FailedToUpdateVolume.to_string(), "FailedToUpdateVolume");
        assert_eq!(ErrorKind::InvalidVolumeRequest.rc(), 400);
    }
}
