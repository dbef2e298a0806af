use thiserror::Error;

use super::{ErrorCause, ErrorCode, ErrorKind, ServiceError};

/// Error returned to callers of [`crate::VolumeSession`].
///
/// Display renders as `"<code>: <description>"`. The error that caused it, if any, is reachable
/// through [`std::error::Error::source`] and [`UserError::cause`].
#[derive(Debug, Error)]
#[error("{}: {}", .kind.code(), .description)]
pub struct UserError {
    kind: ErrorKind,
    volume_id: String,
    description: String,
    action: String,
    rc: u16,
    #[source]
    cause: Option<ErrorCause>,
}

impl UserError {
    pub fn new(
        kind: ErrorKind,
        volume_id: impl Into<String>,
        description: impl Into<String>,
        action: impl Into<String>,
        rc: u16,
        cause: Option<ErrorCause>,
    ) -> Self {
        Self {
            kind,
            volume_id: volume_id.into(),
            description: description.into(),
            action: action.into(),
            rc,
            cause,
        }
    }

    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn volume_id(&self) -> &str {
        &self.volume_id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn action(&self) -> &str {
        &self.action
    }

    pub fn rc(&self) -> u16 {
        self.rc
    }

    pub fn cause(&self) -> Option<&ErrorCause> {
        self.cause.as_ref()
    }

    /// Kind of the wrapped caller-facing error, if the cause is one.
    pub fn cause_kind(&self) -> Option<ErrorKind> {
        match self.cause.as_ref()? {
            ErrorCause::User(e) => Some(e.kind()),
            ErrorCause::Service(_) => None,
        }
    }

    /// The backend error at the bottom of the chain, if any.
    pub fn backend(&self) -> Option<&ServiceError> {
        self.cause.as_ref().and_then(ErrorCause::backend)
    }
}

impl ErrorCode for UserError {
    fn code(&self) -> &str {
        self.kind.code()
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::*;

    #[test]
    fn display_and_source() {
        let backend = ServiceError::Transport("connection reset".into());
        let e = UserError::new(
            ErrorKind::FailedToUpdateVolume,
            "r006-1",
            "Failed to update volume 'r006-1'.",
            "retry",
            500,
            Some(backend.clone().into()),
        );

        assert_eq!(
            e.to_string(),
            "FailedToUpdateVolume: Failed to update volume 'r006-1'."
        );
        assert_eq!(e.backend(), Some(&backend));
        assert_eq!(e.cause_kind(), None);
        assert_eq!(
            e.source().map(|s| s.to_string()),
            Some("transport error: connection reset".to_string())
        );
        assert_eq!(e.code(), "FailedToUpdateVolume");
    }

    #[test]
    fn nested_user_error_is_the_source() {
        let inner = UserError::new(
            ErrorKind::VolumeNotInValidState,
            "v",
            "pending",
            "wait",
            500,
            None,
        );
        let outer = UserError::new(
            ErrorKind::FailedToUpdateVolume,
            "v",
            "failed",
            "retry",
            500,
            Some(inner.into()),
        );

        assert_eq!(outer.cause_kind(), Some(ErrorKind::VolumeNotInValidState));
        assert!(outer.backend().is_none());
        assert_eq!(
            outer.source().map(|s| s.to_string()),
            Some("VolumeNotInValidState: pending".to_string())
        );
    }

    #[test]
    fn no_cause_means_no_source() {
        let e = UserError::new(ErrorKind::VolumeNotInValidState, "v", "d", "a", 500, None);
        assert!(e.source().is_none());
        assert!(e.cause().is_none());
        assert_eq!(e.volume_id(), "v");
    }
}
