use thiserror::Error;

use super::{ErrorCode, ServiceError, UserError};

/// Inner error carried by a [`UserError`].
///
/// Either a backend failure or another caller-facing error, e.g. the
/// `VolumeNotInValidState` seen by the last attempt of a retried update.
#[derive(Debug, Error)]
pub enum ErrorCause {
    #[error(transparent)]
    Service(#[from] ServiceError),

    #[error(transparent)]
    User(Box<UserError>),
}

impl ErrorCause {
    /// The backend error at the bottom of the chain, if any.
    pub fn backend(&self) -> Option<&ServiceError> {
        match self {
            ErrorCause::Service(e) => Some(e),
            ErrorCause::User(e) => e.backend(),
        }
    }
}

impl From<UserError> for ErrorCause {
    fn from(e: UserError) -> Self {
        ErrorCause::User(Box::new(e))
    }
}

impl ErrorCode for ErrorCause {
    fn code(&self) -> &str {
        match self {
            ErrorCause::Service(e) => e.code(),
            ErrorCause::User(e) => e.code(),
        }
    }
}
