use thiserror::Error;

use super::ErrorCode;

/// Failure reported by a [`crate::VolumeService`] call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error("volume '{0}' not found")]
    NotFound(String),

    #[error("etag mismatch for volume '{volume_id}'")]
    PreconditionFailed { volume_id: String },

    #[error("backend error [{code}]: {message}")]
    Api { code: String, message: String },

    #[error("transport error: {0}")]
    Transport(String),
}

impl ServiceError {
    pub fn api(code: impl Into<String>, message: impl Into<String>) -> Self {
        ServiceError::Api {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn precondition_failed(volume_id: impl Into<String>) -> Self {
        ServiceError::PreconditionFailed {
            volume_id: volume_id.into(),
        }
    }
}

impl ErrorCode for ServiceError {
    fn code(&self) -> &str {
        match self {
            ServiceError::NotFound(_) => "not_found",
            ServiceError::PreconditionFailed { .. } => "precondition_failed",
            ServiceError::Api { code, .. } => code.as_str(),
            ServiceError::Transport(_) => "transport_error",
        }
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
