use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown volume status: {0}")]
    UnknownStatus(String),

    #[error("unknown jitter strategy: {0}")]
    UnknownJitter(String),

    #[error("unknown tag match mode: {0}")]
    UnknownTagMatch(String),

    #[error("invalid model: {0}")]
    Invalid(String),
}

pub type ModelResult<T> = Result<T, ModelError>;
