use thiserror::Error;

/// Errors from parsing logger settings or installing the subscriber.
#[derive(Debug, Error)]
pub enum LoggerError {
    /// A format or timezone name nobody handles, e.g. `format = "xml"`.
    #[error("unknown log {what} '{value}'")]
    Unknown { what: &'static str, value: String },

    #[error("bad log filter '{directive}': {reason}")]
    Filter { directive: String, reason: String },

    /// A `VBS_LOG_*` variable held a value its setting rejected.
    #[error("invalid {var}='{value}'")]
    Env {
        var: &'static str,
        value: String,
        #[source]
        source: Box<LoggerError>,
    },

    #[error("journald unavailable: {0}")]
    Journald(String),

    #[error("a global tracing subscriber is already installed")]
    AlreadyInstalled,
}

pub type LoggerResult<T> = Result<T, LoggerError>;
