//! Logging setup for vbs binaries.
//!
//! Libraries in this workspace only emit `tracing` events; installing a subscriber is left to
//! the process entry point through [`init_logger`].
mod clock;
mod config;
mod error;
mod format;
mod install;
mod level;

pub use clock::{LoggerClock, LoggerTimeZone, init_local_offset};
pub use config::{ENV_LOG_FORMAT, ENV_LOG_LEVEL, ENV_LOG_TZ, LoggerConfig};
pub use error::{LoggerError, LoggerResult};
pub use format::LoggerFormat;
pub use level::LoggerLevel;

/// Install the global tracing subscriber described by `cfg`.
///
/// Fails with [`LoggerError::AlreadyInstalled`] if a global subscriber is already set.
/// For [`LoggerTimeZone::Local`] call [`init_local_offset`] first, before any thread is spawned.
///
/// ```rust
/// use vbs_observe::{LoggerConfig, init_logger};
///
/// let cfg = LoggerConfig::default();
/// init_logger(&cfg).expect("logger");
/// tracing::info!("logger initialized");
/// ```
pub fn init_logger(cfg: &LoggerConfig) -> Result<(), LoggerError> {
    install::install(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_install_is_rejected() {
        let cfg = LoggerConfig {
            use_color: false,
            ..Default::default()
        };
        let _ = init_logger(&cfg);
        assert!(matches!(init_logger(&cfg), Err(LoggerError::AlreadyInstalled)));
    }
}
