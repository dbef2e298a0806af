use std::{io::IsTerminal, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{LoggerError, LoggerFormat, LoggerLevel, LoggerResult, LoggerTimeZone};

pub const ENV_LOG_LEVEL: &str = "VBS_LOG_LEVEL";
pub const ENV_LOG_FORMAT: &str = "VBS_LOG_FORMAT";
pub const ENV_LOG_TZ: &str = "VBS_LOG_TZ";

/// Logger configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub format: LoggerFormat,
    /// `EnvFilter` directive, e.g. `"info"` or `"vbs_core=debug,info"`.
    pub level: LoggerLevel,
    pub tz: LoggerTimeZone,
    /// Include module targets in each record.
    pub with_targets: bool,
    /// Colored output for text logs; only honored when stdout is a terminal.
    pub use_color: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            format: LoggerFormat::default(),
            level: LoggerLevel::default(),
            tz: LoggerTimeZone::default(),
            with_targets: true,
            use_color: true,
        }
    }
}

impl LoggerConfig {
    /// Defaults overridden by `VBS_LOG_LEVEL`, `VBS_LOG_FORMAT` and `VBS_LOG_TZ` when set.
    pub fn from_env() -> Result<Self, LoggerError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`LoggerConfig::from_env`] with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, LoggerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();
        if let Some(v) = lookup(ENV_LOG_LEVEL) {
            cfg.level = parse_var(ENV_LOG_LEVEL, v)?;
        }
        if let Some(v) = lookup(ENV_LOG_FORMAT) {
            cfg.format = parse_var(ENV_LOG_FORMAT, v)?;
        }
        if let Some(v) = lookup(ENV_LOG_TZ) {
            cfg.tz = parse_var(ENV_LOG_TZ, v)?;
        }
        Ok(cfg)
    }

    /// Color is used only if enabled in config and stdout is a terminal.
    pub fn should_use_color(&self) -> bool {
        self.use_color && std::io::stdout().is_terminal()
    }
}

fn parse_var<T>(var: &'static str, value: String) -> LoggerResult<T>
where
    T: FromStr<Err = LoggerError>,
{
    value.parse().map_err(|e| LoggerError::Env {
        var,
        value,
        source: Box::new(e),
    })
}
