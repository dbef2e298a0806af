use serde::{Deserialize, Serialize};
use thiserror::Error;
use vbs_model::{RetryStrategy, TagMatch};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid session config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Session configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SessionConfig {
    /// Retry policy wrapped around every read-merge-write cycle.
    pub retry: RetryStrategy,
    /// How requested tags are compared with existing ones.
    pub tag_match: TagMatch,
}

impl SessionConfig {
    /// Parse a JSON document. Missing fields take their defaults.
    ///
    /// # Examples
    ///
    /// ```
    /// use vbs_core::SessionConfig;
    /// use vbs_model::TagMatch;
    ///
    /// let cfg = SessionConfig::from_json(r#"{ "tagMatch": "exact" }"#).unwrap();
    /// assert_eq!(cfg.tag_match, TagMatch::Exact);
    /// assert_eq!(cfg.retry.min_attempts, 3);
    ///
    /// assert!(SessionConfig::from_json("[]").is_err());
    /// ```
    pub fn from_json(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(s)?)
    }
}
