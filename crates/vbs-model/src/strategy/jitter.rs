use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{ModelError, ModelResult};

/// Controls how random jitter is applied to retry gaps.
///
/// Jitter spreads retries of many callers over time so that a burst of
/// conflicting tag updates does not hammer the backend in lockstep.
///
/// The math lives in the retry policy of `vbs-core`; this enum only names it.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum JitterStrategy {
    /// Gaps stay exactly as computed by the backoff.
    #[default]
    None,
    /// Gap is uniformly sampled from `[0, base]`.
    Full,
    /// Gap is `base / 2` plus a uniform sample from `[0, base / 2]`.
    Equal,
    /// Gap is sampled from `[first, base * 3]` and clamped to the maximum.
    Decorrelated,
}

impl FromStr for JitterStrategy {
    type Err = ModelError;
    fn from_str(s: &str) -> ModelResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "none" => Ok(JitterStrategy::None),
            "full" => Ok(JitterStrategy::Full),
            "equal" => Ok(JitterStrategy::Equal),
            "decorrelated" => Ok(JitterStrategy::Decorrelated),
            other => Err(ModelError::UnknownJitter(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_names() {
        assert_eq!("".parse::<JitterStrategy>().unwrap(), JitterStrategy::None);
        assert_eq!(" Full ".parse::<JitterStrategy>().unwrap(), JitterStrategy::Full);
        assert_eq!("EQUAL".parse::<JitterStrategy>().unwrap(), JitterStrategy::Equal);
        assert_eq!(
            "decorrelated".parse::<JitterStrategy>().unwrap(),
            JitterStrategy::Decorrelated
        );
    }

    #[test]
    fn rejects_unknown() {
        let err = "gaussian".parse::<JitterStrategy>().unwrap_err();
        assert!(matches!(err, ModelError::UnknownJitter(s) if s == "gaussian"));
    }
}
