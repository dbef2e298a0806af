use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{ModelError, ModelResult};

/// How requested tags are compared against the tags a volume already has.
///
/// Both modes are case-insensitive. See [`crate::UserTags::covers`].
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TagMatch {
    /// Requested tag is a substring of the comma-joined existing tags.
    ///
    /// Loose: a tag that is part of a longer one, or that spans two
    /// neighbours, is treated as present and no write happens.
    #[default]
    Substring,
    /// Requested tag equals one of the existing tags.
    Exact,
}

impl FromStr for TagMatch {
    type Err = ModelError;
    fn from_str(s: &str) -> ModelResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "substring" | "contains" => Ok(TagMatch::Substring),
            "exact" => Ok(TagMatch::Exact),
            other => Err(ModelError::UnknownTagMatch(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_substring() {
        assert_eq!(TagMatch::default(), TagMatch::Substring);
    }

    #[test]
    fn parse_and_serde() {
        assert_eq!("Exact".parse::<TagMatch>().unwrap(), TagMatch::Exact);
        assert_eq!("contains".parse::<TagMatch>().unwrap(), TagMatch::Substring);
        assert!("fuzzy".parse::<TagMatch>().is_err());

        let json = serde_json::to_string(&TagMatch::Exact).unwrap();
        assert_eq!(json, "\"exact\"");
    }
}
