use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::TagMatch;

/// Ordered list of user tags attached to a volume.
///
/// Order and case are preserved as stored by the backend. Comparison is
/// case-insensitive and controlled by [`TagMatch`].
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserTags(pub Vec<String>);

impl UserTags {
    /// Create an empty tag list.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Append a single tag as-is.
    pub fn push(&mut self, tag: impl Into<String>) {
        self.0.push(tag.into());
    }

    /// Returns `true` when every tag in `requested` is already represented here.
    ///
    /// With [`TagMatch::Substring`] the existing tags are lower-cased and joined
    /// with `,`; a requested tag counts as present if it occurs anywhere in that
    /// string. This accepts `"env:prod"` against `"env:production"` and `"a,b"`
    /// against `["a", "b"]`.
    ///
    /// With [`TagMatch::Exact`] each requested tag must equal one existing tag,
    /// ignoring case.
    ///
    /// An empty `requested` list is always covered.
    ///
    /// # Examples
    ///
    /// ```
    /// use vbs_model::{TagMatch, UserTags};
    ///
    /// let existing = UserTags::from(vec!["Env:Production"]);
    /// let requested = UserTags::from(vec!["env:prod"]);
    ///
    /// assert!(existing.covers(&requested, TagMatch::Substring));
    /// assert!(!existing.covers(&requested, TagMatch::Exact));
    /// ```
    pub fn covers(&self, requested: &UserTags, mode: TagMatch) -> bool {
        match mode {
            TagMatch::Substring => {
                let joined = self.0.join(",").to_lowercase();
                requested
                    .iter()
                    .all(|tag| joined.contains(tag.to_lowercase().as_str()))
            }
            TagMatch::Exact => {
                let existing: HashSet<String> = self.iter().map(str::to_lowercase).collect();
                requested
                    .iter()
                    .all(|tag| existing.contains(&tag.to_lowercase()))
            }
        }
    }

    /// Concatenate `other` onto a copy of `self`.
    ///
    /// Nothing is deduplicated: tags from `other` that already exist here are
    /// appended again.
    pub fn merged(&self, other: &UserTags) -> UserTags {
        let mut out = self.0.clone();
        out.extend(other.0.iter().cloned());
        UserTags(out)
    }
}

impl From<Vec<String>> for UserTags {
    fn from(v: Vec<String>) -> Self {
        Self(v)
    }
}

impl From<Vec<&str>> for UserTags {
    fn from(v: Vec<&str>) -> Self {
        Self(v.into_iter().map(str::to_string).collect())
    }
}

impl<S: Into<String>> FromIterator<S> for UserTags {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(v: &[&str]) -> UserTags {
        v.iter().copied().collect()
    }

    #[test]
    fn exact_match_is_covered() {
        let existing = tags(&["env:prod"]);
        assert!(existing.covers(&tags(&["env:prod"]), TagMatch::Substring));
        assert!(existing.covers(&tags(&["env:prod"]), TagMatch::Exact));
    }

    #[test]
    fn comparison_ignores_case() {
        let existing = tags(&["Team:X", "env:prod"]);
        assert!(existing.covers(&tags(&["team:x", "ENV:PROD"]), TagMatch::Substring));
        assert!(existing.covers(&tags(&["team:x", "ENV:PROD"]), TagMatch::Exact));
    }

    #[test]
    fn one_missing_tag_is_not_covered() {
        let existing = tags(&["a", "b"]);
        assert!(!existing.covers(&tags(&["b", "c"]), TagMatch::Substring));
        assert!(!existing.covers(&tags(&["b", "c"]), TagMatch::Exact));
    }

    #[test]
    fn empty_request_is_always_covered() {
        assert!(UserTags::new().covers(&UserTags::new(), TagMatch::Substring));
        assert!(tags(&["a"]).covers(&UserTags::new(), TagMatch::Exact));
    }

    #[test]
    fn substring_accepts_prefix_of_longer_tag() {
        let existing = tags(&["env:production"]);
        assert!(existing.covers(&tags(&["env:prod"]), TagMatch::Substring));
        assert!(!existing.covers(&tags(&["env:prod"]), TagMatch::Exact));
    }

    #[test]
    fn substring_matches_across_join_boundary() {
        let existing = tags(&["a", "b"]);
        assert!(existing.covers(&tags(&["a,b"]), TagMatch::Substring));
        assert!(!existing.covers(&tags(&["a,b"]), TagMatch::Exact));
    }

    #[test]
    fn merged_appends_everything_in_order() {
        let merged = tags(&["a", "b"]).merged(&tags(&["b", "c"]));
        assert_eq!(merged, tags(&["a", "b", "b", "c"]));
    }

    #[test]
    fn merged_preserves_case() {
        let merged = tags(&["env:prod"]).merged(&tags(&["Team:X"]));
        assert_eq!(merged.0, vec!["env:prod".to_string(), "Team:X".to_string()]);
    }

    #[test]
    fn serde_is_plain_array() {
        let t = tags(&["x", "y"]);
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, r#"["x","y"]"#);

        let back: UserTags = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);
    }
}
