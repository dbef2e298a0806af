use serde::{Deserialize, Serialize};

use crate::UserTags;

/// Partial update sent with a conditional write.
///
/// Carries the complete tag list the volume should end up with.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct VolumePatch {
    pub user_tags: UserTags,
}

impl VolumePatch {
    pub fn with_tags(user_tags: UserTags) -> Self {
        Self { user_tags }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_only_tags() {
        let p = VolumePatch::with_tags(UserTags::from(vec!["a", "b"]));
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, r#"{"user_tags":["a","b"]}"#);
    }
}
