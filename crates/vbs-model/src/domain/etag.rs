use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque concurrency token bound to one observed state of a volume.
///
/// The backend hands it out on lookup and accepts a conditional update only
/// while the volume is still in that state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Etag(String);

impl Etag {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Etag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Etag {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Etag {
    fn from(s: String) -> Self {
        Self(s)
    }
}
