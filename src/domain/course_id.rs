use std::borrow::Borrow;

use serde::{Deserialize, Serialize};

/// An opaque course identifier.
///
/// Identifiers compare by exact string equality. No trimming, case folding,
/// or character validation is applied; whatever the catalog names a course is
/// its identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseId(String);

impl CourseId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Return the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CourseId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for CourseId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl AsRef<str> for CourseId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Borrow<str> for CourseId {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for CourseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
