//! Course catalog records.

use serde::Serialize;

use super::CourseId;

/// A course definition as loaded from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseRecord {
    /// Course identifier (unique within a registry).
    pub id: CourseId,
    /// Human-readable description. Empty when the catalog omits it.
    pub description: String,
    /// Courses that must be completed first, in catalog order.
    pub prerequisites: Vec<CourseId>,
}

impl CourseRecord {
    pub fn new<I, P>(id: impl Into<CourseId>, description: impl Into<String>, prerequisites: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<CourseId>,
    {
        Self {
            id: id.into(),
            description: description.into(),
            prerequisites: prerequisites.into_iter().map(Into::into).collect(),
        }
    }

    /// Description for display, falling back to a placeholder.
    pub fn display_description(&self) -> &str {
        if self.description.is_empty() { "No description" } else { &self.description }
    }
}
