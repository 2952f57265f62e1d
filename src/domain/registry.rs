//! Immutable course registry.

use std::collections::HashMap;

use super::{AppError, CourseId, CourseRecord};

/// Catalog snapshot mapping course identifiers to their records.
///
/// Records keep the order they were inserted in; that order is the
/// tie-break order used by graph construction, cycle detection, and
/// resolution. A registry is never mutated after construction; loading the
/// catalog again produces a new instance.
#[derive(Debug, Clone, Default)]
pub struct CourseRegistry {
    records: Vec<CourseRecord>,
    index: HashMap<CourseId, usize>,
}

impl CourseRegistry {
    /// Build a registry, rejecting repeated identifiers.
    pub fn from_records<I>(records: I) -> Result<Self, AppError>
    where
        I: IntoIterator<Item = CourseRecord>,
    {
        let mut registry = Self::default();
        for record in records {
            if registry.index.contains_key(&record.id) {
                return Err(AppError::DuplicateCourse(record.id));
            }
            registry.index.insert(record.id.clone(), registry.records.len());
            registry.records.push(record);
        }
        Ok(registry)
    }

    pub fn lookup(&self, id: &str) -> Option<&CourseRecord> {
        self.index.get(id).map(|&i| &self.records[i])
    }

    /// Prerequisites of a course, or an empty slice for unknown courses.
    pub fn prerequisites_of(&self, id: &str) -> &[CourseId] {
        self.lookup(id).map(|record| record.prerequisites.as_slice()).unwrap_or_default()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &CourseRecord> {
        self.records.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &CourseId> {
        self.records.iter().map(|record| &record.id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
