use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use crate::domain::{AppError, CourseId, CourseRegistry, UserName};
use crate::ports::{CatalogSource, EnrollmentStore};

/// Catalog source serving a fixed registry.
#[derive(Debug, Clone)]
pub struct MemoryCatalog {
    registry: CourseRegistry,
}

impl MemoryCatalog {
    pub fn new(registry: CourseRegistry) -> Self {
        Self { registry }
    }
}

impl CatalogSource for MemoryCatalog {
    fn load(&self) -> Result<CourseRegistry, AppError> {
        Ok(self.registry.clone())
    }
}

/// In-memory enrollment store.
#[derive(Debug, Clone, Default)]
pub struct MemoryEnrollmentStore {
    // Arc<Mutex> so clones observe the same state
    enrollments: Arc<Mutex<HashMap<UserName, Vec<CourseId>>>>,
    saves: Arc<Mutex<usize>>,
}

impl MemoryEnrollmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `save` calls so far.
    pub fn save_count(&self) -> usize {
        *self.saves.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl EnrollmentStore for MemoryEnrollmentStore {
    fn load(&self, user: &UserName) -> Result<Vec<CourseId>, AppError> {
        let enrollments = self.enrollments.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(enrollments.get(user).cloned().unwrap_or_default())
    }

    fn save(&self, user: &UserName, courses: &[CourseId]) -> Result<(), AppError> {
        let mut enrollments = self.enrollments.lock().unwrap_or_else(PoisonError::into_inner);
        enrollments.insert(user.clone(), courses.to_vec());
        *self.saves.lock().unwrap_or_else(PoisonError::into_inner) += 1;
        Ok(())
    }
}
