use std::cell::RefCell;

use crate::domain::{AppError, CourseId, UserName};
use crate::ports::EnrollmentStore;

/// Enrollment store that loads a fixed list and refuses every save.
#[derive(Default)]
pub struct FailingEnrollmentStore {
    pub existing: Vec<CourseId>,
    pub save_attempts: RefCell<usize>,
}

impl EnrollmentStore for FailingEnrollmentStore {
    fn load(&self, _user: &UserName) -> Result<Vec<CourseId>, AppError> {
        Ok(self.existing.clone())
    }

    fn save(&self, _user: &UserName, _courses: &[CourseId]) -> Result<(), AppError> {
        *self.save_attempts.borrow_mut() += 1;
        Err(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only store").into())
    }
}
