//! Enrollment store port definition.

use crate::domain::{AppError, CourseId, UserName};

/// Persists per-user enrollment lists.
pub trait EnrollmentStore {
    /// Enrolled courses in enrollment order. Users without data have none.
    fn load(&self, user: &UserName) -> Result<Vec<CourseId>, AppError>;

    /// Replace the stored list for `user`.
    fn save(&self, user: &UserName, courses: &[CourseId]) -> Result<(), AppError>;
}
