//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution. Functions without a suffix operate on the current
//! directory; the `_at` variants take an explicit root.

use std::path::Path;

use crate::adapters::{FilesystemEnrollmentStore, JsonFileCatalog};
use crate::app::config::load_config;
use crate::app::{
    AppContext,
    commands::{check, enroll, learning_path, list, resolve},
};

pub use crate::app::commands::check::CheckOutcome;
pub use crate::app::commands::enroll::EnrollOutcome;
pub use crate::app::commands::learning_path::LearningPath;
pub use crate::app::commands::list::{CourseDetail, CourseSummary};
pub use crate::domain::{AppError, Resolution};

/// Create an `AppContext` for a given root, honoring `courseplan.toml`.
fn create_context(
    root: &Path,
) -> Result<AppContext<JsonFileCatalog, FilesystemEnrollmentStore>, AppError> {
    let config = load_config(root)?;
    let catalog = JsonFileCatalog::new(root.join(&config.catalog.path));
    let enrollments = FilesystemEnrollmentStore::new(root.join(&config.enrollment.dir));
    Ok(AppContext::new(catalog, enrollments, config))
}

/// List every course in the catalog of the current directory.
pub fn list() -> Result<Vec<CourseSummary>, AppError> {
    list_at(&std::env::current_dir()?)
}

/// List every course in the catalog at the specified root.
pub fn list_at(root: &Path) -> Result<Vec<CourseSummary>, AppError> {
    list::execute(&create_context(root)?)
}

/// Show details for one course.
pub fn course_detail(course: &str) -> Result<CourseDetail, AppError> {
    course_detail_at(&std::env::current_dir()?, course)
}

pub fn course_detail_at(root: &Path, course: &str) -> Result<CourseDetail, AppError> {
    list::execute_detail(&create_context(root)?, course)
}

/// Resolve the study order for `course`.
///
/// `strict` forces strict handling of dangling prerequisites for this call.
pub fn resolve(course: &str, strict: bool) -> Result<Resolution, AppError> {
    resolve_at(&std::env::current_dir()?, course, strict)
}

pub fn resolve_at(root: &Path, course: &str, strict: bool) -> Result<Resolution, AppError> {
    resolve::execute(&create_context(root)?, course, strict)
}

/// Enroll `user` in `course` and all of its prerequisites.
pub fn enroll(user: &str, course: &str, strict: bool) -> Result<EnrollOutcome, AppError> {
    enroll_at(&std::env::current_dir()?, user, course, strict)
}

pub fn enroll_at(
    root: &Path,
    user: &str,
    course: &str,
    strict: bool,
) -> Result<EnrollOutcome, AppError> {
    enroll::execute(&create_context(root)?, user, course, strict)
}

/// Show the courses `user` is enrolled in.
pub fn learning_path(user: &str) -> Result<LearningPath, AppError> {
    learning_path_at(&std::env::current_dir()?, user)
}

pub fn learning_path_at(root: &Path, user: &str) -> Result<LearningPath, AppError> {
    learning_path::execute(&create_context(root)?, user)
}

/// Validate the whole catalog.
pub fn check(strict: bool) -> Result<CheckOutcome, AppError> {
    check_at(&std::env::current_dir()?, strict)
}

pub fn check_at(root: &Path, strict: bool) -> Result<CheckOutcome, AppError> {
    check::execute(&create_context(root)?, strict)
}
