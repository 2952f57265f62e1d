//! courseplan: resolve course prerequisite order and manage per-user enrollments.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    CheckOutcome, CourseDetail, CourseSummary, EnrollOutcome, LearningPath, check, check_at,
    course_detail, course_detail_at, enroll, enroll_at, learning_path, learning_path_at, list,
    list_at, resolve, resolve_at,
};
pub use domain::{
    AppError, Catalog, CatalogReport, CourseId, CourseRecord, CourseRegistry, CourseStatus, Cycle,
    CycleDetector, DependencyGraph, PrerequisiteResolver, Resolution, ResolvedCourse,
    ResolverOptions,
};
