//! Learning path command - shows a user's enrolled courses.

use tracing::warn;

use crate::app::AppContext;
use crate::domain::{AppError, CourseStatus, ResolvedCourse, UserName};
use crate::ports::{CatalogSource, EnrollmentStore};

/// A user's enrolled courses in the order they were enrolled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LearningPath {
    pub user: UserName,
    /// Entries marked unknown are not in the catalog, or the catalog could
    /// not be read.
    pub courses: Vec<ResolvedCourse>,
}

/// Execute the path command.
///
/// The stored list is always returned; a catalog that fails to load only
/// leaves every entry's status unknown.
pub fn execute<C: CatalogSource, E: EnrollmentStore>(
    ctx: &AppContext<C, E>,
    user: &str,
) -> Result<LearningPath, AppError> {
    let user = UserName::new(user)?;
    let enrolled = ctx.enrollments().load(&user)?;

    let catalog = match ctx.load_catalog() {
        Ok(catalog) => Some(catalog),
        Err(err) => {
            warn!(%user, error = %err, "catalog unavailable, enrollment status unknown");
            None
        }
    };

    let courses = enrolled
        .into_iter()
        .map(|id| {
            let registered = catalog.as_ref().is_some_and(|c| c.registry().contains(id.as_str()));
            let status = if registered { CourseStatus::Registered } else { CourseStatus::Unknown };
            ResolvedCourse { id, status }
        })
        .collect();

    Ok(LearningPath { user, courses })
}
