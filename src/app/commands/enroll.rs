//! Enroll command - enrolls a user in a course and its prerequisites.

use tracing::{info, warn};

use crate::app::AppContext;
use crate::domain::{AppError, CourseId, Resolution, UserName};
use crate::ports::{CatalogSource, EnrollmentStore};

/// What an enrollment changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrollOutcome {
    pub user: UserName,
    pub resolution: Resolution,
    /// Courses added by this call, in study order.
    pub newly_enrolled: Vec<CourseId>,
    /// Resolved courses the user was already enrolled in.
    pub already_enrolled: Vec<CourseId>,
}

/// Execute the enroll command.
///
/// The course is resolved first; any resolution error aborts before the
/// stored list is touched. On success every resolved course not yet in the
/// user's list is appended in study order and the list is saved once.
pub fn execute<C: CatalogSource, E: EnrollmentStore>(
    ctx: &AppContext<C, E>,
    user: &str,
    course: &str,
    strict: bool,
) -> Result<EnrollOutcome, AppError> {
    let user = UserName::new(user)?;
    let catalog = ctx.load_catalog()?;
    let resolution = catalog.resolve(course, ctx.resolver_options(strict))?;

    let mut enrolled = ctx.enrollments().load(&user)?;
    let mut newly_enrolled = Vec::new();
    let mut already_enrolled = Vec::new();

    for entry in &resolution.courses {
        if enrolled.contains(&entry.id) {
            already_enrolled.push(entry.id.clone());
            continue;
        }
        if entry.is_unknown() {
            warn!(%user, course = %entry.id, "enrolling in a course missing from the catalog");
        }
        enrolled.push(entry.id.clone());
        newly_enrolled.push(entry.id.clone());
    }

    if !newly_enrolled.is_empty() {
        ctx.enrollments().save(&user, &enrolled)?;
        info!(%user, added = newly_enrolled.len(), "saved enrollments");
    }

    Ok(EnrollOutcome { user, resolution, newly_enrolled, already_enrolled })
}
