//! Resolve command - computes the study order for a course.

use crate::app::AppContext;
use crate::domain::{AppError, Resolution};
use crate::ports::{CatalogSource, EnrollmentStore};

/// Execute the resolve command.
///
/// `strict` forces strict handling of dangling prerequisites regardless of
/// configuration.
pub fn execute<C: CatalogSource, E: EnrollmentStore>(
    ctx: &AppContext<C, E>,
    course: &str,
    strict: bool,
) -> Result<Resolution, AppError> {
    let catalog = ctx.load_catalog()?;
    catalog.resolve(course, ctx.resolver_options(strict))
}
