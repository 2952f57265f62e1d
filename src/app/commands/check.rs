//! Check command - validates the whole catalog.

use crate::app::AppContext;
use crate::domain::{AppError, CatalogReport};
use crate::ports::{CatalogSource, EnrollmentStore};

/// Result of a catalog check, with the exit code the CLI should use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    pub report: CatalogReport,
    pub exit_code: i32,
}

/// Execute the check command.
///
/// A cycle always fails the check; dangling prerequisites fail it only
/// when `strict` is set.
pub fn execute<C: CatalogSource, E: EnrollmentStore>(
    ctx: &AppContext<C, E>,
    strict: bool,
) -> Result<CheckOutcome, AppError> {
    let report = ctx.load_catalog()?.validate();
    let failed = report.cycle.is_some() || (strict && !report.dangling.is_empty());
    Ok(CheckOutcome { report, exit_code: if failed { 1 } else { 0 } })
}
