use crate::domain::{AppError, CourseRegistry};
use crate::ports::CatalogSource;

/// Catalog source whose document never parses.
pub struct FailingCatalog;

impl CatalogSource for FailingCatalog {
    fn load(&self) -> Result<CourseRegistry, AppError> {
        Err(AppError::parse_error("course catalog", "expected value at line 1 column 3"))
    }
}
