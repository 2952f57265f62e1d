//! Catalog source port definition.

use crate::domain::{AppError, CourseRegistry};

/// Supplies course registry snapshots.
///
/// Each call to [`load`](CatalogSource::load) produces a fresh registry;
/// sources never hand out a registry that they mutate later.
pub trait CatalogSource {
    fn load(&self) -> Result<CourseRegistry, AppError>;
}
