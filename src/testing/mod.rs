mod failing_catalog;
mod failing_enrollment_store;

pub use failing_catalog::FailingCatalog;
pub use failing_enrollment_store::FailingEnrollmentStore;

use crate::adapters::{MemoryCatalog, MemoryEnrollmentStore};
use crate::app::AppContext;
use crate::domain::{CourseRecord, CourseRegistry, CourseplanConfig};

/// Build a registry from `(course, prerequisites)` pairs in the given order.
pub fn registry(entries: &[(&str, &[&str])]) -> CourseRegistry {
    CourseRegistry::from_records(entries.iter().map(|(id, prereqs)| {
        CourseRecord::new(*id, format!("{} course", id), prereqs.iter().copied())
    }))
    .expect("test registry has unique ids")
}

/// Context backed by in-memory adapters.
pub fn memory_context(
    entries: &[(&str, &[&str])],
) -> AppContext<MemoryCatalog, MemoryEnrollmentStore> {
    AppContext::new(
        MemoryCatalog::new(registry(entries)),
        MemoryEnrollmentStore::new(),
        CourseplanConfig::default(),
    )
}
