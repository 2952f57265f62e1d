mod catalog_source;
mod enrollment_store;

pub use catalog_source::CatalogSource;
pub use enrollment_store::EnrollmentStore;
