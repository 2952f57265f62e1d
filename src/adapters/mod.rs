pub mod catalog_filesystem;
pub mod enrollment_filesystem;
pub mod memory_stores;

pub use catalog_filesystem::JsonFileCatalog;
pub use enrollment_filesystem::FilesystemEnrollmentStore;
pub use memory_stores::{MemoryCatalog, MemoryEnrollmentStore};
