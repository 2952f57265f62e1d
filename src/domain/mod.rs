pub mod catalog;
pub mod catalog_format;
pub mod config;
pub mod course;
pub mod course_id;
pub mod cycle;
pub mod dependency_graph;
pub mod error;
pub mod registry;
pub mod resolver;
pub mod user_name;
pub mod validation;

pub use catalog::{Catalog, CatalogReport};
pub use catalog_format::{default_registry, parse_catalog};
pub use config::{CONFIG_FILE, CourseplanConfig};
pub use course::CourseRecord;
pub use course_id::CourseId;
pub use cycle::{Cycle, CycleDetector};
pub use dependency_graph::{DanglingReference, DependencyGraph, NodeIndex, Subgraph};
pub use error::AppError;
pub use registry::CourseRegistry;
pub use resolver::{
    CourseStatus, PrerequisiteResolver, Resolution, ResolvedCourse, ResolverOptions,
};
pub use user_name::UserName;
