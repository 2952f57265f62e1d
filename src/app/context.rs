use crate::domain::{AppError, Catalog, CourseplanConfig, ResolverOptions};
use crate::ports::{CatalogSource, EnrollmentStore};

/// Application context holding dependencies for command execution.
pub struct AppContext<C: CatalogSource, E: EnrollmentStore> {
    catalog: C,
    enrollments: E,
    config: CourseplanConfig,
}

impl<C: CatalogSource, E: EnrollmentStore> AppContext<C, E> {
    /// Create a new application context.
    pub fn new(catalog: C, enrollments: E, config: CourseplanConfig) -> Self {
        Self { catalog, enrollments, config }
    }

    /// Get a reference to the catalog source.
    pub fn catalog_source(&self) -> &C {
        &self.catalog
    }

    /// Get a reference to the enrollment store.
    pub fn enrollments(&self) -> &E {
        &self.enrollments
    }

    pub fn config(&self) -> &CourseplanConfig {
        &self.config
    }

    /// Load a fresh catalog snapshot from the source.
    pub fn load_catalog(&self) -> Result<Catalog, AppError> {
        Ok(Catalog::new(self.catalog.load()?))
    }

    /// Resolver options from configuration; `strict` can only tighten them.
    pub fn resolver_options(&self, strict: bool) -> ResolverOptions {
        let mut options = self.config.resolver.options();
        options.strict_unknown_courses |= strict;
        options
    }
}
