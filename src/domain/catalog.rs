//! Shared catalog snapshot.

use std::sync::Arc;

use super::cycle::CycleDetector;
use super::dependency_graph::DanglingReference;
use super::{
    AppError, CourseRegistry, Cycle, DependencyGraph, PrerequisiteResolver, Resolution,
    ResolverOptions,
};

/// A registry together with the dependency graph built from it.
///
/// Cloning is cheap and shares the same snapshot. Building a new `Catalog`
/// from a reloaded registry never affects existing clones, so resolutions
/// already running against an older snapshot see a consistent view.
#[derive(Debug, Clone)]
pub struct Catalog {
    registry: Arc<CourseRegistry>,
    graph: Arc<DependencyGraph>,
}

impl Catalog {
    pub fn new(registry: CourseRegistry) -> Self {
        let graph = DependencyGraph::build_from(&registry);
        Self { registry: Arc::new(registry), graph: Arc::new(graph) }
    }

    pub fn registry(&self) -> &CourseRegistry {
        &self.registry
    }

    pub fn graph(&self) -> &DependencyGraph {
        &self.graph
    }

    pub fn resolver(&self, options: ResolverOptions) -> PrerequisiteResolver<'_> {
        PrerequisiteResolver::new(&self.registry, &self.graph, options)
    }

    pub fn resolve(&self, target: &str, options: ResolverOptions) -> Result<Resolution, AppError> {
        self.resolver(options).resolve(target)
    }

    /// Check the whole catalog for dangling prerequisites and loops.
    pub fn validate(&self) -> CatalogReport {
        CatalogReport {
            courses: self.registry.len(),
            dangling: self.graph.dangling(),
            cycle: CycleDetector::find_cycle(&self.graph.full()),
        }
    }
}

/// Outcome of a whole-catalog check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogReport {
    pub courses: usize,
    pub dangling: Vec<DanglingReference>,
    /// First loop found across the whole catalog.
    pub cycle: Option<Cycle>,
}

impl CatalogReport {
    pub fn is_clean(&self) -> bool {
        self.dangling.is_empty() && self.cycle.is_none()
    }
}
