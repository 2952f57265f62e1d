//! Prerequisite resolution.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use serde::Serialize;
use tracing::{debug, warn};

use super::cycle::CycleDetector;
use super::dependency_graph::{DependencyGraph, Subgraph};
use super::{AppError, CourseId, CourseRegistry};

/// Options recognized by [`PrerequisiteResolver`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolverOptions {
    /// Fail on the first dangling prerequisite instead of tagging it.
    pub strict_unknown_courses: bool,
}

/// Whether a resolved course exists in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CourseStatus {
    Registered,
    /// Referenced as a prerequisite but missing from the catalog.
    Unknown,
}

/// One step of a resolved study order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedCourse {
    pub id: CourseId,
    pub status: CourseStatus,
}

impl ResolvedCourse {
    pub fn is_unknown(&self) -> bool {
        self.status == CourseStatus::Unknown
    }
}

/// Order in which a target course and its prerequisites can be taken.
///
/// Every course appears once, each prerequisite before the courses that
/// need it, and the target last.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub target: CourseId,
    pub courses: Vec<ResolvedCourse>,
}

impl Resolution {
    pub fn ids(&self) -> impl Iterator<Item = &CourseId> {
        self.courses.iter().map(|c| &c.id)
    }

    /// Course names in order.
    pub fn names(&self) -> Vec<String> {
        self.ids().map(|id| id.to_string()).collect()
    }

    /// Dangling prerequisites included in the order.
    pub fn unknown(&self) -> impl Iterator<Item = &CourseId> {
        self.courses.iter().filter(|c| c.is_unknown()).map(|c| &c.id)
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}

/// Resolves the study order for a course against one catalog snapshot.
///
/// Holds no state of its own; every call is a pure function of the borrowed
/// registry, graph, and options.
#[derive(Debug, Clone, Copy)]
pub struct PrerequisiteResolver<'a> {
    registry: &'a CourseRegistry,
    graph: &'a DependencyGraph,
    options: ResolverOptions,
}

impl<'a> PrerequisiteResolver<'a> {
    /// `graph` must have been built from `registry`.
    pub fn new(
        registry: &'a CourseRegistry,
        graph: &'a DependencyGraph,
        options: ResolverOptions,
    ) -> Self {
        Self { registry, graph, options }
    }

    /// Resolve `target` and its transitive prerequisites into a study order.
    ///
    /// Only the target's ancestors take part; unrelated catalog entries
    /// never appear in the result. Fails with
    /// [`AppError::UnknownCourse`] when the target has no record, and with
    /// [`AppError::CycleDetected`] when its prerequisites loop.
    pub fn resolve(&self, target: &str) -> Result<Resolution, AppError> {
        if !self.registry.contains(target) {
            return Err(AppError::UnknownCourse(CourseId::from(target)));
        }
        let subgraph = self
            .graph
            .ancestors_of(target)
            .ok_or_else(|| AppError::UnknownCourse(CourseId::from(target)))?;

        if let Some(cycle) = CycleDetector::find_cycle(&subgraph) {
            debug!(%target, %cycle, "prerequisites loop");
            return Err(AppError::CycleDetected(cycle));
        }

        let courses = self.order(&subgraph)?;
        debug!(%target, courses = courses.len(), "resolved prerequisites");
        Ok(Resolution { target: CourseId::from(target), courses })
    }

    /// Kahn's algorithm, always releasing the earliest-registered ready node.
    fn order(&self, subgraph: &Subgraph<'_>) -> Result<Vec<ResolvedCourse>, AppError> {
        // Indexed by subgraph position.
        let mut in_degree: Vec<usize> =
            subgraph.nodes().iter().map(|&node| subgraph.prerequisites(node).count()).collect();

        let mut ready: BinaryHeap<_> = subgraph
            .nodes()
            .iter()
            .zip(&in_degree)
            .filter(|&(_, &degree)| degree == 0)
            .map(|(&node, _)| Reverse(node))
            .collect();

        let mut courses = Vec::with_capacity(subgraph.len());
        while let Some(Reverse(node)) = ready.pop() {
            let id = self.graph.id(node);
            let status = if self.graph.is_registered(node) {
                CourseStatus::Registered
            } else if self.options.strict_unknown_courses {
                return Err(AppError::UnknownCourse(id.clone()));
            } else {
                warn!(course = %id, "prerequisite is not in the catalog");
                CourseStatus::Unknown
            };
            courses.push(ResolvedCourse { id: id.clone(), status });

            for dependent in subgraph.dependents(node) {
                let Some(pos) = subgraph.position(dependent) else {
                    continue;
                };
                in_degree[pos] -= 1;
                if in_degree[pos] == 0 {
                    ready.push(Reverse(dependent));
                }
            }
        }

        if courses.len() != subgraph.len() {
            let cycle = CycleDetector::find_cycle(subgraph).unwrap_or_default();
            return Err(AppError::CycleDetected(cycle));
        }

        Ok(courses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CourseRecord;
    use proptest::prelude::*;
    use std::collections::HashMap;

    fn registry(entries: &[(&str, &[&str])]) -> CourseRegistry {
        CourseRegistry::from_records(
            entries.iter().map(|(id, prereqs)| CourseRecord::new(*id, "", prereqs.iter().copied())),
        )
        .unwrap()
    }

    fn resolve_with(
        entries: &[(&str, &[&str])],
        target: &str,
        options: ResolverOptions,
    ) -> Result<Resolution, AppError> {
        let registry = registry(entries);
        let graph = DependencyGraph::build_from(&registry);
        PrerequisiteResolver::new(&registry, &graph, options).resolve(target)
    }

    fn resolve(entries: &[(&str, &[&str])], target: &str) -> Result<Resolution, AppError> {
        resolve_with(entries, target, ResolverOptions::default())
    }

    #[test]
    fn course_without_prerequisites_resolves_to_itself() {
        let resolution = resolve(&[("Python Basics", &[])], "Python Basics").unwrap();
        assert_eq!(resolution.names(), ["Python Basics"]);
    }

    #[test]
    fn chain_resolves_in_order() {
        let resolution = resolve(
            &[
                ("Python Basics", &[]),
                ("Data Structures", &["Python Basics"]),
                ("Algorithms", &["Data Structures"]),
            ],
            "Algorithms",
        )
        .unwrap();

        assert_eq!(resolution.names(), ["Python Basics", "Data Structures", "Algorithms"]);
        assert_eq!(resolution.target.as_str(), "Algorithms");
    }

    #[test]
    fn diamond_uses_registration_order_for_ties() {
        let entries: &[(&str, &[&str])] = &[("A", &[]), ("B", &["A"]), ("C", &["A"]), ("D", &["B", "C"])];
        assert_eq!(resolve(entries, "D").unwrap().names(), ["A", "B", "C", "D"]);

        let swapped: &[(&str, &[&str])] = &[("A", &[]), ("C", &["A"]), ("B", &["A"]), ("D", &["B", "C"])];
        assert_eq!(resolve(swapped, "D").unwrap().names(), ["A", "C", "B", "D"]);
    }

    #[test]
    fn tie_break_ignores_prerequisite_list_order() {
        let entries: &[(&str, &[&str])] = &[("A", &[]), ("B", &[]), ("C", &["B", "A"])];
        assert_eq!(resolve(entries, "C").unwrap().names(), ["A", "B", "C"]);
    }

    #[test]
    fn only_ancestors_of_target_are_returned() {
        let entries: &[(&str, &[&str])] = &[
            ("Intro", &[]),
            ("Python Basics", &[]),
            ("Data Structures", &["Python Basics"]),
            ("Compilers", &["Data Structures"]),
        ];
        assert_eq!(resolve(entries, "Data Structures").unwrap().names(), ["Python Basics", "Data Structures"]);
    }

    #[test]
    fn unknown_target_is_rejected() {
        let result = resolve(&[("A", &[])], "NoSuchCourse");
        assert!(matches!(result, Err(AppError::UnknownCourse(id)) if id.as_str() == "NoSuchCourse"));
    }

    #[test]
    fn dangling_node_is_not_a_valid_target() {
        let result = resolve(&[("ML", &["Statistics"])], "Statistics");
        assert!(matches!(result, Err(AppError::UnknownCourse(id)) if id.as_str() == "Statistics"));
    }

    #[test]
    fn two_course_cycle_is_reported() {
        let cycle = match resolve(&[("A", &["B"]), ("B", &["A"])], "A") {
            Err(AppError::CycleDetected(cycle)) => cycle,
            other => panic!("expected a cycle, got {:?}", other),
        };
        let mut members: Vec<_> = cycle.courses().iter().map(CourseId::as_str).collect();
        members.sort();
        assert_eq!(members, ["A", "B"]);
    }

    #[test]
    fn self_prerequisite_is_a_cycle() {
        let result = resolve(&[("A", &["A"])], "A");
        assert!(matches!(result, Err(AppError::CycleDetected(cycle)) if cycle.len() == 1));
    }

    #[test]
    fn cycle_elsewhere_does_not_block_resolution() {
        let entries: &[(&str, &[&str])] = &[("A", &[]), ("B", &["A"]), ("X", &["Y"]), ("Y", &["X"])];
        assert_eq!(resolve(entries, "B").unwrap().names(), ["A", "B"]);
    }

    #[test]
    fn dangling_prerequisites_are_tagged_unknown() {
        let entries: &[(&str, &[&str])] = &[
            ("Python Basics", &[]),
            ("Data Structures", &["Python Basics"]),
            ("Machine Learning", &["Python Basics", "Data Structures", "Statistics"]),
        ];
        let resolution = resolve(entries, "Machine Learning").unwrap();

        assert_eq!(
            resolution.names(),
            ["Python Basics", "Data Structures", "Statistics", "Machine Learning"]
        );
        let unknown: Vec<_> = resolution.unknown().map(CourseId::as_str).collect();
        assert_eq!(unknown, ["Statistics"]);
    }

    #[test]
    fn strict_mode_rejects_dangling_prerequisites() {
        let entries: &[(&str, &[&str])] = &[("ML", &["Statistics", "Linear Algebra"])];
        let strict = ResolverOptions { strict_unknown_courses: true };

        let result = resolve_with(entries, "ML", strict);
        assert!(matches!(result, Err(AppError::UnknownCourse(id)) if id.as_str() == "Statistics"));
    }

    #[test]
    fn strict_mode_accepts_fully_known_catalogs() {
        let entries: &[(&str, &[&str])] = &[("A", &[]), ("B", &["A"])];
        let strict = ResolverOptions { strict_unknown_courses: true };
        assert_eq!(resolve_with(entries, "B", strict).unwrap().names(), ["A", "B"]);
    }

    #[test]
    fn resolution_is_idempotent() {
        let registry = registry(&[("A", &[]), ("B", &["A"]), ("C", &["A"]), ("D", &["C", "B"])]);
        let graph = DependencyGraph::build_from(&registry);
        let resolver = PrerequisiteResolver::new(&registry, &graph, ResolverOptions::default());

        assert_eq!(resolver.resolve("D").unwrap(), resolver.resolve("D").unwrap());
    }

    #[test]
    fn isolated_course_in_large_catalog_resolves_alone() {
        let ids: Vec<String> = (0..200_000).map(|i| format!("c{i}")).collect();
        let registry = CourseRegistry::from_records(
            ids.iter().map(|id| CourseRecord::new(id.as_str(), "", Vec::<&str>::new())),
        )
        .unwrap();
        let graph = DependencyGraph::build_from(&registry);
        let resolver = PrerequisiteResolver::new(&registry, &graph, ResolverOptions::default());

        for _ in 0..200 {
            assert_eq!(resolver.resolve("c0").unwrap().names(), ["c0"]);
        }
        let subgraph = graph.ancestors_of("c199999").unwrap();
        assert_eq!(subgraph.len(), 1);
    }

    // Strategy: course i may only require courses with a smaller index, so the
    // catalog is acyclic; registration order is then shuffled by reversing.
    fn acyclic_catalog_strategy() -> impl Strategy<Value = (Vec<(String, Vec<String>)>, usize)> {
        (1usize..12)
            .prop_flat_map(|size| {
                let deps = (0..size)
                    .map(|i| prop::collection::vec(0..i.max(1), 0..=i.min(3)))
                    .collect::<Vec<_>>();
                (Just(size), deps, 0..size, any::<bool>())
            })
            .prop_map(|(size, deps, target, reverse)| {
                let mut entries: Vec<(String, Vec<String>)> = (0..size)
                    .map(|i| {
                        let prereqs = deps[i]
                            .iter()
                            .filter(|&&d| d < i)
                            .map(|d| format!("c{d}"))
                            .collect();
                        (format!("c{i}"), prereqs)
                    })
                    .collect();
                if reverse {
                    entries.reverse();
                }
                (entries, target)
            })
    }

    proptest! {
        #[test]
        fn resolved_order_respects_every_edge((entries, target) in acyclic_catalog_strategy()) {
            let registry = CourseRegistry::from_records(
                entries.iter().map(|(id, prereqs)| CourseRecord::new(id.as_str(), "", prereqs.iter().map(String::as_str))),
            )
            .unwrap();
            let graph = DependencyGraph::build_from(&registry);
            let resolver = PrerequisiteResolver::new(&registry, &graph, ResolverOptions::default());
            let target = format!("c{target}");

            let resolution = resolver.resolve(&target).unwrap();
            let position: HashMap<&str, usize> =
                resolution.ids().enumerate().map(|(i, id)| (id.as_str(), i)).collect();

            // No duplicates.
            prop_assert_eq!(position.len(), resolution.len());
            // Target last.
            prop_assert_eq!(resolution.ids().last().map(CourseId::as_str), Some(target.as_str()));
            // Every prerequisite of a resolved course precedes it.
            for id in resolution.ids() {
                for prereq in registry.prerequisites_of(id.as_str()) {
                    let before = position.get(prereq.as_str());
                    prop_assert!(before.is_some());
                    prop_assert!(before < position.get(id.as_str()));
                }
            }
            // Same answer twice.
            prop_assert_eq!(resolver.resolve(&target).unwrap(), resolution);
        }
    }
}
