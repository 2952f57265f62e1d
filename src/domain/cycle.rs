//! Cycle detection over dependency subgraphs.

use std::fmt;

use serde::Serialize;

use super::dependency_graph::{NodeIndex, Subgraph};
use super::CourseId;

/// A dependency loop, listed in edge order.
///
/// Each course is a prerequisite of the next one, and the last course is a
/// prerequisite of the first. A course that requires itself is the
/// one-element cycle `[A]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Cycle(Vec<CourseId>);

impl Cycle {
    pub fn new(courses: Vec<CourseId>) -> Self {
        Self(courses)
    }

    pub fn courses(&self) -> &[CourseId] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.iter().any(|c| c.as_str() == id)
    }
}

impl fmt::Display for Cycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(first) = self.0.first() else {
            return Ok(());
        };
        for course in &self.0 {
            write!(f, "{} -> ", course)?;
        }
        write!(f, "{}", first)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VisitState {
    Unvisited,
    InProgress,
    Done,
}

/// Finds dependency loops in a subgraph.
pub struct CycleDetector;

impl CycleDetector {
    /// Return the first cycle reachable in `subgraph`, if any.
    ///
    /// Roots are tried in node order and edges are followed in the order
    /// they were added, so the same subgraph always yields the same cycle.
    /// The traversal keeps its own stack of `(node, next child)` frames
    /// instead of recursing, and its state is sized by the subgraph alone.
    pub fn find_cycle(subgraph: &Subgraph<'_>) -> Option<Cycle> {
        let graph = subgraph.graph();
        let mut state = vec![VisitState::Unvisited; subgraph.len()];
        // Member dependents paired with their subgraph positions.
        let children = |node: NodeIndex| -> Vec<(NodeIndex, usize)> {
            subgraph.dependents(node).filter_map(|n| subgraph.position(n).map(|p| (n, p))).collect()
        };

        for (root_pos, &root) in subgraph.nodes().iter().enumerate() {
            if state[root_pos] != VisitState::Unvisited {
                continue;
            }

            state[root_pos] = VisitState::InProgress;
            let mut stack: Vec<(NodeIndex, usize, Vec<(NodeIndex, usize)>, usize)> =
                vec![(root, root_pos, children(root), 0)];

            while let Some((_, pos, kids, next)) = stack.last_mut() {
                let Some(&(child, child_pos)) = kids.get(*next) else {
                    state[*pos] = VisitState::Done;
                    stack.pop();
                    continue;
                };
                *next += 1;

                match state[child_pos] {
                    VisitState::Unvisited => {
                        state[child_pos] = VisitState::InProgress;
                        stack.push((child, child_pos, children(child), 0));
                    }
                    VisitState::InProgress => {
                        let start =
                            stack.iter().position(|(n, _, _, _)| *n == child).unwrap_or(0);
                        let courses = stack[start..]
                            .iter()
                            .map(|(n, _, _, _)| graph.id(*n).clone())
                            .collect();
                        return Some(Cycle::new(courses));
                    }
                    VisitState::Done => {}
                }
            }
        }

        None
    }
}
