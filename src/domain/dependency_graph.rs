//! Dependency graph domain logic.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use super::{CourseId, CourseRegistry};

/// Position of a node in a [`DependencyGraph`].
///
/// Registered courses are numbered first, in registry order, followed by
/// dangling prerequisites in the order they are first referenced. A lower
/// index therefore means "registered earlier".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeIndex(usize);

impl NodeIndex {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone)]
struct Node {
    id: CourseId,
    registered: bool,
}

/// A prerequisite that no catalog record defines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DanglingReference {
    pub missing: CourseId,
    /// Registered courses listing `missing` as a prerequisite, in registry order.
    pub referenced_by: Vec<CourseId>,
}

/// Directed graph of "must precede" relations between courses.
///
/// An edge `P -> R` means course `P` must be completed before course `R`.
/// The edge set is fixed by the registry snapshot the graph was built from;
/// there is no way to add or remove edges afterwards.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    nodes: Vec<Node>,
    lookup: HashMap<CourseId, NodeIndex>,
    /// Incoming edges per node, in prerequisite-list order.
    prerequisites: Vec<Vec<NodeIndex>>,
    /// Outgoing edges per node, in the order they were added.
    dependents: Vec<Vec<NodeIndex>>,
    edge_count: usize,
}

impl DependencyGraph {
    /// Build the graph for a registry snapshot.
    ///
    /// Every registry key and every prerequisite identifier becomes a node.
    /// Repeated prerequisites collapse into a single edge. A course listing
    /// itself produces a self-loop, which cycle detection reports later.
    pub fn build_from(registry: &CourseRegistry) -> Self {
        let mut graph = Self::default();

        for record in registry.iter() {
            graph.add_node(record.id.clone(), true);
        }

        for record in registry.iter() {
            let dependent = graph.lookup[&record.id];
            for prereq in &record.prerequisites {
                let prereq = match graph.lookup.get(prereq) {
                    Some(&node) => node,
                    None => graph.add_node(prereq.clone(), false),
                };
                graph.add_edge(prereq, dependent);
            }
        }

        debug!(nodes = graph.node_count(), edges = graph.edge_count, "built dependency graph");
        graph
    }

    fn add_node(&mut self, id: CourseId, registered: bool) -> NodeIndex {
        let node = NodeIndex(self.nodes.len());
        self.lookup.insert(id.clone(), node);
        self.nodes.push(Node { id, registered });
        self.prerequisites.push(Vec::new());
        self.dependents.push(Vec::new());
        node
    }

    fn add_edge(&mut self, from: NodeIndex, to: NodeIndex) {
        if self.dependents[from.0].contains(&to) {
            return;
        }
        self.dependents[from.0].push(to);
        self.prerequisites[to.0].push(from);
        self.edge_count += 1;
    }

    pub fn node(&self, id: &str) -> Option<NodeIndex> {
        self.lookup.get(id).copied()
    }

    pub fn id(&self, node: NodeIndex) -> &CourseId {
        &self.nodes[node.0].id
    }

    /// Whether the node has a registry record (as opposed to being dangling).
    pub fn is_registered(&self, node: NodeIndex) -> bool {
        self.nodes[node.0].registered
    }

    /// Direct prerequisites of `node`, in the order the record lists them.
    pub fn prerequisites(&self, node: NodeIndex) -> &[NodeIndex] {
        &self.prerequisites[node.0]
    }

    /// Courses that list `node` as a direct prerequisite.
    pub fn dependents(&self, node: NodeIndex) -> &[NodeIndex] {
        &self.dependents[node.0]
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Every prerequisite that is not itself a registered course.
    pub fn dangling(&self) -> Vec<DanglingReference> {
        (0..self.nodes.len())
            .map(NodeIndex)
            .filter(|&node| !self.is_registered(node))
            .map(|node| DanglingReference {
                missing: self.id(node).clone(),
                referenced_by: self.dependents(node).iter().map(|&d| self.id(d).clone()).collect(),
            })
            .collect()
    }

    /// The whole graph viewed as a subgraph.
    pub fn full(&self) -> Subgraph<'_> {
        Subgraph::from_nodes(self, (0..self.nodes.len()).map(NodeIndex).collect())
    }

    /// Induced subgraph of `id` and all of its transitive prerequisites.
    ///
    /// Returns `None` when `id` is not a node of this graph. Work is bounded
    /// by the size of the returned subgraph, not by the size of the graph.
    pub fn ancestors_of(&self, id: &str) -> Option<Subgraph<'_>> {
        let start = self.node(id)?;
        let mut seen = HashSet::from([start]);
        let mut members = vec![start];

        // Depth-first, following prerequisites in record order.
        let mut stack: Vec<(NodeIndex, usize)> = vec![(start, 0)];
        while let Some((node, next)) = stack.last_mut() {
            let prereqs = &self.prerequisites[node.0];
            let Some(&prereq) = prereqs.get(*next) else {
                stack.pop();
                continue;
            };
            *next += 1;
            if seen.insert(prereq) {
                members.push(prereq);
                stack.push((prereq, 0));
            }
        }

        Some(Subgraph::from_nodes(self, members))
    }
}

/// A node-induced view over a [`DependencyGraph`].
#[derive(Debug, Clone)]
pub struct Subgraph<'g> {
    graph: &'g DependencyGraph,
    /// Member node to its position in `nodes`.
    positions: HashMap<NodeIndex, usize>,
    /// Member nodes in node order.
    nodes: Vec<NodeIndex>,
}

impl<'g> Subgraph<'g> {
    fn from_nodes(graph: &'g DependencyGraph, mut nodes: Vec<NodeIndex>) -> Self {
        nodes.sort_unstable();
        let positions = nodes.iter().enumerate().map(|(pos, &node)| (node, pos)).collect();
        Self { graph, positions, nodes }
    }

    pub fn graph(&self) -> &'g DependencyGraph {
        self.graph
    }

    pub fn contains(&self, node: NodeIndex) -> bool {
        self.positions.contains_key(&node)
    }

    /// Position of a member in [`nodes`](Self::nodes).
    pub fn position(&self, node: NodeIndex) -> Option<usize> {
        self.positions.get(&node).copied()
    }

    /// Member nodes, registered-earliest first.
    pub fn nodes(&self) -> &[NodeIndex] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Prerequisites of `node` that belong to this subgraph.
    pub fn prerequisites(&self, node: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.prerequisites(node).iter().copied().filter(move |&n| self.contains(n))
    }

    /// Dependents of `node` that belong to this subgraph.
    pub fn dependents(&self, node: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.dependents(node).iter().copied().filter(move |&n| self.contains(n))
    }

    pub fn ids(&self) -> impl Iterator<Item = &'g CourseId> + '_ {
        let graph = self.graph;
        self.nodes.iter().map(move |&n| graph.id(n))
    }
}
