//! # Graph Model
//!
//! The read-only undirected simple graph consumed by both engines.
//!
//! All adjacency is stored in `BTreeMap`/`BTreeSet` so that node and
//! neighbor iteration order is a pure function of graph content, never of
//! insertion order. The engines rely on this for reproducible score maps.
//!
//! A `directed` construction mode exists only so that callers can represent
//! directed input for CRimp to reject; the algorithms themselves are defined
//! for undirected graphs.

use crate::types::NodeId;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, VecDeque};

// =============================================================================
// GRAPH
// =============================================================================

/// A simple graph: no self-loops, no multi-edges.
///
/// Undirected by default; `add_edge` inserts both directions. Nodes are any
/// [`NodeId`] type (integers, strings).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph<N: NodeId> {
    /// Adjacency: node -> set of neighbors.
    adjacency: BTreeMap<N, BTreeSet<N>>,

    /// Directed construction mode. Exists for input validation only.
    directed: bool,

    /// Edge count (undirected edges, or arcs in directed mode).
    edge_count: usize,
}

impl<N: NodeId> Graph<N> {
    /// Create a new empty undirected graph.
    #[must_use]
    pub fn new() -> Self {
        Self {
            adjacency: BTreeMap::new(),
            directed: false,
            edge_count: 0,
        }
    }

    /// Create a new empty directed graph.
    ///
    /// Directed graphs can be built and inspected, but CRimp rejects them
    /// and the Cycle Ratio engine is defined for undirected input only.
    #[must_use]
    pub fn directed() -> Self {
        Self {
            adjacency: BTreeMap::new(),
            directed: true,
            edge_count: 0,
        }
    }

    /// Whether this graph was constructed in directed mode.
    #[must_use]
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Insert an isolated node. No-op if already present.
    pub fn add_node(&mut self, node: N) {
        self.adjacency.entry(node).or_default();
    }

    /// Insert an edge, creating endpoints as needed.
    ///
    /// Self-loops are ignored (simple graph invariant). Returns `true` if
    /// the edge was new.
    pub fn add_edge(&mut self, u: N, v: N) -> bool {
        if u == v {
            return false;
        }
        let inserted = self
            .adjacency
            .entry(u.clone())
            .or_default()
            .insert(v.clone());
        if self.directed {
            self.adjacency.entry(v).or_default();
        } else {
            self.adjacency.entry(v).or_default().insert(u);
        }
        if inserted {
            self.edge_count += 1;
        }
        inserted
    }

    /// All nodes in ascending order.
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.adjacency.keys()
    }

    /// Neighbors of a node in ascending order. Empty for unknown nodes.
    pub fn neighbors(&self, node: &N) -> impl Iterator<Item = &N> {
        self.adjacency
            .get(node)
            .into_iter()
            .flat_map(|set| set.iter())
    }

    /// Neighbor set of a node, if present.
    #[must_use]
    pub fn neighbor_set(&self, node: &N) -> Option<&BTreeSet<N>> {
        self.adjacency.get(node)
    }

    /// Degree of a node. Zero for unknown nodes.
    #[must_use]
    pub fn degree(&self, node: &N) -> usize {
        self.adjacency.get(node).map_or(0, BTreeSet::len)
    }

    /// Whether the edge `u -> v` exists (`u - v` in undirected mode).
    #[must_use]
    pub fn has_edge(&self, u: &N, v: &N) -> bool {
        self.adjacency
            .get(u)
            .is_some_and(|set| set.contains(v))
    }

    /// Whether the node exists.
    #[must_use]
    pub fn contains_node(&self, node: &N) -> bool {
        self.adjacency.contains_key(node)
    }

    /// Total number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Total number of edges (undirected edges, or arcs in directed mode).
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }
}

// =============================================================================
// ALL SHORTEST PATHS (with logical node removal)
// =============================================================================

impl<N: NodeId> Graph<N> {
    /// Every shortest path from `source` to `target` in the graph with
    /// `excluded` logically removed.
    ///
    /// The exclusion is a read-only view over the original adjacency; the
    /// graph itself is never copied or mutated, so concurrent per-node
    /// iterations of the Cycle Ratio engine stay independent.
    ///
    /// Returns an empty vector when no path exists, which is distinct from
    /// the zero-length case `source == target` (a single one-node path).
    /// Paths are returned in deterministic (neighbor-order) sequence.
    #[must_use]
    pub fn all_shortest_paths(
        &self,
        source: &N,
        target: &N,
        excluded: Option<&N>,
    ) -> Vec<Vec<N>> {
        let removed = |n: &N| excluded.is_some_and(|x| x == n);
        if removed(source)
            || removed(target)
            || !self.contains_node(source)
            || !self.contains_node(target)
        {
            return Vec::new();
        }
        if source == target {
            return vec![vec![source.clone()]];
        }

        // Forward BFS: distances plus ALL shortest-path predecessors.
        let mut dist: BTreeMap<N, usize> = BTreeMap::new();
        let mut preds: BTreeMap<N, Vec<N>> = BTreeMap::new();
        let mut queue = VecDeque::new();

        dist.insert(source.clone(), 0);
        queue.push_back(source.clone());

        let mut target_dist: Option<usize> = None;

        while let Some(current) = queue.pop_front() {
            let d = dist[&current];

            // Nodes past the target's level cannot start new shortest paths.
            if target_dist.is_some_and(|td| d >= td) {
                continue;
            }

            for neighbor in self.neighbors(&current) {
                if removed(neighbor) {
                    continue;
                }
                match dist.get(neighbor) {
                    None => {
                        dist.insert(neighbor.clone(), d + 1);
                        preds.insert(neighbor.clone(), vec![current.clone()]);
                        if neighbor == target {
                            target_dist = Some(d + 1);
                        }
                        queue.push_back(neighbor.clone());
                    }
                    Some(&nd) if nd == d + 1 => {
                        if let Some(p) = preds.get_mut(neighbor) {
                            p.push(current.clone());
                        }
                    }
                    Some(_) => {}
                }
            }
        }

        if target_dist.is_none() {
            return Vec::new();
        }

        // Backward expansion: enumerate every predecessor chain.
        let mut paths = Vec::new();
        let mut suffix = vec![target.clone()];
        Self::expand_paths(&preds, source, target, &mut suffix, &mut paths);
        paths
    }

    /// Recursively walk predecessor lists from `current` back to `source`,
    /// emitting each completed path in source-to-target order.
    fn expand_paths(
        preds: &BTreeMap<N, Vec<N>>,
        source: &N,
        current: &N,
        suffix: &mut Vec<N>,
        out: &mut Vec<Vec<N>>,
    ) {
        if current == source {
            let mut path = suffix.clone();
            path.reverse();
            out.push(path);
            return;
        }
        let Some(parents) = preds.get(current) else {
            return;
        };
        for parent in parents {
            suffix.push(parent.clone());
            Self::expand_paths(preds, source, parent, suffix, out);
            suffix.pop();
        }
    }
}

// =============================================================================
// SERIALIZATION SUPPORT
// =============================================================================

/// Serializable edge-list representation of a graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SerializableGraph<N: NodeId> {
    pub directed: bool,
    pub nodes: Vec<N>,
    pub edges: Vec<(N, N)>,
}

impl<N: NodeId> From<&Graph<N>> for SerializableGraph<N> {
    fn from(graph: &Graph<N>) -> Self {
        let mut edges = Vec::with_capacity(graph.edge_count());
        for u in graph.nodes() {
            for v in graph.neighbors(u) {
                if graph.directed || u < v {
                    edges.push((u.clone(), v.clone()));
                }
            }
        }
        Self {
            directed: graph.directed,
            nodes: graph.nodes().cloned().collect(),
            edges,
        }
    }
}

impl<N: NodeId> From<SerializableGraph<N>> for Graph<N> {
    fn from(sg: SerializableGraph<N>) -> Self {
        let mut graph = if sg.directed {
            Graph::directed()
        } else {
            Graph::new()
        };
        for node in sg.nodes {
            graph.add_node(node);
        }
        for (u, v) in sg.edges {
            graph.add_edge(u, v);
        }
        graph
    }
}

// =============================================================================
// TESTS
// =============================================================================
