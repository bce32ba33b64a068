//! # Cycle Count Index
//!
//! Per-node and per-pair cycle membership counts, built once from any list
//! of cycles, plus the non-cyclic degree derived from them.
//!
//! The index is purely additive and order-independent: the same multiset of
//! cycles yields the same counts regardless of discovery order. No cycle
//! weighting or size normalization happens here.

use crate::graph::Graph;
use crate::types::{Cycle, NodeId, pair};
use std::collections::BTreeMap;

// =============================================================================
// CYCLE COUNTS
// =============================================================================

/// Membership counts over a fixed cycle list.
///
/// `c_ii` is how many cycles contain node `i`; `c_ij` how many contain both
/// members of an unordered pair. Derived once, never mutated afterward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleCounts<N: NodeId> {
    c_ii: BTreeMap<N, u64>,
    c_ij: BTreeMap<(N, N), u64>,
}

impl<N: NodeId> Default for CycleCounts<N> {
    fn default() -> Self {
        Self {
            c_ii: BTreeMap::new(),
            c_ij: BTreeMap::new(),
        }
    }
}

impl<N: NodeId> CycleCounts<N> {
    /// Build the index from a list of cycles of any size >= 3.
    ///
    /// Each cycle contributes +1 to every member's `c_ii` and +1 to each of
    /// its `C(size, 2)` unordered member pairs.
    #[must_use]
    pub fn from_cycles<'a>(cycles: impl IntoIterator<Item = &'a Cycle<N>>) -> Self
    where
        N: 'a,
    {
        let mut counts = Self::default();
        for cycle in cycles {
            for node in cycle.members() {
                *counts.c_ii.entry(node.clone()).or_insert(0) += 1;
            }
            for (u, v) in cycle.member_pairs() {
                *counts.c_ij.entry(pair(u, v)).or_insert(0) += 1;
            }
        }
        counts
    }

    /// Number of cycles containing `i`. Zero for nodes in no cycle.
    #[must_use]
    pub fn containing(&self, i: &N) -> u64 {
        self.c_ii.get(i).copied().unwrap_or(0)
    }

    /// Number of cycles containing both `i` and `j`, in either order.
    #[must_use]
    pub fn shared(&self, i: &N, j: &N) -> u64 {
        self.c_ij
            .get(&pair(i.clone(), j.clone()))
            .copied()
            .unwrap_or(0)
    }

    /// Nodes that appear in at least one cycle, ascending.
    pub fn cyclic_nodes(&self) -> impl Iterator<Item = &N> {
        self.c_ii.keys()
    }
}

// =============================================================================
// NON-CYCLIC DEGREE
// =============================================================================

/// `k_t` for every node: degree minus the number of neighbors sharing at
/// least one cycle with it.
///
/// This counts the "tree-like" edges the cycle structure does not explain.
/// Degree comes from the graph model directly, not from the cycle list.
#[must_use]
pub fn non_cyclic_degree<N: NodeId>(
    graph: &Graph<N>,
    counts: &CycleCounts<N>,
) -> BTreeMap<N, u64> {
    let mut k_t = BTreeMap::new();
    for i in graph.nodes() {
        let cycle_neighbors = graph
            .neighbors(i)
            .filter(|j| counts.shared(i, j) > 0)
            .count() as u64;
        k_t.insert(i.clone(), graph.degree(i) as u64 - cycle_neighbors);
    }
    k_t
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_single_triangle() {
        let cycles = vec![Cycle::new([1u64, 2, 3])];
        let counts = CycleCounts::from_cycles(&cycles);

        for n in 1..=3u64 {
            assert_eq!(counts.containing(&n), 1);
        }
        assert_eq!(counts.shared(&1, &2), 1);
        assert_eq!(counts.shared(&2, &1), 1);
        assert_eq!(counts.shared(&1, &4), 0);
        assert_eq!(counts.containing(&4), 0);
    }

    #[test]
    fn overlapping_cycles_accumulate() {
        // Two triangles sharing the edge 1-2.
        let cycles = vec![Cycle::new([1u64, 2, 3]), Cycle::new([1u64, 2, 4])];
        let counts = CycleCounts::from_cycles(&cycles);

        assert_eq!(counts.containing(&1), 2);
        assert_eq!(counts.containing(&3), 1);
        assert_eq!(counts.shared(&1, &2), 2);
        assert_eq!(counts.shared(&1, &3), 1);
        assert_eq!(counts.shared(&3, &4), 0);
    }

    #[test]
    fn larger_cycles_count_all_pairs() {
        // A 5-cycle contributes C(5,2) = 10 pair increments.
        let cycles = vec![Cycle::new([1u64, 2, 3, 4, 5])];
        let counts = CycleCounts::from_cycles(&cycles);

        assert_eq!(counts.shared(&1, &5), 1);
        assert_eq!(counts.shared(&2, &4), 1);
        assert_eq!(counts.cyclic_nodes().count(), 5);
    }

    #[test]
    fn order_independent() {
        let a = vec![Cycle::new([1u64, 2, 3]), Cycle::new([2u64, 3, 4])];
        let b = vec![Cycle::new([2u64, 3, 4]), Cycle::new([1u64, 2, 3])];

        assert_eq!(CycleCounts::from_cycles(&a), CycleCounts::from_cycles(&b));
    }

    #[test]
    fn non_cyclic_degree_counts_tree_edges() {
        // Triangle 1-2-3 with a pendant 4 hanging off node 1.
        let mut graph = Graph::new();
        graph.add_edge(1u64, 2);
        graph.add_edge(2u64, 3);
        graph.add_edge(1u64, 3);
        graph.add_edge(1u64, 4);

        let cycles = vec![Cycle::new([1u64, 2, 3])];
        let counts = CycleCounts::from_cycles(&cycles);
        let k_t = non_cyclic_degree(&graph, &counts);

        assert_eq!(k_t[&1], 1); // only the edge to 4 is non-cyclic
        assert_eq!(k_t[&2], 0);
        assert_eq!(k_t[&3], 0);
        assert_eq!(k_t[&4], 1); // pendant shares no cycle with its neighbor
    }

    #[test]
    fn non_cyclic_degree_without_cycles_is_degree() {
        let mut graph = Graph::new();
        graph.add_edge(1u64, 2);
        graph.add_edge(2u64, 3);

        let counts = CycleCounts::from_cycles(&[]);
        let k_t = non_cyclic_degree(&graph, &counts);

        assert_eq!(k_t[&1], 1);
        assert_eq!(k_t[&2], 2);
        assert_eq!(k_t[&3], 1);
    }
}
