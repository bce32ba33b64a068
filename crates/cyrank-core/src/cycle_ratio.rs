//! # Cycle Ratio Engine (baseline)
//!
//! The independent baseline algorithm: cycles through each node are
//! reconstructed by logically removing the node and walking all shortest
//! paths between its neighbor pairs. Unlike the CRimp enumerator, recorded
//! cycles may be longer than four nodes and need not be chordless; that
//! divergence is intentional and must not be reconciled.
//!
//! Cost is dominated by one all-shortest-paths query per qualifying node
//! per non-adjacent neighbor pair. Usable on moderate graphs only.

use crate::graph::Graph;
use crate::types::{Cycle, NodeId};
use std::collections::{BTreeMap, BTreeSet};

// =============================================================================
// CYCLE DISCOVERY
// =============================================================================

/// Discover the cycle set by node removal and shortest-path reconstruction.
///
/// Per node `v` with degree >= 2, for every unordered pair `(u, w)` of its
/// neighbors:
/// - `u-w` an edge in the original graph: record the triangle `{v, u, w}`.
/// - otherwise: every shortest `u -> w` path in the view with `v` removed
///   yields the cycle `{v} ∪ path`. No path means the pair contributes
///   nothing; that is not an error.
///
/// Each iteration reads only the immutable original graph, so the outer
/// loop is safely shardable; results merge by set union under canonical
/// identity.
#[must_use]
pub fn discover_cycles<N: NodeId>(graph: &Graph<N>) -> BTreeSet<Cycle<N>> {
    let mut cycles = BTreeSet::new();

    for v in graph.nodes() {
        let neighbors: Vec<&N> = graph.neighbors(v).collect();
        if neighbors.len() < 2 {
            continue;
        }

        for (i, &u) in neighbors.iter().enumerate() {
            for &w in &neighbors[i + 1..] {
                if graph.has_edge(u, w) {
                    cycles.insert(Cycle::new([v.clone(), u.clone(), w.clone()]));
                    continue;
                }
                for path in graph.all_shortest_paths(u, w, Some(v)) {
                    let mut members = path;
                    members.push(v.clone());
                    cycles.insert(Cycle::new(members));
                }
            }
        }
    }

    cycles
}

// =============================================================================
// SCORING
// =============================================================================

/// Cycle Ratio score per node.
///
/// For node `i` with `c_ii` recorded cycles: zero if `c_ii == 0` (this
/// covers degree-<2 nodes, which discovery skips entirely); otherwise the
/// sum over every co-occurring node `j != i` of `shared[j] / c_ii[j]`.
/// There is deliberately no self term — the opposite default from CRimp.
#[must_use]
pub fn cycle_ratio<N: NodeId>(graph: &Graph<N>) -> BTreeMap<N, f64> {
    let cycles = discover_cycles(graph);

    // Cycle membership per node, over the deduplicated global set.
    let mut cycle_map: BTreeMap<&N, Vec<&Cycle<N>>> = BTreeMap::new();
    for node in graph.nodes() {
        cycle_map.insert(node, Vec::new());
    }
    for cycle in &cycles {
        for node in cycle.members() {
            if let Some(list) = cycle_map.get_mut(node) {
                list.push(cycle);
            }
        }
    }

    let mut scores = BTreeMap::new();

    for i in graph.nodes() {
        let own = &cycle_map[i];
        if own.is_empty() {
            scores.insert(i.clone(), 0.0);
            continue;
        }

        // shared[j] = number of recorded cycles containing both i and j.
        let mut shared: BTreeMap<&N, u64> = BTreeMap::new();
        for cycle in own {
            for j in cycle.members() {
                *shared.entry(j).or_insert(0) += 1;
            }
        }

        let mut score = 0.0;
        for (j, c_ij) in &shared {
            if *j == i {
                continue;
            }
            let c_jj = cycle_map[*j].len() as u64;
            if c_jj > 0 {
                score += *c_ij as f64 / c_jj as f64;
            }
        }

        scores.insert(i.clone(), score);
    }

    scores
}

// =============================================================================
// TESTS
// =============================================================================
