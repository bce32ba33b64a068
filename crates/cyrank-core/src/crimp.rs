//! # CRimp Scorer
//!
//! Importance from chordless-cycle participation plus a non-cyclic-degree
//! correction. The only engine entry point with input validation: directed
//! graphs are rejected before any computation starts.
//!
//! Per node `i`:
//! - `c_ii == 0`: the score is exactly `k_t[i]` — a node in no cycle scores
//!   purely on its acyclic degree.
//! - otherwise: an optional self term (`c_ii/c_ii = 1.0`, on by default),
//!   plus `c_ij/c_jj` for every neighbor `j` sharing a cycle, plus `k_t[i]`.

use crate::chordless::{find_squares, find_triangles};
use crate::counts::{CycleCounts, non_cyclic_degree};
use crate::graph::Graph;
use crate::types::{Cycle, CyrankError, NodeId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// =============================================================================
// CONFIGURATION
// =============================================================================

/// CRimp scoring configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrimpConfig {
    /// Include the `j = i` term, contributing exactly 1.0 for every node
    /// that participates in at least one cycle. Both settings are valid
    /// configurations; the default is on.
    pub include_self_term: bool,
}

impl Default for CrimpConfig {
    fn default() -> Self {
        Self {
            include_self_term: true,
        }
    }
}

// =============================================================================
// RESULT AGGREGATE
// =============================================================================

/// Everything one CRimp run produces. Immutable once returned; a changed
/// graph requires a full rerun.
#[derive(Debug, Clone)]
pub struct CrimpResult<N: NodeId> {
    /// Chordless triangles, canonically ordered.
    pub cycles3: Vec<Cycle<N>>,
    /// Chordless squares, canonically ordered.
    pub cycles4: Vec<Cycle<N>>,
    /// Membership counts over the union of both cycle lists.
    pub counts: CycleCounts<N>,
    /// Non-cyclic degree per node.
    pub k_t: BTreeMap<N, u64>,
    /// Final importance score per node.
    pub scores: BTreeMap<N, f64>,
}

// =============================================================================
// ENTRY POINTS
// =============================================================================

/// Run CRimp with the default configuration (self term included).
pub fn crimp<N: NodeId>(graph: &Graph<N>) -> Result<CrimpResult<N>, CyrankError> {
    crimp_with(graph, CrimpConfig::default())
}

/// Run CRimp end to end: enumerate chordless 3- and 4-cycles, build the
/// count index and `k_t`, and aggregate scores.
///
/// Fails with [`CyrankError::DirectedGraph`] on directed input; this is the
/// only validation failure in the core and it happens before any work.
pub fn crimp_with<N: NodeId>(
    graph: &Graph<N>,
    config: CrimpConfig,
) -> Result<CrimpResult<N>, CyrankError> {
    if graph.is_directed() {
        return Err(CyrankError::DirectedGraph);
    }

    let cycles3 = find_triangles(graph);
    let cycles4 = find_squares(graph);

    let counts = CycleCounts::from_cycles(cycles3.iter().chain(cycles4.iter()));
    let k_t = non_cyclic_degree(graph, &counts);
    let scores = score(graph, &counts, &k_t, config);

    Ok(CrimpResult {
        cycles3,
        cycles4,
        counts,
        k_t,
        scores,
    })
}

/// Ratio aggregation over the count index.
fn score<N: NodeId>(
    graph: &Graph<N>,
    counts: &CycleCounts<N>,
    k_t: &BTreeMap<N, u64>,
    config: CrimpConfig,
) -> BTreeMap<N, f64> {
    let mut scores = BTreeMap::new();

    for i in graph.nodes() {
        let acyclic = k_t.get(i).copied().unwrap_or(0) as f64;

        if counts.containing(i) == 0 {
            scores.insert(i.clone(), acyclic);
            continue;
        }

        let mut s = if config.include_self_term { 1.0 } else { 0.0 };

        for j in graph.neighbors(i) {
            let c_ij = counts.shared(i, j);
            if c_ij == 0 {
                continue;
            }
            let c_jj = counts.containing(j);
            if c_jj > 0 {
                s += c_ij as f64 / c_jj as f64;
            }
        }

        scores.insert(i.clone(), s + acyclic);
    }

    scores
}

// =============================================================================
// TESTS
// =============================================================================
