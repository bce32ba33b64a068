//! # Chordless Cycle Enumerator
//!
//! Enumerates the chordless triangles and chordless squares of an
//! undirected graph. Triangles are chordless by definition; a square
//! `{u, v, a, b}` (with `a` and `b` both adjacent to both `u` and `v`)
//! is chordless only when neither diagonal `u-v` nor `a-b` is an edge.
//!
//! Square enumeration is quadratic in node count times average degree in
//! the worst case; it is intended for moderate graphs, not web-scale ones.

use crate::graph::Graph;
use crate::types::{Cycle, NodeId};
use std::collections::BTreeSet;

// =============================================================================
// TRIANGLES
// =============================================================================

/// All triangles (chordless 3-cycles), canonically ordered.
///
/// Scans each edge `(u, v)` with `u < v` and intersects the two neighbor
/// sets; common neighbors `w > v` complete a triangle. The `u < v < w`
/// ordering emits each triangle exactly once, so no dedup pass is needed.
#[must_use]
pub fn find_triangles<N: NodeId>(graph: &Graph<N>) -> Vec<Cycle<N>> {
    let mut triangles = Vec::new();

    for u in graph.nodes() {
        let Some(nu) = graph.neighbor_set(u) else {
            continue;
        };
        for v in nu.iter().filter(|v| *v > u) {
            let Some(nv) = graph.neighbor_set(v) else {
                continue;
            };
            for w in nu.intersection(nv).filter(|w| *w > v) {
                triangles.push(Cycle::new([u.clone(), v.clone(), w.clone()]));
            }
        }
    }

    triangles.sort();
    triangles
}

// =============================================================================
// SQUARES
// =============================================================================

/// All chordless squares (4-cycles with both diagonals absent),
/// canonically ordered and deduplicated.
///
/// For every non-adjacent unordered pair `(u, v)`, each unordered pair of
/// common neighbors `(a, b)` with `a-b` not an edge closes the square
/// `u-a-v-b-u`. Both absent-edge checks are mandatory: either edge would
/// be a chord, and the cycle would no longer be chordless.
#[must_use]
pub fn find_squares<N: NodeId>(graph: &Graph<N>) -> Vec<Cycle<N>> {
    let nodes: Vec<&N> = graph.nodes().collect();
    let mut squares: BTreeSet<Cycle<N>> = BTreeSet::new();

    for (i, &u) in nodes.iter().enumerate() {
        let Some(nu) = graph.neighbor_set(u) else {
            continue;
        };
        for &v in &nodes[i + 1..] {
            // u-v would be a diagonal chord in any u-a-v-b-u square.
            if graph.has_edge(u, v) {
                continue;
            }
            let Some(nv) = graph.neighbor_set(v) else {
                continue;
            };
            let common: Vec<&N> = nu.intersection(nv).collect();
            if common.len() < 2 {
                continue;
            }

            for (j, &a) in common.iter().enumerate() {
                for &b in &common[j + 1..] {
                    // a-b would be the other diagonal chord.
                    if graph.has_edge(a, b) {
                        continue;
                    }
                    squares.insert(Cycle::new([
                        u.clone(),
                        v.clone(),
                        a.clone(),
                        b.clone(),
                    ]));
                }
            }
        }
    }

    squares.into_iter().collect()
}

// =============================================================================
// TESTS
// =============================================================================
