//! # Generic Centrality Baselines
//!
//! The three comparison baselines the cycle engines are evaluated against:
//! degree, betweenness (Brandes), and pagerank (power iteration). Each is
//! a standard textbook algorithm over the core graph model, returning the
//! same node-to-float contract as the engines.

use cyrank_core::{Graph, NodeId};
use std::collections::{BTreeMap, VecDeque};

// =============================================================================
// DEGREE
// =============================================================================

/// Degree centrality: the node's degree as a float.
#[must_use]
pub fn rank_degree<N: NodeId>(graph: &Graph<N>) -> BTreeMap<N, f64> {
    graph
        .nodes()
        .map(|n| (n.clone(), graph.degree(n) as f64))
        .collect()
}

// =============================================================================
// BETWEENNESS (Brandes)
// =============================================================================

/// Betweenness centrality via Brandes' algorithm, undirected, normalized
/// to `[0, 1]` by `2 / ((n-1)(n-2))`.
///
/// Forward pass: BFS from each source accumulating shortest-path counts
/// and predecessor lists. Backward pass: dependency accumulation in
/// reverse BFS order.
#[must_use]
pub fn rank_betweenness<N: NodeId>(graph: &Graph<N>) -> BTreeMap<N, f64> {
    let nodes: Vec<&N> = graph.nodes().collect();
    let n = nodes.len();
    if n < 2 {
        return nodes.iter().map(|&v| (v.clone(), 0.0)).collect();
    }

    let index: BTreeMap<&N, usize> = nodes.iter().enumerate().map(|(i, &v)| (v, i)).collect();
    let mut betweenness = vec![0.0_f64; n];

    for s in 0..n {
        let (sigma, preds, order) = bfs_shortest_path_counts(graph, &nodes, &index, s);

        let mut delta = vec![0.0_f64; n];
        for &w in order.iter().rev() {
            for &v in &preds[w] {
                let coeff = sigma[v] / sigma[w];
                delta[v] += coeff * (1.0 + delta[w]);
            }
            if w != s {
                betweenness[w] += delta[w];
            }
        }
    }

    // Undirected: each path was counted from both endpoints.
    for b in &mut betweenness {
        *b /= 2.0;
    }
    if n > 2 {
        let scale = 2.0 / ((n - 1) as f64 * (n - 2) as f64);
        for b in &mut betweenness {
            *b *= scale;
        }
    }

    nodes
        .iter()
        .enumerate()
        .map(|(i, &v)| (v.clone(), betweenness[i]))
        .collect()
}

/// BFS from `source`, returning shortest-path counts, predecessor lists,
/// and visit order for the backward pass.
fn bfs_shortest_path_counts<N: NodeId>(
    graph: &Graph<N>,
    nodes: &[&N],
    index: &BTreeMap<&N, usize>,
    source: usize,
) -> (Vec<f64>, Vec<Vec<usize>>, Vec<usize>) {
    let n = nodes.len();
    let mut sigma = vec![0.0_f64; n];
    let mut dist = vec![-1_i64; n];
    let mut preds: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut order = Vec::with_capacity(n);

    sigma[source] = 1.0;
    dist[source] = 0;

    let mut queue = VecDeque::new();
    queue.push_back(source);

    while let Some(v) = queue.pop_front() {
        order.push(v);
        for neighbor in graph.neighbors(nodes[v]) {
            let w = index[neighbor];
            if dist[w] < 0 {
                dist[w] = dist[v] + 1;
                queue.push_back(w);
            }
            if dist[w] == dist[v] + 1 {
                sigma[w] += sigma[v];
                preds[w].push(v);
            }
        }
    }

    (sigma, preds, order)
}

// =============================================================================
// PAGERANK
// =============================================================================

/// Damping factor: probability of following an edge vs teleporting.
const PAGERANK_DAMPING: f64 = 0.85;
/// Convergence tolerance on the L1 norm of score changes.
const PAGERANK_TOLERANCE: f64 = 1e-6;
/// Iteration cap when convergence is slow.
const PAGERANK_MAX_ITERATIONS: usize = 100;

/// Pagerank by power iteration over the undirected graph. Scores sum
/// to 1.0; mass from isolated (dangling) nodes is spread uniformly.
#[must_use]
pub fn rank_pagerank<N: NodeId>(graph: &Graph<N>) -> BTreeMap<N, f64> {
    let nodes: Vec<&N> = graph.nodes().collect();
    let n = nodes.len();
    if n == 0 {
        return BTreeMap::new();
    }

    let index: BTreeMap<&N, usize> = nodes.iter().enumerate().map(|(i, &v)| (v, i)).collect();
    let degrees: Vec<usize> = nodes.iter().map(|&v| graph.degree(v)).collect();

    let uniform = 1.0 / n as f64;
    let mut ranks = vec![uniform; n];

    for _ in 0..PAGERANK_MAX_ITERATIONS {
        let dangling_mass: f64 = (0..n)
            .filter(|&i| degrees[i] == 0)
            .map(|i| ranks[i])
            .sum();

        let base = (1.0 - PAGERANK_DAMPING) * uniform + PAGERANK_DAMPING * dangling_mass * uniform;
        let mut next = vec![base; n];

        for (i, &v) in nodes.iter().enumerate() {
            if degrees[i] == 0 {
                continue;
            }
            let share = PAGERANK_DAMPING * ranks[i] / degrees[i] as f64;
            for neighbor in graph.neighbors(v) {
                next[index[neighbor]] += share;
            }
        }

        let diff: f64 = ranks
            .iter()
            .zip(next.iter())
            .map(|(a, b)| (a - b).abs())
            .sum();
        ranks = next;
        if diff < PAGERANK_TOLERANCE {
            break;
        }
    }

    nodes
        .iter()
        .enumerate()
        .map(|(i, &v)| (v.clone(), ranks[i]))
        .collect()
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn path_graph(n: u64) -> Graph<u64> {
        let mut graph = Graph::new();
        for i in 0..n - 1 {
            graph.add_edge(i, i + 1);
        }
        graph
    }

    #[test]
    fn degree_is_plain_degree() {
        let graph = path_graph(4);
        let scores = rank_degree(&graph);

        assert_eq!(scores[&0], 1.0);
        assert_eq!(scores[&1], 2.0);
        assert_eq!(scores[&2], 2.0);
        assert_eq!(scores[&3], 1.0);
    }

    #[test]
    fn betweenness_peaks_mid_path() {
        // Path 0-1-2-3-4: node 2 lies on the most shortest paths.
        let graph = path_graph(5);
        let scores = rank_betweenness(&graph);

        assert_eq!(scores[&0], 0.0);
        assert_eq!(scores[&4], 0.0);
        assert!(scores[&2] > scores[&1]);
        assert!(scores[&1] > scores[&0]);
        // Middle of a 5-path: 4 of the 6 pairs route through node 2.
        assert!((scores[&2] - 4.0 / 6.0).abs() < 1e-9);
    }

    #[test]
    fn betweenness_star_hub() {
        let mut graph = Graph::new();
        for i in 1u64..=4 {
            graph.add_edge(0, i);
        }

        let scores = rank_betweenness(&graph);
        // Every leaf pair routes through the hub: normalized score 1.0.
        assert!((scores[&0] - 1.0).abs() < 1e-9);
        for i in 1u64..=4 {
            assert_eq!(scores[&i], 0.0);
        }
    }

    #[test]
    fn pagerank_sums_to_one() {
        let mut graph = path_graph(4);
        graph.add_node(99); // dangling

        let scores = rank_pagerank(&graph);
        let total: f64 = scores.values().sum();
        assert!((total - 1.0).abs() < 1e-6);
    }

    #[test]
    fn pagerank_symmetric_cycle_is_uniform() {
        let mut graph = Graph::new();
        for i in 0u64..4 {
            graph.add_edge(i, (i + 1) % 4);
        }

        let scores = rank_pagerank(&graph);
        for i in 0u64..4 {
            assert!((scores[&i] - 0.25).abs() < 1e-6);
        }
    }

    #[test]
    fn pagerank_favors_high_degree() {
        let mut graph = Graph::new();
        graph.add_edge(0u64, 1);
        graph.add_edge(0u64, 2);
        graph.add_edge(0u64, 3);
        graph.add_edge(1u64, 2);

        let scores = rank_pagerank(&graph);
        assert!(scores[&0] > scores[&3]);
    }
}
