//! # Loader and Pipeline Tests
//!
//! End-to-end: write an edge list to disk, load it, run the engines on the
//! loaded graph — the same path the binary takes.

use cyrank::cli::{CompareConfig, compute_scores, load_compare_config};
use cyrank::datasets::{LoadedGraph, load_edge_list};
use cyrank_core::{CrimpConfig, CyrankError, crimp};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_temp(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write");
    file
}

// =============================================================================
// EDGE-LIST LOADING
// =============================================================================

#[test]
fn loads_numeric_edge_list() {
    let file = write_temp("# a triangle\n1 2\n2 3\n1 3\n");
    let graph = load_edge_list(file.path(), false).expect("load");

    assert!(matches!(graph, LoadedGraph::Numeric(_)));
    assert_eq!(graph.node_count(), 3);
    assert_eq!(graph.edge_count(), 3);
}

#[test]
fn loads_named_edge_list() {
    let file = write_temp("alice bob\nbob carol\ncarol alice\n");
    let graph = load_edge_list(file.path(), false).expect("load");

    let LoadedGraph::Named(g) = graph else {
        unreachable!("string labels");
    };
    assert_eq!(g.node_count(), 3);
    assert!(g.has_edge(&"alice".to_string(), &"carol".to_string()));
}

#[test]
fn comments_blanks_and_extra_columns_tolerated() {
    let file = write_temp("# comment\n\n1 2 0.5\n2 3\t1.0 x\n");
    let graph = load_edge_list(file.path(), false).expect("load");
    assert_eq!(graph.edge_count(), 2);
}

#[test]
fn malformed_line_reports_its_number() {
    let file = write_temp("1 2\n# fine\nbroken\n");
    let result = load_edge_list(file.path(), false);
    assert!(matches!(
        result,
        Err(CyrankError::InvalidEdgeList { line: 3, .. })
    ));
}

#[test]
fn missing_file_is_io_error() {
    let result = load_edge_list(std::path::Path::new("/nonexistent/graph.txt"), false);
    assert!(matches!(result, Err(CyrankError::Io(_))));
}

// =============================================================================
// LOADED GRAPH -> ENGINES
// =============================================================================

#[test]
fn directed_load_rejected_by_crimp() {
    let file = write_temp("1 2\n2 3\n3 1\n");
    let LoadedGraph::Numeric(graph) = load_edge_list(file.path(), true).expect("load") else {
        unreachable!("numeric labels");
    };

    assert!(matches!(crimp(&graph), Err(CyrankError::DirectedGraph)));
}

#[test]
fn loaded_triangle_ranks_correctly() {
    let file = write_temp("1 2\n2 3\n1 3\n1 4\n");
    let LoadedGraph::Numeric(graph) = load_edge_list(file.path(), false).expect("load") else {
        unreachable!("numeric labels");
    };

    let scores =
        compute_scores(&graph, "crimp", CrimpConfig::default()).expect("known algorithm");
    // Triangle node with a pendant outranks its cycle peers.
    assert!(scores[&1] > scores[&2]);
    assert!((scores[&4] - 1.0).abs() < 1e-12);
}

#[test]
fn named_graph_runs_every_algorithm() {
    let file = write_temp("a b\nb c\na c\nc d\n");
    let LoadedGraph::Named(graph) = load_edge_list(file.path(), false).expect("load") else {
        unreachable!("string labels");
    };

    for algorithm in ["crimp", "cycle-ratio", "degree", "betweenness", "pagerank"] {
        let scores = compute_scores(&graph, algorithm, CrimpConfig::default())
            .expect("known algorithm");
        assert_eq!(scores.len(), 4);
    }
}

// =============================================================================
// EXPERIMENT CONFIG
// =============================================================================

#[test]
fn compare_config_parses() {
    let file = write_temp(
        r#"
algorithms = ["crimp", "degree"]
top = 5
include_self_term = false
"#,
    );

    let config: CompareConfig = load_compare_config(file.path()).expect("parse");
    assert_eq!(
        config.algorithms.as_deref(),
        Some(&["crimp".to_string(), "degree".to_string()][..])
    );
    assert_eq!(config.top, Some(5));
    assert_eq!(config.include_self_term, Some(false));
}

#[test]
fn empty_compare_config_uses_defaults() {
    let file = write_temp("");
    let config = load_compare_config(file.path()).expect("parse");
    assert!(config.algorithms.is_none());
    assert!(config.top.is_none());
}

#[test]
fn invalid_compare_config_is_an_error() {
    let file = write_temp("algorithms = 42\n");
    assert!(load_compare_config(file.path()).is_err());
}
