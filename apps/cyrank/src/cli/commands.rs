//! # CLI Command Implementations
//!
//! This module contains the actual implementations of CLI commands: load
//! an edge list, run the requested engines, format rankings as text tables
//! or JSON documents.

use crate::baselines::{rank_betweenness, rank_degree, rank_pagerank};
use crate::datasets::{LoadedGraph, load_edge_list};
use cyrank_core::{
    CrimpConfig, Cycle, CyrankError, Graph, NodeId, crimp_with, cycle_ratio, find_squares,
    find_triangles,
};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt::Display;
use std::path::Path;
use std::time::Instant;

/// Every algorithm the binary can run.
pub const ALGORITHMS: &[&str] = &["crimp", "cycle-ratio", "degree", "betweenness", "pagerank"];

// =============================================================================
// SCORE COMPUTATION (generic over the identifier type)
// =============================================================================

/// Run one algorithm by name on a graph.
pub fn compute_scores<N: NodeId>(
    graph: &Graph<N>,
    algorithm: &str,
    config: CrimpConfig,
) -> Result<BTreeMap<N, f64>, CyrankError> {
    match algorithm {
        "crimp" => Ok(crimp_with(graph, config)?.scores),
        "cycle-ratio" => Ok(cycle_ratio(graph)),
        "degree" => Ok(rank_degree(graph)),
        "betweenness" => Ok(rank_betweenness(graph)),
        "pagerank" => Ok(rank_pagerank(graph)),
        other => Err(CyrankError::UnknownAlgorithm(other.to_string())),
    }
}

/// Scores sorted by descending value, ties broken by ascending node.
pub fn ranked<N: NodeId>(scores: &BTreeMap<N, f64>) -> Vec<(&N, f64)> {
    let mut rows: Vec<(&N, f64)> = scores.iter().map(|(n, s)| (n, *s)).collect();
    rows.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.0.cmp(b.0))
    });
    rows
}

// =============================================================================
// RANK COMMAND
// =============================================================================

/// Rank nodes with a single algorithm.
pub fn cmd_rank(
    file: &Path,
    algorithm: &str,
    directed: bool,
    no_self_term: bool,
    top: Option<usize>,
    json_mode: bool,
) -> Result<(), CyrankError> {
    let config = CrimpConfig {
        include_self_term: !no_self_term,
    };
    let graph = load_edge_list(file, directed)?;

    match graph {
        LoadedGraph::Numeric(g) => run_rank(&g, file, algorithm, config, top, json_mode),
        LoadedGraph::Named(g) => run_rank(&g, file, algorithm, config, top, json_mode),
    }
}

fn run_rank<N: NodeId + Display>(
    graph: &Graph<N>,
    file: &Path,
    algorithm: &str,
    config: CrimpConfig,
    top: Option<usize>,
    json_mode: bool,
) -> Result<(), CyrankError> {
    let started = Instant::now();
    let scores = compute_scores(graph, algorithm, config)?;
    tracing::info!(
        algorithm = %algorithm,
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "ranking complete"
    );

    let rows = ranked(&scores);
    let shown = top.unwrap_or(rows.len()).min(rows.len());

    if json_mode {
        let output = serde_json::json!({
            "file": file.to_string_lossy(),
            "algorithm": algorithm,
            "nodes": graph.node_count(),
            "edges": graph.edge_count(),
            "scores": rows[..shown]
                .iter()
                .map(|(n, s)| serde_json::json!({ "node": n.to_string(), "score": s }))
                .collect::<Vec<_>>(),
        });
        println!("{}", serde_json::to_string_pretty(&output).map_err(to_io)?);
    } else {
        println!(
            "{} on {} ({} nodes, {} edges)",
            algorithm,
            file.display(),
            graph.node_count(),
            graph.edge_count()
        );
        println!();
        print_rank_table(&rows[..shown]);
    }

    Ok(())
}

fn print_rank_table<N: NodeId + Display>(rows: &[(&N, f64)]) {
    println!("  {:>4}  {:<16}  {:>12}", "rank", "node", "score");
    for (position, (node, score)) in rows.iter().enumerate() {
        println!("  {:>4}  {:<16}  {:>12.4}", position + 1, node, score);
    }
}

// =============================================================================
// CYCLES COMMAND
// =============================================================================

/// Enumerate the chordless triangles and squares of an undirected graph.
pub fn cmd_cycles(file: &Path, json_mode: bool) -> Result<(), CyrankError> {
    match load_edge_list(file, false)? {
        LoadedGraph::Numeric(g) => run_cycles(&g, file, json_mode),
        LoadedGraph::Named(g) => run_cycles(&g, file, json_mode),
    }
}

fn run_cycles<N: NodeId + Display>(
    graph: &Graph<N>,
    file: &Path,
    json_mode: bool,
) -> Result<(), CyrankError> {
    let triangles = find_triangles(graph);
    let squares = find_squares(graph);

    if json_mode {
        let output = serde_json::json!({
            "file": file.to_string_lossy(),
            "triangles": triangles.iter().map(format_cycle).collect::<Vec<_>>(),
            "squares": squares.iter().map(format_cycle).collect::<Vec<_>>(),
        });
        println!("{}", serde_json::to_string_pretty(&output).map_err(to_io)?);
    } else {
        println!(
            "{}: {} chordless triangles, {} chordless squares",
            file.display(),
            triangles.len(),
            squares.len()
        );
        for cycle in triangles.iter().chain(squares.iter()) {
            println!("  {}", format_cycle(cycle));
        }
    }

    Ok(())
}

fn format_cycle<N: NodeId + Display>(cycle: &Cycle<N>) -> String {
    cycle
        .members()
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join("-")
}

// =============================================================================
// COMPARE COMMAND
// =============================================================================

/// Optional TOML experiment configuration for `compare`.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct CompareConfig {
    /// Algorithms to run, in order. Defaults to all of [`ALGORITHMS`].
    pub algorithms: Option<Vec<String>>,
    /// Top-K rows to show per algorithm.
    pub top: Option<usize>,
    /// CRimp self-term setting.
    pub include_self_term: Option<bool>,
}

/// Parse a TOML experiment config file.
pub fn load_compare_config(path: &Path) -> Result<CompareConfig, CyrankError> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| CyrankError::Io(format!("cannot read '{}': {}", path.display(), e)))?;
    toml::from_str(&contents)
        .map_err(|e| CyrankError::Io(format!("invalid config '{}': {}", path.display(), e)))
}

/// Run several algorithms on one graph and print their top-K side by side.
pub fn cmd_compare(
    file: &Path,
    top: usize,
    config_path: Option<&Path>,
    json_mode: bool,
) -> Result<(), CyrankError> {
    let config = match config_path {
        Some(path) => load_compare_config(path)?,
        None => CompareConfig::default(),
    };

    let algorithms: Vec<String> = config
        .algorithms
        .clone()
        .unwrap_or_else(|| ALGORITHMS.iter().map(|a| (*a).to_string()).collect());
    let top = config.top.unwrap_or(top);
    let crimp_config = CrimpConfig {
        include_self_term: config.include_self_term.unwrap_or(true),
    };

    match load_edge_list(file, false)? {
        LoadedGraph::Numeric(g) => {
            run_compare(&g, file, &algorithms, top, crimp_config, json_mode)
        }
        LoadedGraph::Named(g) => run_compare(&g, file, &algorithms, top, crimp_config, json_mode),
    }
}

fn run_compare<N: NodeId + Display>(
    graph: &Graph<N>,
    file: &Path,
    algorithms: &[String],
    top: usize,
    config: CrimpConfig,
    json_mode: bool,
) -> Result<(), CyrankError> {
    let mut results: Vec<(String, Vec<(String, f64)>)> = Vec::new();

    for algorithm in algorithms {
        let started = Instant::now();
        let scores = compute_scores(graph, algorithm, config)?;
        tracing::debug!(
            algorithm = %algorithm,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "algorithm finished"
        );

        let rows = ranked(&scores);
        let shown = top.min(rows.len());
        results.push((
            algorithm.clone(),
            rows[..shown]
                .iter()
                .map(|(n, s)| (n.to_string(), *s))
                .collect(),
        ));
    }

    if json_mode {
        let output = serde_json::json!({
            "file": file.to_string_lossy(),
            "nodes": graph.node_count(),
            "edges": graph.edge_count(),
            "rankings": results
                .iter()
                .map(|(algorithm, rows)| {
                    serde_json::json!({
                        "algorithm": algorithm,
                        "top": rows
                            .iter()
                            .map(|(n, s)| serde_json::json!({ "node": n, "score": s }))
                            .collect::<Vec<_>>(),
                    })
                })
                .collect::<Vec<_>>(),
        });
        println!("{}", serde_json::to_string_pretty(&output).map_err(to_io)?);
    } else {
        println!(
            "{} ({} nodes, {} edges)",
            file.display(),
            graph.node_count(),
            graph.edge_count()
        );
        for (algorithm, rows) in &results {
            println!();
            println!("== {algorithm} ==");
            println!("  {:>4}  {:<16}  {:>12}", "rank", "node", "score");
            for (position, (node, score)) in rows.iter().enumerate() {
                println!("  {:>4}  {:<16}  {:>12.4}", position + 1, node, score);
            }
        }
    }

    Ok(())
}

fn to_io(e: serde_json::Error) -> CyrankError {
    CyrankError::Io(format!("JSON serialization failed: {}", e))
}

// =============================================================================
// TESTS
// =============================================================================
