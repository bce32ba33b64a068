//! # Edge-List Datasets
//!
//! Loading whitespace-separated edge lists (`u v` per line) into the core
//! graph model. Lines starting with `#` and blank lines are skipped; only
//! the first two tokens of a line are used.
//!
//! Node labels are cast to integers when every label in the file parses as
//! one, otherwise kept as strings. The two cases surface as the variants of
//! [`LoadedGraph`] so commands can dispatch generically.

use cyrank_core::{CyrankError, Graph};
use std::path::Path;

/// Maximum edge-list file size (50 MB).
///
/// Far beyond what the engines can process anyway; the cap exists to fail
/// fast on an accidental wrong file rather than while buffering it.
const MAX_EDGE_LIST_SIZE: u64 = 50 * 1024 * 1024;

// =============================================================================
// LOADED GRAPH
// =============================================================================

/// An edge list materialized with the narrowest identifier type that fits.
#[derive(Debug, Clone)]
pub enum LoadedGraph {
    /// Every label parsed as an unsigned integer.
    Numeric(Graph<u64>),
    /// At least one label is non-numeric; all labels kept as strings.
    Named(Graph<String>),
}

impl LoadedGraph {
    /// Total number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        match self {
            Self::Numeric(g) => g.node_count(),
            Self::Named(g) => g.node_count(),
        }
    }

    /// Total number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        match self {
            Self::Numeric(g) => g.edge_count(),
            Self::Named(g) => g.edge_count(),
        }
    }
}

// =============================================================================
// LOADER
// =============================================================================

/// Load a whitespace-separated edge list from a text file.
pub fn load_edge_list(path: &Path, directed: bool) -> Result<LoadedGraph, CyrankError> {
    validate_file_size(path)?;

    let contents = std::fs::read_to_string(path)
        .map_err(|e| CyrankError::Io(format!("cannot read '{}': {}", path.display(), e)))?;

    let edges = parse_edge_list(&contents)?;
    tracing::debug!(
        file = %path.display(),
        edges = edges.len(),
        directed,
        "edge list parsed"
    );

    Ok(build_graph(edges, directed))
}

/// Parse edge-list text into raw label pairs.
fn parse_edge_list(contents: &str) -> Result<Vec<(String, String)>, CyrankError> {
    let mut edges = Vec::new();

    for (index, raw) in contents.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut tokens = line.split_whitespace();
        let (Some(a), Some(b)) = (tokens.next(), tokens.next()) else {
            return Err(CyrankError::InvalidEdgeList {
                line: index + 1,
                reason: format!("expected two node labels, got '{line}'"),
            });
        };
        edges.push((a.to_string(), b.to_string()));
    }

    Ok(edges)
}

/// Build the graph, preferring integer identifiers when the whole file is
/// numeric (matches how published datasets label their nodes).
fn build_graph(edges: Vec<(String, String)>, directed: bool) -> LoadedGraph {
    let all_numeric = edges
        .iter()
        .all(|(a, b)| a.parse::<u64>().is_ok() && b.parse::<u64>().is_ok());

    if all_numeric {
        let mut graph = if directed {
            Graph::directed()
        } else {
            Graph::new()
        };
        for (a, b) in &edges {
            // Parse cannot fail: checked above.
            if let (Ok(u), Ok(v)) = (a.parse::<u64>(), b.parse::<u64>()) {
                graph.add_edge(u, v);
            }
        }
        LoadedGraph::Numeric(graph)
    } else {
        let mut graph = if directed {
            Graph::directed()
        } else {
            Graph::new()
        };
        for (a, b) in edges {
            graph.add_edge(a, b);
        }
        LoadedGraph::Named(graph)
    }
}

/// Validate file size before reading.
fn validate_file_size(path: &Path) -> Result<(), CyrankError> {
    let metadata = std::fs::metadata(path)
        .map_err(|e| CyrankError::Io(format!("cannot read file metadata: {}", e)))?;

    if metadata.len() > MAX_EDGE_LIST_SIZE {
        return Err(CyrankError::Io(format!(
            "file size {} bytes exceeds maximum allowed {} bytes",
            metadata.len(),
            MAX_EDGE_LIST_SIZE
        )));
    }
    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================
