//! # cyrank-core
//!
//! Deterministic cycle-based node importance for undirected graphs -
//! THE LOGIC.
//!
//! Two independent engines rank nodes by the cycles they participate in:
//!
//! - **CRimp** ([`crimp`]): enumerates chordless triangles and squares,
//!   builds per-node and per-pair membership counts, and aggregates
//!   `c_ij / c_jj` ratios plus a non-cyclic-degree correction. Rejects
//!   directed graphs. Self term configurable (default on).
//! - **Cycle Ratio** ([`cycle_ratio`]): the baseline — discovers cycles of
//!   any length by logical node removal and all-shortest-paths
//!   reconstruction, then aggregates shared-cycle ratios with no self term.
//!
//! The engines share only the graph model and the counting primitive; they
//! are deliberately not composed, and their differing self-term conventions
//! are a real asymmetry, not a bug.
//!
//! ## Architectural Constraints
//!
//! - Pure Rust: no async, no I/O, no network dependencies
//! - Deterministic: `BTreeMap`/`BTreeSet` only, scores are pure functions
//!   of graph structure regardless of insertion order
//! - Recompute-from-scratch: no incremental state between runs
//! - Moderate graphs only: cycle discovery is combinatorial by nature

// =============================================================================
// MODULES
// =============================================================================

pub mod chordless;
pub mod counts;
pub mod crimp;
pub mod cycle_ratio;
pub mod graph;
pub mod types;

// =============================================================================
// RE-EXPORTS: Core Types
// =============================================================================

pub use types::{Cycle, CyrankError, NodeId, pair};

// =============================================================================
// RE-EXPORTS: Graph Model
// =============================================================================

pub use graph::{Graph, SerializableGraph};

// =============================================================================
// RE-EXPORTS: Engines
// =============================================================================

pub use chordless::{find_squares, find_triangles};
pub use counts::{CycleCounts, non_cyclic_degree};
pub use crimp::{CrimpConfig, CrimpResult, crimp, crimp_with};
pub use cycle_ratio::{cycle_ratio, discover_cycles};
