//! # Core Type Definitions
//!
//! This module contains the shared types for the cyrank deterministic
//! ranking engines:
//! - The `NodeId` identifier bound
//! - Canonical unordered pairs (`pair`)
//! - Cycle representation (`Cycle`)
//! - Error types (`CyrankError`)
//!
//! ## Determinism Guarantees
//!
//! All types in this module:
//! - Implement `Ord` for deterministic ordering in `BTreeMap`/`BTreeSet`
//! - Use canonical (sorted-member) identity for cycles, so deduplication
//!   behaves identically for integer and string identifiers

use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// NODE IDENTIFIERS
// =============================================================================

/// Bound alias for node identifiers.
///
/// Edge lists in the wild carry either integer or string labels; the engines
/// are generic over any totally-ordered, cloneable identifier. `Ord` is what
/// makes `BTreeMap`-based accumulation deterministic.
pub trait NodeId: Clone + Ord + std::fmt::Debug {}

impl<T: Clone + Ord + std::fmt::Debug> NodeId for T {}

/// Canonical unordered pair: always `(min, max)`.
///
/// Every `c_ij` lookup and insertion goes through this so that `(u, v)` and
/// `(v, u)` address the same count.
#[must_use]
pub fn pair<N: NodeId>(u: N, v: N) -> (N, N) {
    if u <= v { (u, v) } else { (v, u) }
}

// =============================================================================
// CYCLE
// =============================================================================

/// A cycle as an unordered set of distinct nodes, stored canonically.
///
/// Members are held sorted and deduplicated, so two discoveries of the same
/// cycle through different traversal orders compare equal. This is the
/// deduplication identity used by both engines.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cycle<N: NodeId>(Vec<N>);

impl<N: NodeId> Cycle<N> {
    /// Build a cycle from its members, canonicalizing order and dropping
    /// duplicates.
    #[must_use]
    pub fn new(members: impl IntoIterator<Item = N>) -> Self {
        let mut nodes: Vec<N> = members.into_iter().collect();
        nodes.sort();
        nodes.dedup();
        Self(nodes)
    }

    /// The members in canonical ascending order.
    #[must_use]
    pub fn members(&self) -> &[N] {
        &self.0
    }

    /// Number of distinct nodes on the cycle.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for the degenerate empty cycle (never produced by the engines).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether the cycle contains the given node.
    #[must_use]
    pub fn contains(&self, node: &N) -> bool {
        self.0.binary_search(node).is_ok()
    }

    /// All unordered member pairs in canonical order.
    ///
    /// A cycle of size `s` yields `C(s, 2)` pairs.
    pub fn member_pairs(&self) -> impl Iterator<Item = (N, N)> + '_ {
        self.0.iter().enumerate().flat_map(move |(i, u)| {
            self.0[i + 1..]
                .iter()
                .map(move |v| (u.clone(), v.clone()))
        })
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur in the cyrank system.
///
/// The engines either complete fully or fail validation before starting;
/// there are no recoverable mid-computation failures. The I/O variants are
/// used by the binary's edge-list loader.
#[derive(Debug, Error)]
pub enum CyrankError {
    /// CRimp requires an undirected graph. Non-retryable.
    #[error("CRimp requires an undirected graph")]
    DirectedGraph,

    /// An I/O error occurred while reading an input file.
    #[error("I/O error: {0}")]
    Io(String),

    /// An edge-list line could not be parsed.
    #[error("invalid edge list at line {line}: {reason}")]
    InvalidEdgeList { line: usize, reason: String },

    /// An unrecognized ranking algorithm was requested.
    #[error("unknown algorithm: {0}")]
    UnknownAlgorithm(String),
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_is_canonical() {
        assert_eq!(pair(3u64, 1), (1, 3));
        assert_eq!(pair(1u64, 3), (1, 3));
        assert_eq!(pair("b".to_string(), "a".to_string()), ("a".into(), "b".into()));
    }

    #[test]
    fn cycle_identity_ignores_member_order() {
        let a = Cycle::new([3u64, 1, 2]);
        let b = Cycle::new([2u64, 3, 1]);
        assert_eq!(a, b);
        assert_eq!(a.members(), &[1, 2, 3]);
    }

    #[test]
    fn cycle_drops_duplicate_members() {
        let c = Cycle::new([1u64, 2, 2, 3]);
        assert_eq!(c.len(), 3);
    }

    #[test]
    fn member_pairs_cover_all_combinations() {
        let c = Cycle::new([1u64, 2, 3, 4]);
        let pairs: Vec<_> = c.member_pairs().collect();
        assert_eq!(pairs.len(), 6);
        assert!(pairs.contains(&(1, 4)));
        assert!(pairs.contains(&(2, 3)));
    }

    #[test]
    fn cycles_order_canonically() {
        let a = Cycle::new([1u64, 2, 3]);
        let b = Cycle::new([1u64, 2, 4]);
        assert!(a < b);
    }
}
