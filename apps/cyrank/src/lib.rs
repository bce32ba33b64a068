//! # cyrank - THE BINARY (library surface)
//!
//! Everything outside the deterministic core: dataset loading, the generic
//! centrality baselines, and the CLI command implementations. Exposed as a
//! library so the integration tests can drive the same code paths as the
//! binary.

pub mod baselines;
pub mod cli;
pub mod datasets;
