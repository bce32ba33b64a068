//! # cyrank CLI Module
//!
//! This module implements the CLI interface for cyrank.
//!
//! ## Available Commands
//!
//! - `rank` - Rank the nodes of an edge-list graph with one algorithm
//! - `cycles` - Enumerate the chordless triangles and squares
//! - `compare` - Run several algorithms side by side

mod commands;

use clap::{Parser, Subcommand};
use cyrank_core::CyrankError;
use std::path::PathBuf;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// cyrank - cycle-based node importance ranking
///
/// Ranks the nodes of an undirected graph by the cycles they participate
/// in (CRimp and the Cycle Ratio baseline) and compares against generic
/// centrality baselines.
#[derive(Parser, Debug)]
#[command(name = "cyrank")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress banner output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rank nodes with a single algorithm
    Rank {
        /// Path to the edge-list file
        #[arg(short, long)]
        file: PathBuf,

        /// Algorithm (crimp, cycle-ratio, degree, betweenness, pagerank)
        #[arg(short, long, default_value = "crimp")]
        algorithm: String,

        /// Treat the edge list as directed (CRimp will reject this)
        #[arg(long)]
        directed: bool,

        /// Exclude the CRimp self term (ignored by other algorithms)
        #[arg(long)]
        no_self_term: bool,

        /// Show only the top K nodes
        #[arg(short, long)]
        top: Option<usize>,
    },

    /// Enumerate chordless triangles and squares
    Cycles {
        /// Path to the edge-list file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Run several algorithms on one graph and compare their rankings
    Compare {
        /// Path to the edge-list file
        #[arg(short, long)]
        file: PathBuf,

        /// Show the top K nodes per algorithm
        #[arg(short, long, default_value = "10")]
        top: usize,

        /// Optional TOML experiment config (algorithms, top, self term)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub fn execute(cli: Cli) -> Result<(), CyrankError> {
    let json_mode = cli.json_mode;

    match cli.command {
        Commands::Rank {
            file,
            algorithm,
            directed,
            no_self_term,
            top,
        } => cmd_rank(&file, &algorithm, directed, no_self_term, top, json_mode),
        Commands::Cycles { file } => cmd_cycles(&file, json_mode),
        Commands::Compare { file, top, config } => {
            cmd_compare(&file, top, config.as_deref(), json_mode)
        }
    }
}
