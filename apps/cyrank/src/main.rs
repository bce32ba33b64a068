//! # cyrank - Cycle-Based Node Ranking
//!
//! The main binary for the cyrank ranking engines.
//!
//! This application provides:
//! - Edge-list dataset loading
//! - CRimp and Cycle Ratio rankings (cyrank-core)
//! - Generic centrality baselines for comparison
//!
//! ## Usage
//!
//! ```bash
//! # Rank with CRimp (default algorithm)
//! cyrank rank -f data/jazz.txt
//!
//! # The expensive baseline engine
//! cyrank rank -f data/jazz.txt -a cycle-ratio --top 20
//!
//! # List chordless cycles, compare every algorithm
//! cyrank cycles -f data/jazz.txt
//! cyrank compare -f data/jazz.txt --top 10
//! ```

use clap::Parser;
use cyrank::cli;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

fn main() {
    // Initialize tracing — CYRANK_LOG_FORMAT=json enables machine-parseable output.
    let log_format = std::env::var("CYRANK_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "cyrank=info".into());

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer())
                .init();
        }
    }

    // Parse CLI arguments
    let cli = cli::Cli::parse();

    // Display startup banner
    if !cli.quiet && !cli.json_mode {
        print_banner();
    }

    // Execute command
    if let Err(e) = cli::execute(cli) {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Print the cyrank startup banner.
fn print_banner() {
    println!(
        "cyrank v{} — cycle-based node importance\n",
        env!("CARGO_PKG_VERSION")
    );
}
