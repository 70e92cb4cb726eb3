//! Formica CLI - Command-line interface for ant colony optimization.

mod commands;
mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::solve::SolveArgs;

#[derive(Parser)]
#[command(name = "formica")]
#[command(author, version, about = "Formica - Ant colony optimization for routing problems", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (debug logging unless RUST_LOG is set)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new Formica project
    Init {
        /// Project directory (default: current directory)
        #[arg(short, long)]
        path: Option<String>,
    },

    /// Solve a TSP instance
    Solve(SolveArgs),

    /// Write a random distance matrix file
    Generate {
        /// Output file path
        #[arg(default_value = "dist_mat")]
        output: String,

        /// Number of nodes
        #[arg(short, long, default_value = "20")]
        nodes: usize,

        /// Random seed
        #[arg(short, long)]
        seed: Option<u64>,

        /// Uniform random weights instead of Euclidean distances between points
        #[arg(long)]
        uniform: bool,
    },
}

/// Install the log subscriber. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Init { path } => commands::init::run(path),
        Commands::Solve(args) => commands::solve::run(args, cli.verbose),
        Commands::Generate { output, nodes, seed, uniform } => {
            commands::generate::run(&output, nodes, seed, uniform)
        }
    }
}
