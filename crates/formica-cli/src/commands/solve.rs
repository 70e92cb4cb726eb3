//! Solve a TSP instance with an ant colony.

use anyhow::{bail, Context, Result};
use clap::Args;
use colored::Colorize;
use formica::prelude::*;
use formica::runtime::{export, metrics};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;

use crate::commands::generate::{random_instance, rng_from};
use crate::config::Config;

#[derive(Debug, Default, Args)]
pub struct SolveArgs {
    /// Distance matrix file (one whitespace-separated row per line)
    #[arg(short, long)]
    pub matrix: Option<PathBuf>,

    /// Node count of a generated instance
    #[arg(short, long)]
    pub nodes: Option<usize>,

    /// Generate uniform random weights instead of Euclidean distances between points
    #[arg(long)]
    pub uniform: bool,

    /// Number of ants
    #[arg(short, long)]
    pub agents: Option<usize>,

    /// Number of iterations
    #[arg(short, long)]
    pub iterations: Option<u64>,

    /// Pheromone exponent
    #[arg(long)]
    pub alpha: Option<f64>,

    /// Heuristic exponent
    #[arg(long)]
    pub beta: Option<f64>,

    /// Evaporation parameter
    #[arg(long)]
    pub rho: Option<f64>,

    /// Evaporation rule: "retain" (τ·ρ) or "decay" (τ·(1-ρ))
    #[arg(long)]
    pub evaporation: Option<String>,

    /// Random seed for the instance and the colony
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Run each iteration's tours in parallel
    #[arg(long)]
    pub parallel: bool,

    /// Print pheromone and convergence metrics
    #[arg(long)]
    pub metrics: bool,

    /// Write the read-out tour as JSON to this file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Write a JSON snapshot of the final colony state to this file
    #[arg(long)]
    pub snapshot: Option<PathBuf>,
}

/// Merge command-line flags over the file configuration.
fn apply_overrides(config: &mut Config, args: &SolveArgs) -> Result<()> {
    let colony = &mut config.colony;
    if let Some(agents) = args.agents {
        colony.agents = agents;
    }
    if let Some(iterations) = args.iterations {
        colony.iterations = iterations;
    }
    if let Some(alpha) = args.alpha {
        colony.alpha = alpha;
    }
    if let Some(beta) = args.beta {
        colony.beta = beta;
    }
    if let Some(rho) = args.rho {
        colony.rho = rho;
    }
    if let Some(rule) = &args.evaporation {
        colony.evaporation = match EvaporationRule::parse(rule) {
            Some(rule) => rule,
            None => bail!("unknown evaporation rule {:?} (expected \"retain\" or \"decay\")", rule),
        };
    }
    if args.seed.is_some() {
        colony.seed = args.seed;
    }
    if args.parallel {
        colony.parallel = true;
    }

    let problem = &mut config.problem;
    if let Some(nodes) = args.nodes {
        problem.nodes = nodes;
    }
    if args.matrix.is_some() {
        problem.matrix = args.matrix.clone();
    }
    Ok(())
}

/// Load the configured matrix file, or generate an instance the way
/// `formica generate` does.
fn load_instance(config: &Config, args: &SolveArgs) -> Result<DistanceMatrix> {
    let distances = match &config.problem.matrix {
        Some(path) => {
            println!("{} Loading {}...", "→".blue(), path.display());
            DistanceMatrix::load(path)
                .with_context(|| format!("Failed to load distance matrix {}", path.display()))?
        }
        None => {
            println!(
                "{} Generating random {}-node instance...",
                "→".blue(),
                config.problem.nodes.to_string().cyan()
            );
            random_instance(
                config.problem.nodes,
                args.uniform,
                &mut rng_from(config.colony.seed),
            )?
        }
    };
    Ok(distances)
}

pub fn run(args: SolveArgs, verbose: bool) -> Result<()> {
    let mut config = Config::load()?;
    apply_overrides(&mut config, &args)?;

    let distances = load_instance(&config, &args)?;

    let tsp = TravelingSalesman::new(distances).with_greedy_start(config.problem.greedy_start);
    let mut colony = ColonyBuilder::new()
        .with_config(config.colony.to_colony_config())
        .build(&tsp)
        .context("Failed to build colony")?;

    let iterations = config.colony.iterations;
    println!(
        "{} Running {} ants for {} iterations on {} nodes...",
        "→".blue(),
        config.colony.agents.to_string().cyan(),
        iterations.to_string().cyan(),
        tsp.node_count().to_string().cyan()
    );

    let pb = ProgressBar::new(iterations);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} iterations {msg}")
            .context("Invalid progress template")?
            .progress_chars("#>-"),
    );

    for _ in 0..iterations {
        let events = colony.iterate()?;
        for event in &events {
            if let ColonyEvent::NewBest { agent, cost } = event {
                pb.set_message(format!("best {:.4}", cost));
                if verbose {
                    pb.println(format!("  new best {:.4} from ant {}", cost, agent));
                }
            }
        }
        pb.inc(1);
    }
    pb.finish_with_message("done");

    let tour = colony.get_solution()?;
    for edge in &tour.edges {
        println!("{}", edge);
    }

    let distances = tsp.distances();
    let greedy = best_greedy_cost(distances);
    println!();
    println!("{} Solution found!", "✓".green().bold());
    println!(
        "  Read-out tour:   {}",
        format!("{:.4}", distances.tour_cost(&tour.edges)).green()
    );
    if let Some(best) = colony.best_solution() {
        println!(
            "  Best tour:       {}",
            format!("{:.4}", distances.tour_cost(&best.edges)).green()
        );
    }
    println!("  Greedy baseline: {}", format!("{:.4}", greedy).yellow());

    let stats = colony.stats();
    if stats.uniform_fallbacks > 0 {
        println!(
            "  {} {} steps fell back to uniform choice",
            "•".yellow(),
            stats.uniform_fallbacks
        );
    }

    if args.metrics {
        println!();
        metrics::print_report(&metrics::compute(&colony));
    }

    if let Some(path) = &args.output {
        export::save_solution(&tour, path)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!("  {} Wrote {}", "✓".green(), path.display());
    }
    if let Some(path) = &args.snapshot {
        export::save_snapshot(&colony, path)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!("  {} Wrote {}", "✓".green(), path.display());
    }

    Ok(())
}
