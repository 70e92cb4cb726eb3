//! Formica Proof of Concept — 20-City Traveling Salesman
//!
//! 200 ants, 100 iterations, α = 1, β = 3, ρ = 0.5. Pass a distance
//! matrix file as the first argument, or let the demo scatter 20 random
//! points in the unit square.

use formica_core::error::Result;
use formica_core::problem::Problem;
use formica_runtime::colony::{Colony, ColonyConfig, ColonyEvent};
use formica_runtime::metrics;
use formica_tsp::{best_greedy_cost, DistanceMatrix, TravelingSalesman};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::path::Path;

const CITIES: usize = 20;
const ANTS: usize = 200;
const ITERATIONS: u64 = 100;
const SEED: u64 = 1337;

fn main() -> Result<()> {
    println!("╔══════════════════════════════════════════════════════╗");
    println!("║  FORMICA — Ant Colony Optimization                  ║");
    println!("║  Proof of Concept: 20-City Traveling Salesman       ║");
    println!("╚══════════════════════════════════════════════════════╝");
    println!();

    // --- Build the instance ---
    println!("── Instance ────────────────────────────────────────");
    println!();

    let distances = match std::env::args().nth(1) {
        Some(path) => {
            println!("  [file] {}", path);
            DistanceMatrix::load(Path::new(&path))?
        }
        None => {
            let mut rng = ChaCha8Rng::seed_from_u64(SEED);
            let points = DistanceMatrix::random_points(CITIES, &mut rng);
            for (i, (x, y)) in points.iter().enumerate() {
                println!("  [city {:>2}] at ({:.3}, {:.3})", i, x, y);
            }
            DistanceMatrix::from_coords(&points)?
        }
    };
    let tsp = TravelingSalesman::new(distances);
    let greedy = best_greedy_cost(tsp.distances());
    println!();
    println!("  Cities:               {}", tsp.node_count());
    println!("  Greedy tour (node 0): {:.4}", tsp.greedy_cost());
    println!("  Best greedy tour:     {:.4}", greedy);
    println!("  Initial trail:        {:.4}", tsp.init_pheromones(ANTS)[(0, 1)]);
    println!();

    // --- Run the colony ---
    println!("── Running Simulation ({} iterations) ───────────────", ITERATIONS);
    println!();

    let mut colony = Colony::from_config(
        &tsp,
        ColonyConfig {
            num_agents: ANTS,
            seed: Some(SEED),
            ..Default::default()
        },
    )?;

    for (iteration, events) in colony.run_simulation(ITERATIONS)?.iter().enumerate() {
        for event in events {
            if let ColonyEvent::NewBest { agent, cost } = event {
                println!("  [iteration {:>3}] ant {:>3} found {:.4}", iteration, agent, cost);
            }
        }
    }
    println!();

    // --- Read out a tour ---
    println!("── Results ─────────────────────────────────────────");
    println!();

    let tour = colony.get_solution()?;
    for edge in &tour.edges {
        println!("{}", edge);
    }
    println!();
    println!("  Read-out tour:        {:.4}", tsp.distances().tour_cost(&tour.edges));
    if let Some(best) = colony.best_solution() {
        println!("  Best tour:            {:.4}", tsp.distances().tour_cost(&best.edges));
    }
    println!("  Greedy baseline:      {:.4}", greedy);
    println!();

    metrics::print_report(&metrics::compute(&colony));
    Ok(())
}

