//! # Formica
//!
//! Ant Colony Optimization over pluggable construction graphs.
//!
//! A colony of simulated ants repeatedly builds Hamiltonian cycles on a
//! construction graph. Each step is sampled with probability proportional
//! to `τ^α · η^β`, where `τ` is the pheromone trail and `η` the static
//! heuristic. After every iteration the trails evaporate and each tour
//! reinforces its edges by `1 / cost`, so short tours attract more ants.
//!
//! ## Quick Start
//!
//! ```rust
//! use formica::prelude::*;
//!
//! let distances = DistanceMatrix::from_rows(vec![
//!     vec![0.0, 1.0, 2.0, 3.0],
//!     vec![1.0, 0.0, 1.0, 2.0],
//!     vec![2.0, 1.0, 0.0, 1.0],
//!     vec![3.0, 2.0, 1.0, 0.0],
//! ])
//! .unwrap();
//! let tsp = TravelingSalesman::new(distances);
//!
//! let mut colony = ColonyBuilder::new()
//!     .num_agents(10)
//!     .seed(42)
//!     .build(&tsp)
//!     .unwrap();
//! colony.run_simulation(50).unwrap();
//!
//! let tour = colony.get_solution().unwrap();
//! assert!(tour.is_hamiltonian_cycle(4));
//! for edge in &tour.edges {
//!     println!("{edge}");
//! }
//! ```
//!
//! ## Architecture
//!
//! Formica is organized into several crates:
//!
//! - [`formica_core`] - Graph, matrices, the `Problem` trait, sampler, parameters, errors
//! - [`formica_agents`] - The ant and its fitness tracking
//! - [`formica_runtime`] - Colony engine, builder, metrics, JSON export
//! - [`formica_tsp`] - Traveling salesman adapter and greedy baseline
//!
//! ## Parameters
//!
//! | Parameter | Default | Meaning |
//! |-----------|---------|---------|
//! | α | 1.0 | Weight of the pheromone trail |
//! | β | 3.0 | Weight of the heuristic |
//! | ρ | 0.5 | Evaporation parameter |
//! | evaporation | `Retain` | `Retain` keeps `τ · ρ`, `Decay` keeps `τ · (1 - ρ)` |
//!
//! ## Custom Problems
//!
//! Anything that can supply a graph and two square matrices can be solved:
//!
//! ```rust
//! use formica::prelude::*;
//!
//! struct Ring(usize);
//!
//! impl Problem for Ring {
//!     fn construct_graph(&self) -> Graph {
//!         Graph::complete(self.0)
//!     }
//!     fn init_pheromones(&self, num_agents: usize) -> Matrix {
//!         Matrix::filled(self.0, num_agents as f64)
//!     }
//!     fn init_heuristics(&self) -> Matrix {
//!         Matrix::from_fn(self.0, |i, j| {
//!             let d = (i as f64 - j as f64).abs();
//!             1.0 / (d.min(self.0 as f64 - d) + 1e-8)
//!         })
//!     }
//! }
//!
//! let mut colony = Colony::new(&Ring(6), 4).unwrap();
//! colony.run_simulation(10).unwrap();
//! assert!(colony.best_solution().unwrap().is_hamiltonian_cycle(6));
//! ```

// Re-export all subcrates
pub use formica_agents as agents;
pub use formica_core as core;
pub use formica_runtime as runtime;
pub use formica_tsp as tsp;

/// Prelude module for convenient imports.
///
/// ```rust
/// use formica::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use formica_core::types::{is_hamiltonian_cycle, Edge, Iteration, NodeId, Solution};
    pub use formica_core::graph::Graph;
    pub use formica_core::matrix::Matrix;
    pub use formica_core::params::{AcoParams, EvaporationRule};
    pub use formica_core::sampler::sample;

    // Core traits
    pub use formica_core::problem::Problem;

    // Error types
    pub use formica_core::error::{ConfigError, FormicaError, InputError, Result, TourError};

    // Agents
    pub use formica_agents::ant::{Ant, CycleOutcome};
    pub use formica_agents::fitness::{AntFitness, FitnessTracker};

    // Runtime
    pub use formica_runtime::colony::{Colony, ColonyConfig, ColonyEvent, ColonySnapshot, ColonyStats};
    pub use formica_runtime::colony_builder::ColonyBuilder;
    pub use formica_runtime::metrics::{ColonyMetrics, ConvergenceMetrics, PheromoneMetrics};

    // TSP
    pub use formica_tsp::{
        best_greedy_cost, best_greedy_tour, greedy_cost, nearest_neighbor_tour, DistanceMatrix,
        TravelingSalesman,
    };
}
