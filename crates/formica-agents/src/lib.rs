//! # Formica Agents
//!
//! The agents that walk a colony's construction graph.
//!
//! - **Ant** — builds one Hamiltonian cycle per cycle by pheromone-guided sampling
//! - **FitnessTracker** — per-ant record of tour costs and degenerate steps

pub mod ant;
pub mod fitness;
pub mod prelude;
