//! Formica TSP Prelude — convenient imports for common usage.
//!
//! ```rust
//! use formica_tsp::prelude::*;
//! ```

pub use crate::greedy::{best_greedy_cost, best_greedy_tour, greedy_cost, nearest_neighbor_tour};
pub use crate::instance::DistanceMatrix;
pub use crate::problem::{TravelingSalesman, HEURISTIC_EPSILON};

// Re-export from core
pub use formica_core::prelude::*;
