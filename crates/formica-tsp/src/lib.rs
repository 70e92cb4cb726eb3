//! # Formica TSP
//!
//! The symmetric traveling salesman problem as a colony problem.
//!
//! ## Quick Start
//!
//! ```rust
//! use formica_tsp::prelude::*;
//!
//! let distances = DistanceMatrix::parse("0 1 2\n1 0 1\n2 1 0\n").unwrap();
//! let tsp = TravelingSalesman::new(distances);
//!
//! assert_eq!(tsp.construct_graph().node_count(), 3);
//! assert_eq!(tsp.greedy_cost(), 4.0);
//! ```

pub mod greedy;
pub mod instance;
pub mod prelude;
pub mod problem;

pub use greedy::{best_greedy_cost, best_greedy_tour, greedy_cost, nearest_neighbor_tour};
pub use instance::DistanceMatrix;
pub use problem::TravelingSalesman;
