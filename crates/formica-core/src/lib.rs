//! # Formica Core
//!
//! Core traits and types for Formica ant colony optimization.
//!
//! This crate holds everything the engine and the problems agree on:
//!
//! - **Graph** — the static construction graph ants walk on
//! - **Matrix** — square `(node, node)` tables for pheromones and heuristics
//! - **Problem** — the contract a combinatorial problem fulfils to be solved
//! - **Sampler** — roulette-wheel selection from unnormalized scores
//! - **AcoParams** — α, β, ρ and the evaporation rule
//!
//! ## Quick Start
//!
//! ```rust
//! use formica_core::prelude::*;
//!
//! // Every ordered pair of 3 nodes, self-loops included
//! let graph = Graph::complete(3);
//! assert_eq!(graph.edge_count(), 9);
//!
//! // A uniform pheromone table
//! let trails = Matrix::filled(3, 0.5);
//! assert_eq!(trails.at(Edge::new(0, 2)), 0.5);
//! ```

pub mod error;
pub mod graph;
pub mod matrix;
pub mod params;
pub mod prelude;
pub mod problem;
pub mod sampler;
pub mod types;
