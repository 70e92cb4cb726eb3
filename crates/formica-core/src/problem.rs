//! Problem — the contract a combinatorial problem fulfils to be solved by a colony.
//!
//! The engine knows nothing about cities or items. It asks the problem for
//! a construction graph, the initial pheromone trails and the heuristic
//! desirability of each edge, then lets the ants do the rest.

use crate::graph::Graph;
use crate::matrix::Matrix;

/// A problem that can be optimized by an ant colony.
///
/// Both matrices must be square with one row per graph node.
pub trait Problem {
    /// The construction graph `G = (C, L)` of this problem instance.
    fn construct_graph(&self) -> Graph;

    /// Initial trail strength on every edge.
    ///
    /// For TSP, a common choice is `m / C_nn` everywhere, where `m` is the
    /// number of ants and `C_nn` the cost of a greedy nearest-neighbour tour.
    fn init_pheromones(&self, num_agents: usize) -> Matrix;

    /// Static desirability of every edge, independent of pheromones.
    ///
    /// The colony recovers edge costs as `1 / heuristic`, so the heuristic
    /// must be the reciprocal of the edge weight (e.g. `1 / (d + 1e-8)`).
    fn init_heuristics(&self) -> Matrix;
}

impl<P: Problem + ?Sized> Problem for &P {
    fn construct_graph(&self) -> Graph {
        (**self).construct_graph()
    }

    fn init_pheromones(&self, num_agents: usize) -> Matrix {
        (**self).init_pheromones(num_agents)
    }

    fn init_heuristics(&self) -> Matrix {
        (**self).init_heuristics()
    }
}
