//! The traveling salesman problem as a colony [`Problem`].

use crate::greedy::nearest_neighbor_tour;
use crate::instance::DistanceMatrix;
use formica_core::graph::Graph;
use formica_core::matrix::Matrix;
use formica_core::problem::Problem;
use formica_core::types::NodeId;

/// Added to every distance before inverting it into a heuristic.
pub const HEURISTIC_EPSILON: f64 = 1e-8;

/// A symmetric TSP instance over a complete graph.
#[derive(Debug, Clone)]
pub struct TravelingSalesman {
    distances: DistanceMatrix,
    greedy_start: NodeId,
}

impl TravelingSalesman {
    pub fn new(distances: DistanceMatrix) -> Self {
        Self {
            distances,
            greedy_start: 0,
        }
    }

    /// Start node of the greedy tour that seeds the pheromone level.
    ///
    /// Out-of-range nodes are clamped to the last node.
    pub fn with_greedy_start(mut self, start: NodeId) -> Self {
        self.greedy_start = start.min(self.distances.dim().saturating_sub(1));
        self
    }

    pub fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }

    pub fn node_count(&self) -> usize {
        self.distances.dim()
    }

    pub fn greedy_start(&self) -> NodeId {
        self.greedy_start
    }

    /// Cost of the nearest-neighbour tour used for pheromone seeding.
    pub fn greedy_cost(&self) -> f64 {
        nearest_neighbor_tour(&self.distances, self.greedy_start).cost
    }
}

impl Problem for TravelingSalesman {
    /// Complete graph, self-loops included.
    fn construct_graph(&self) -> Graph {
        Graph::complete(self.node_count())
    }

    /// `num_agents / C_nn` on every edge, with `C_nn` computed once.
    ///
    /// A zero-cost greedy tour (every distance zero) seeds `num_agents`.
    fn init_pheromones(&self, num_agents: usize) -> Matrix {
        let cost = self.greedy_cost();
        let level = if cost.is_finite() && cost > 0.0 {
            num_agents as f64 / cost
        } else {
            num_agents as f64
        };
        Matrix::filled(self.node_count(), level)
    }

    /// `1 / (d + 1e-8)` on every edge.
    fn init_heuristics(&self) -> Matrix {
        Matrix::from_fn(self.node_count(), |i, j| {
            1.0 / (self.distances.distance(i, j) + HEURISTIC_EPSILON)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formica_core::types::Edge;

    fn square() -> TravelingSalesman {
        TravelingSalesman::new(
            DistanceMatrix::from_rows(vec![
                vec![0.0, 1.0, 2.0, 3.0],
                vec![1.0, 0.0, 1.0, 2.0],
                vec![2.0, 1.0, 0.0, 1.0],
                vec![3.0, 2.0, 1.0, 0.0],
            ])
            .unwrap(),
        )
    }

    #[test]
    fn graph_is_complete() {
        let graph = square().construct_graph();
        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.edge_count(), 16);
    }

    #[test]
    fn pheromones_are_agents_over_greedy_cost() {
        let trails = square().init_pheromones(12);
        assert!(trails.values().iter().all(|&v| v == 2.0));
    }

    #[test]
    fn heuristics_invert_distances() {
        let h = square().init_heuristics();
        let d = 1.0 / h.at(Edge::new(0, 3)) - HEURISTIC_EPSILON;
        assert!((d - 3.0).abs() < 1e-9);
        assert!(h.at(Edge::new(2, 2)) > 1e7);
    }

    #[test]
    fn zero_distances_seed_agent_count() {
        let flat = TravelingSalesman::new(
            DistanceMatrix::from_rows(vec![vec![0.0; 3]; 3]).unwrap(),
        );
        assert!(flat.init_pheromones(5).values().iter().all(|&v| v == 5.0));
    }

    #[test]
    fn greedy_start_is_clamped() {
        let tsp = square().with_greedy_start(99);
        assert_eq!(tsp.greedy_start(), 3);
        assert_eq!(tsp.greedy_cost(), 6.0);
    }
}
