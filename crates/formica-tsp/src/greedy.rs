//! Greedy nearest-neighbour tours.
//!
//! Used to seed the initial pheromone level and as a baseline the colony
//! should never do worse than.

use crate::instance::DistanceMatrix;
use formica_core::types::{Edge, NodeId, Solution};

/// Build a tour from `start` by always moving to the nearest unvisited node.
///
/// Ties go to the lowest node id. The last edge returns to `start`.
/// Out-of-range starts are clamped to the last node.
pub fn nearest_neighbor_tour(distances: &DistanceMatrix, start: NodeId) -> Solution {
    let n = distances.dim();
    let start = start.min(n.saturating_sub(1));
    let mut visited = vec![false; n];
    let mut edges = Vec::with_capacity(n);
    let mut current = start;
    visited[start] = true;

    for _ in 1..n {
        let next = (0..n)
            .filter(|&j| !visited[j])
            .min_by(|&x, &y| {
                distances
                    .distance(current, x)
                    .total_cmp(&distances.distance(current, y))
                    .then(x.cmp(&y))
            });
        let Some(next) = next else { break };

        visited[next] = true;
        edges.push(Edge::new(current, next));
        current = next;
    }
    edges.push(Edge::new(current, start));

    let cost = distances.tour_cost(&edges);
    Solution::new(edges, cost)
}

/// Cost of the nearest-neighbour tour from `start`.
pub fn greedy_cost(distances: &DistanceMatrix, start: NodeId) -> f64 {
    nearest_neighbor_tour(distances, start).cost
}

/// The cheapest nearest-neighbour tour over every start node.
pub fn best_greedy_tour(distances: &DistanceMatrix) -> Solution {
    (0..distances.dim())
        .map(|start| nearest_neighbor_tour(distances, start))
        .min_by(|a, b| a.cost.total_cmp(&b.cost))
        .unwrap_or_else(|| Solution::new(Vec::new(), 0.0))
}

/// Cost of [`best_greedy_tour`].
pub fn best_greedy_cost(distances: &DistanceMatrix) -> f64 {
    best_greedy_tour(distances).cost
}
