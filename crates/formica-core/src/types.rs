//! Shared types used across all Formica crates.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A node of the construction graph (for TSP, a city).
///
/// Nodes are 0-indexed and contiguous.
pub type NodeId = usize;

/// Iteration counter for the simulation.
pub type Iteration = u64;

/// A directed edge `a -> b` of the construction graph.
///
/// Undirected problems store both directions as separate edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub a: NodeId,
    pub b: NodeId,
}

impl Edge {
    pub fn new(a: NodeId, b: NodeId) -> Self {
        Self { a, b }
    }

    /// Whether this edge starts and ends at the same node.
    pub fn is_self_loop(&self) -> bool {
        self.a == self.b
    }

    /// The same edge traversed in the opposite direction.
    pub fn reversed(&self) -> Self {
        Self { a: self.b, b: self.a }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.a, self.b)
    }
}

/// A closed tour produced by the colony, with its cost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    /// Traversed edges in order. The last edge returns to the first node.
    pub edges: Vec<Edge>,
    /// Total cost of the tour.
    pub cost: f64,
}

impl Solution {
    pub fn new(edges: Vec<Edge>, cost: f64) -> Self {
        Self { edges, cost }
    }

    /// Nodes in visiting order, starting at the tour's start node.
    ///
    /// The closing return to the start is not repeated.
    pub fn nodes(&self) -> Vec<NodeId> {
        self.edges.iter().map(|e| e.a).collect()
    }

    /// Number of edges in the tour.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Check that the edges form a Hamiltonian cycle over `node_count` nodes.
    ///
    /// Consecutive edges must chain, the last edge must return to the start,
    /// and every node must be left exactly once.
    pub fn is_hamiltonian_cycle(&self, node_count: usize) -> bool {
        is_hamiltonian_cycle(&self.edges, node_count)
    }
}

/// Check that `edges` form a Hamiltonian cycle over `node_count` nodes.
pub fn is_hamiltonian_cycle(edges: &[Edge], node_count: usize) -> bool {
    if node_count == 0 || edges.len() != node_count {
        return false;
    }
    let mut seen = vec![false; node_count];
    for (i, edge) in edges.iter().enumerate() {
        if edge.a >= node_count || edge.b >= node_count || edge.is_self_loop() {
            return false;
        }
        if seen[edge.a] {
            return false;
        }
        seen[edge.a] = true;
        let next = &edges[(i + 1) % edges.len()];
        if edge.b != next.a {
            return false;
        }
    }
    seen.iter().all(|&s| s)
}
