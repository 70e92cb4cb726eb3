//! Graph — the static construction graph agents walk on.
//!
//! Storage only: a node list plus, per node, its outgoing edges.
//! Entry `i` of the adjacency list holds exactly the edges whose tail is `i`.

use crate::types::{Edge, NodeId};
use petgraph::algo::kosaraju_scc;
use petgraph::graph::DiGraph;
use serde::Serialize;

/// A directed construction graph `G = (C, L)`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Graph {
    nodes: Vec<NodeId>,
    edges: Vec<Vec<Edge>>,
}

impl Graph {
    /// Create a graph with `node_count` nodes and no edges.
    pub fn with_nodes(node_count: usize) -> Self {
        Self {
            nodes: (0..node_count).collect(),
            edges: vec![Vec::new(); node_count],
        }
    }

    /// Connect every ordered pair of nodes, self-loops included.
    ///
    /// Consumers must skip the self-loops when walking.
    pub fn complete(node_count: usize) -> Self {
        let edges = (0..node_count)
            .map(|a| (0..node_count).map(|b| Edge::new(a, b)).collect())
            .collect();
        Self {
            nodes: (0..node_count).collect(),
            edges,
        }
    }

    /// Add a directed edge. Edges touching unknown nodes are ignored.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId) {
        if a < self.nodes.len() && b < self.nodes.len() {
            self.edges[a].push(Edge::new(a, b));
        }
    }

    /// Add both directions of an undirected edge.
    pub fn add_undirected_edge(&mut self, a: NodeId, b: NodeId) {
        self.add_edge(a, b);
        if a != b {
            self.add_edge(b, a);
        }
    }

    /// All node identifiers.
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Total number of stored edges, self-loops included.
    pub fn edge_count(&self) -> usize {
        self.edges.iter().map(Vec::len).sum()
    }

    /// Outgoing edges of `node` (empty for unknown nodes).
    pub fn edges_from(&self, node: NodeId) -> &[Edge] {
        self.edges.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether every node can reach every other node, ignoring self-loops.
    ///
    /// A Hamiltonian cycle cannot exist otherwise.
    pub fn is_strongly_connected(&self) -> bool {
        if self.nodes.is_empty() {
            return false;
        }
        let mut graph: DiGraph<(), ()> = DiGraph::with_capacity(self.nodes.len(), self.edge_count());
        let indices: Vec<_> = self.nodes.iter().map(|_| graph.add_node(())).collect();
        for edge in self.edges.iter().flatten().filter(|e| !e.is_self_loop()) {
            graph.add_edge(indices[edge.a], indices[edge.b], ());
        }
        kosaraju_scc(&graph).len() == 1
    }
}
