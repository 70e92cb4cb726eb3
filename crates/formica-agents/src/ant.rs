//! Ant — the tour-building agent.
//!
//! An ant stands on a node, remembers which nodes it has visited, and
//! extends its tour one edge at a time by sampling the next node with
//! probability proportional to `τ^α · η^β`. One cycle ends when the tour
//! closes back on its start node, forming a Hamiltonian cycle.
//!
//! Ants only read the pheromone matrix. They report their tour and its
//! cost; the colony applies the deposit.

use formica_core::error::{FormicaError, Result};
use formica_core::graph::Graph;
use formica_core::matrix::Matrix;
use formica_core::params::AcoParams;
use formica_core::sampler::sample;
use formica_core::types::{Edge, NodeId, Solution};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

/// What happened during one call to [`Ant::do_cycle`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CycleOutcome {
    /// Edges appended during this call.
    pub steps: usize,
    /// Steps where every score was zero and the next node was drawn
    /// uniformly among the feasible neighbours instead.
    pub uniform_fallbacks: usize,
}

/// A simulated ant.
#[derive(Debug, Clone)]
pub struct Ant {
    id: usize,
    /// Node the current cycle started from.
    start: NodeId,
    current: NodeId,
    /// Visited flags indexed by node.
    memory: Vec<bool>,
    tour: Vec<Edge>,
    /// Reused between steps to avoid reallocating.
    candidates: Vec<(NodeId, f64)>,
    rng: ChaCha8Rng,
}

impl Ant {
    /// Create an ant on a uniformly random node of a graph with `node_count` nodes.
    pub fn new(id: usize, node_count: usize, mut rng: ChaCha8Rng) -> Self {
        let start = random_node(&mut rng, node_count);
        Self::at(id, start, node_count, rng)
    }

    /// Create an ant on a chosen start node.
    pub fn at(id: usize, start: NodeId, node_count: usize, rng: ChaCha8Rng) -> Self {
        Self {
            id,
            start,
            current: start,
            memory: vec![false; node_count],
            tour: Vec::with_capacity(node_count),
            candidates: Vec::with_capacity(node_count),
            rng,
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    /// Node the current tour started from.
    pub fn start(&self) -> NodeId {
        self.start
    }

    /// Node the ant currently stands on.
    pub fn current(&self) -> NodeId {
        self.current
    }

    /// Edges traversed so far this cycle.
    pub fn tour(&self) -> &[Edge] {
        &self.tour
    }

    /// Whether `node` is marked visited.
    pub fn has_visited(&self, node: NodeId) -> bool {
        self.memory.get(node).copied().unwrap_or(false)
    }

    /// Whether the tour holds one edge per node.
    pub fn is_complete(&self) -> bool {
        !self.memory.is_empty() && self.tour.len() == self.memory.len()
    }

    /// Build a full tour, one sampled edge at a time.
    ///
    /// Self-loops and visited nodes score zero. Once the tour holds
    /// `n - 1` edges the start node is released so the last edge can
    /// close the cycle. Fails with `NoFeasibleTour` when the ant is stuck
    /// before the cycle is complete (a disconnected graph, for example).
    pub fn do_cycle(
        &mut self,
        graph: &Graph,
        pheromones: &Matrix,
        heuristics: &Matrix,
        params: &AcoParams,
    ) -> Result<CycleOutcome> {
        let n = graph.node_count();
        let mut outcome = CycleOutcome::default();

        while self.tour.len() != n {
            self.memory[self.current] = true;

            self.candidates.clear();
            for edge in graph.edges_from(self.current) {
                let score = if self.memory[edge.b] || edge.is_self_loop() {
                    0.0
                } else {
                    params.score(pheromones.at(*edge), heuristics.at(*edge))
                };
                self.candidates.push((edge.b, score));
            }

            let next = match sample(&mut self.candidates, &mut self.rng) {
                Some(node) => node,
                None => {
                    outcome.uniform_fallbacks += 1;
                    self.uniform_neighbour(graph)?
                }
            };

            let edge = Edge::new(self.current, next);
            self.current = next;
            self.tour.push(edge);
            outcome.steps += 1;

            if self.tour.len() == n - 1 {
                self.memory[self.start] = false;
            }
        }

        Ok(outcome)
    }

    /// Uniform draw among unvisited, non-self-loop neighbours.
    fn uniform_neighbour(&mut self, graph: &Graph) -> Result<NodeId> {
        self.candidates.clear();
        for edge in graph.edges_from(self.current) {
            if !self.memory[edge.b] && !edge.is_self_loop() {
                self.candidates.push((edge.b, 1.0));
            }
        }
        if self.candidates.is_empty() {
            return Err(FormicaError::no_feasible_tour(
                self.id,
                self.current,
                self.tour.len(),
            ));
        }
        let pick = self.rng.gen_range(0..self.candidates.len());
        Ok(self.candidates[pick].0)
    }

    /// Cost of the tour, recovered from the heuristic as `Σ 1 / η(edge)`.
    pub fn tour_cost(&self, heuristics: &Matrix) -> f64 {
        self.tour.iter().map(|&edge| 1.0 / heuristics.at(edge)).sum()
    }

    /// Pheromone this ant's tour adds to each of its edges: `1 / cost`.
    ///
    /// `None` for tours whose cost is not a finite positive number.
    pub fn deposit_amount(&self, heuristics: &Matrix) -> Option<f64> {
        let cost = self.tour_cost(heuristics);
        (cost.is_finite() && cost > 0.0).then(|| 1.0 / cost)
    }

    /// The current tour and its cost.
    pub fn solution(&self, heuristics: &Matrix) -> Solution {
        Solution::new(self.tour.clone(), self.tour_cost(heuristics))
    }

    /// Forget the tour and move to a fresh random start node.
    pub fn reset(&mut self) {
        let n = self.memory.len();
        self.memory.iter_mut().for_each(|visited| *visited = false);
        self.tour.clear();
        self.start = random_node(&mut self.rng, n);
        self.current = self.start;
    }
}

fn random_node(rng: &mut ChaCha8Rng, node_count: usize) -> NodeId {
    if node_count == 0 {
        0
    } else {
        rng.gen_range(0..node_count)
    }
}
