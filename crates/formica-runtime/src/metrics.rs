//! Quantitative metrics for judging how far a colony has converged.
//!
//! Computes three categories of metrics from colony state:
//! - Pheromone: spread of the trail matrix
//! - Branching: how many edges per node still carry meaningful trail
//! - Convergence: how the best-so-far cost evolved over the iterations

use crate::colony::Colony;
use formica_core::graph::Graph;
use formica_core::matrix::Matrix;
use serde::Serialize;

/// λ used by [`compute`] for the branching factor.
pub const DEFAULT_LAMBDA: f64 = 0.05;

/// Spread of the pheromone matrix.
#[derive(Debug, Clone, Serialize)]
pub struct PheromoneMetrics {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub total: f64,
}

impl PheromoneMetrics {
    pub fn from_matrix(pheromones: &Matrix) -> Self {
        let count = pheromones.values().len();
        let total = pheromones.sum();
        Self {
            min: pheromones.min().unwrap_or(0.0),
            max: pheromones.max().unwrap_or(0.0),
            mean: if count == 0 { 0.0 } else { total / count as f64 },
            total,
        }
    }
}

/// Evolution of the best-so-far cost.
#[derive(Debug, Clone, Serialize)]
pub struct ConvergenceMetrics {
    pub iterations: usize,
    /// Best cost after the first iteration.
    pub initial_best: f64,
    /// Best cost after the last iteration.
    pub final_best: f64,
    /// `(initial_best - final_best) / initial_best`.
    pub improvement_ratio: f64,
    /// Iteration at which the final best cost was first reached.
    pub last_improvement: usize,
    pub iterations_since_improvement: usize,
}

impl ConvergenceMetrics {
    /// Derive convergence metrics from a best-so-far history.
    ///
    /// `None` for an empty history.
    pub fn from_history(history: &[f64]) -> Option<Self> {
        let initial_best = *history.first()?;
        let final_best = *history.last()?;

        let last_improvement = history
            .windows(2)
            .enumerate()
            .filter(|(_, pair)| pair[1] < pair[0])
            .map(|(i, _)| i + 1)
            .last()
            .unwrap_or(0);

        let improvement_ratio = if initial_best.is_finite() && initial_best > 0.0 {
            (initial_best - final_best) / initial_best
        } else {
            0.0
        };

        Some(Self {
            iterations: history.len(),
            initial_best,
            final_best,
            improvement_ratio,
            last_improvement,
            iterations_since_improvement: history.len() - 1 - last_improvement,
        })
    }
}

/// All colony metrics combined.
#[derive(Debug, Clone, Serialize)]
pub struct ColonyMetrics {
    pub pheromone: PheromoneMetrics,
    /// Mean λ-branching factor with λ = [`DEFAULT_LAMBDA`].
    pub branching_factor: f64,
    pub convergence: Option<ConvergenceMetrics>,
    /// Mean per-ant fitness (reciprocal of mean tour cost).
    pub mean_fitness: f64,
}

/// Compute all metrics from the colony's current state and history.
pub fn compute(colony: &Colony) -> ColonyMetrics {
    ColonyMetrics {
        pheromone: PheromoneMetrics::from_matrix(colony.pheromones()),
        branching_factor: branching_factor(colony.graph(), colony.pheromones(), DEFAULT_LAMBDA),
        convergence: ConvergenceMetrics::from_history(colony.history()),
        mean_fitness: colony.fitness_tracker().mean_fitness(),
    }
}

/// Mean λ-branching factor over all nodes.
///
/// For node `i`, counts the outgoing non-self-loop edges whose trail is at
/// least `min_i + λ (max_i - min_i)`, where `min_i` and `max_i` range over
/// the same edges. A value close to 1 means every ant follows one trail.
pub fn branching_factor(graph: &Graph, pheromones: &Matrix, lambda: f64) -> f64 {
    let mut total = 0usize;
    let mut nodes = 0usize;

    for &node in graph.nodes() {
        let trails: Vec<f64> = graph
            .edges_from(node)
            .iter()
            .filter(|e| !e.is_self_loop())
            .map(|&e| pheromones.at(e))
            .collect();
        if trails.is_empty() {
            continue;
        }

        let min = trails.iter().copied().fold(f64::INFINITY, f64::min);
        let max = trails.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let threshold = min + lambda * (max - min);

        total += trails.iter().filter(|&&t| t >= threshold).count();
        nodes += 1;
    }

    if nodes == 0 {
        0.0
    } else {
        total as f64 / nodes as f64
    }
}

/// Print a formatted metrics report to the terminal.
pub fn print_report(metrics: &ColonyMetrics) {
    println!("── Colony Metrics ──────────────────────────────────");
    println!("  Pheromone:");
    println!("    Min / Max:                  {:.4} / {:.4}",
        metrics.pheromone.min,
        metrics.pheromone.max);
    println!("    Mean / Total:               {:.4} / {:.4}",
        metrics.pheromone.mean,
        metrics.pheromone.total);
    println!("    λ-branching factor:         {:.2}",
        metrics.branching_factor);
    println!();
    if let Some(c) = &metrics.convergence {
        println!("  Convergence:");
        println!("    Initial / Final best:       {:.4} / {:.4}",
            c.initial_best,
            c.final_best);
        println!("    Improvement:                {:.1}%",
            c.improvement_ratio * 100.0);
        println!("    Last improvement:           iteration {} ({} since)",
            c.last_improvement,
            c.iterations_since_improvement);
        println!();
    }
    println!("  Mean ant fitness:             {:.4}", metrics.mean_fitness);
}

#[cfg(test)]
mod tests {
    use super::*;
    use formica_core::types::Edge;

    #[test]
    fn pheromone_metrics_summarise_matrix() {
        let m = Matrix::from_rows(vec![vec![0.0, 2.0], vec![4.0, 2.0]]).unwrap();
        let metrics = PheromoneMetrics::from_matrix(&m);
        assert_eq!(metrics.min, 0.0);
        assert_eq!(metrics.max, 4.0);
        assert_eq!(metrics.total, 8.0);
        assert_eq!(metrics.mean, 2.0);
    }

    #[test]
    fn uniform_trails_branch_everywhere() {
        let graph = Graph::complete(5);
        let trails = Matrix::filled(5, 1.0);
        assert_eq!(branching_factor(&graph, &trails, DEFAULT_LAMBDA), 4.0);
    }

    #[test]
    fn converged_trails_branch_once() {
        let graph = Graph::complete(4);
        let mut trails = Matrix::filled(4, 0.001);
        for (a, b) in [(0, 1), (1, 2), (2, 3), (3, 0)] {
            trails.add_at(Edge::new(a, b), 10.0);
        }
        assert_eq!(branching_factor(&graph, &trails, DEFAULT_LAMBDA), 1.0);
    }

    #[test]
    fn convergence_finds_last_improvement() {
        let history = [10.0, 8.0, 8.0, 6.0, 6.0, 6.0];
        let c = ConvergenceMetrics::from_history(&history).unwrap();
        assert_eq!(c.iterations, 6);
        assert_eq!(c.initial_best, 10.0);
        assert_eq!(c.final_best, 6.0);
        assert!((c.improvement_ratio - 0.4).abs() < 1e-12);
        assert_eq!(c.last_improvement, 3);
        assert_eq!(c.iterations_since_improvement, 2);
    }

    #[test]
    fn convergence_of_empty_history_is_none() {
        assert!(ConvergenceMetrics::from_history(&[]).is_none());
    }
}
