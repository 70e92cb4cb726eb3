//! Fitness tracking for the ants of a colony.
//!
//! Records every completed tour per ant so the colony can report which
//! ants found short tours and how often sampling degenerated.

use serde::Serialize;

/// Per-ant tour statistics.
#[derive(Debug, Clone, Serialize)]
pub struct AntFitness {
    pub agent: usize,
    /// Number of completed tours recorded.
    pub tours_completed: u64,
    /// Sum of all recorded tour costs.
    pub total_cost: f64,
    /// Cheapest tour this ant has produced.
    pub best_cost: f64,
    /// Cost of the most recent tour.
    pub last_cost: f64,
    /// Steps that fell back to uniform choice because every score was zero.
    pub uniform_fallbacks: u64,
    /// Fitness score = reciprocal of the mean tour cost (higher is better).
    pub fitness: f64,
}

impl AntFitness {
    fn new(agent: usize) -> Self {
        Self {
            agent,
            tours_completed: 0,
            total_cost: 0.0,
            best_cost: f64::INFINITY,
            last_cost: f64::INFINITY,
            uniform_fallbacks: 0,
            fitness: 0.0,
        }
    }

    /// Mean cost of the recorded tours, `None` before the first tour.
    pub fn mean_cost(&self) -> Option<f64> {
        (self.tours_completed > 0).then(|| self.total_cost / self.tours_completed as f64)
    }
}

/// Tracks fitness across all ants in a colony.
#[derive(Debug, Clone, Default)]
pub struct FitnessTracker {
    data: Vec<AntFitness>,
}

impl FitnessTracker {
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Register ants `0..count`.
    pub fn with_agents(count: usize) -> Self {
        Self {
            data: (0..count).map(AntFitness::new).collect(),
        }
    }

    /// Register a new ant, returning its id.
    pub fn register(&mut self) -> usize {
        let agent = self.data.len();
        self.data.push(AntFitness::new(agent));
        agent
    }

    /// Record a completed tour for an ant.
    pub fn record_tour(&mut self, agent: usize, cost: f64, uniform_fallbacks: usize) {
        if let Some(f) = self.data.get_mut(agent) {
            f.tours_completed += 1;
            f.total_cost += cost;
            f.last_cost = cost;
            f.best_cost = f.best_cost.min(cost);
            f.uniform_fallbacks += uniform_fallbacks as u64;
            Self::recompute_fitness(f);
        }
    }

    fn recompute_fitness(f: &mut AntFitness) {
        f.fitness = match f.mean_cost() {
            Some(mean) if mean > 0.0 && mean.is_finite() => 1.0 / mean,
            _ => 0.0,
        };
    }

    /// The ant with the cheapest best tour.
    pub fn fittest(&self) -> Option<&AntFitness> {
        self.data
            .iter()
            .filter(|f| f.tours_completed > 0)
            .min_by(|a, b| a.best_cost.total_cmp(&b.best_cost))
    }

    /// Get fitness data for an ant.
    pub fn get(&self, agent: usize) -> Option<&AntFitness> {
        self.data.get(agent)
    }

    /// Get all fitness data.
    pub fn all(&self) -> &[AntFitness] {
        &self.data
    }

    /// Mean fitness over all ants.
    pub fn mean_fitness(&self) -> f64 {
        if self.data.is_empty() {
            0.0
        } else {
            self.data.iter().map(|f| f.fitness).sum::<f64>() / self.data.len() as f64
        }
    }

    /// Total uniform fallbacks across every ant.
    pub fn total_uniform_fallbacks(&self) -> u64 {
        self.data.iter().map(|f| f.uniform_fallbacks).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fitness_tracks_tours() {
        let mut tracker = FitnessTracker::with_agents(1);
        tracker.record_tour(0, 8.0, 0);
        tracker.record_tour(0, 4.0, 2);

        let f = tracker.get(0).unwrap();
        assert_eq!(f.tours_completed, 2);
        assert_eq!(f.best_cost, 4.0);
        assert_eq!(f.last_cost, 4.0);
        assert_eq!(f.mean_cost(), Some(6.0));
        assert_eq!(f.uniform_fallbacks, 2);
        assert!((f.fitness - 1.0 / 6.0).abs() < 1e-12);
    }

    #[test]
    fn fittest_returns_cheapest_ant() {
        let mut tracker = FitnessTracker::new();
        let a = tracker.register();
        let b = tracker.register();
        tracker.record_tour(a, 10.0, 0);
        tracker.record_tour(b, 7.5, 1);

        assert_eq!(tracker.fittest().unwrap().agent, b);
        assert_eq!(tracker.total_uniform_fallbacks(), 1);
    }

    #[test]
    fn untouched_ants_are_ignored() {
        let tracker = FitnessTracker::with_agents(3);
        assert!(tracker.fittest().is_none());
        assert_eq!(tracker.mean_fitness(), 0.0);
        assert_eq!(tracker.get(1).unwrap().mean_cost(), None);
    }
}
