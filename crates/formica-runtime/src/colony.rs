//! Colony — the ant colony optimization engine.
//!
//! The colony owns the construction graph, the pheromone and heuristic
//! matrices, and the population of ants. It is the only writer of the
//! pheromone matrix.
//!
//! Each iteration:
//! 1. Every ant builds one complete tour (optionally in parallel)
//! 2. Every pheromone entry evaporates
//! 3. Every ant's tour deposits `1 / cost` on the edges it traversed
//! 4. Every ant is reset to a fresh random start node
//! 5. The iteration counter advances

use formica_agents::ant::{Ant, CycleOutcome};
use formica_agents::fitness::FitnessTracker;
use formica_core::error::{FormicaError, InputError, Result, TourError};
use formica_core::graph::Graph;
use formica_core::matrix::Matrix;
use formica_core::params::{AcoParams, EvaporationRule};
use formica_core::problem::Problem;
use formica_core::types::{Iteration, NodeId, Solution};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Event emitted by the colony during simulation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ColonyEvent {
    /// An ant hit an all-zero score vector and chose uniformly instead.
    UniformFallback { agent: usize, steps: usize },
    /// A tour cheaper than every earlier one was found.
    NewBest { agent: usize, cost: f64 },
    /// An iteration completed.
    IterationComplete { iteration: Iteration, best_cost: f64, mean_cost: f64 },
}

/// Statistics about the colony.
#[derive(Debug, Clone, Serialize)]
pub struct ColonyStats {
    pub iteration: Iteration,
    pub agents: usize,
    pub nodes: usize,
    pub edges: usize,
    pub best_cost: Option<f64>,
    pub last_mean_cost: Option<f64>,
    pub uniform_fallbacks: u64,
}

/// A serializable snapshot of an ant's state.
#[derive(Debug, Clone, Serialize)]
pub struct AntSnapshot {
    pub id: usize,
    pub start: NodeId,
    pub current: NodeId,
    pub tour_len: usize,
    pub best_cost: Option<f64>,
    pub tours_completed: u64,
}

/// A serializable snapshot of the colony at a point in time.
///
/// Snapshots are read-outs for inspection and export. They are never
/// loaded back into a colony.
#[derive(Debug, Clone, Serialize)]
pub struct ColonySnapshot {
    pub iteration: Iteration,
    pub params: AcoParams,
    pub agents: Vec<AntSnapshot>,
    pub pheromones: Matrix,
    pub best: Option<Solution>,
    pub history: Vec<f64>,
    pub mean_costs: Vec<f64>,
    pub stats: ColonyStats,
}

fn default_num_agents() -> usize {
    10
}

/// Configuration for colony simulation parameters.
///
/// Use with [`Colony::from_config`] or [`crate::colony_builder::ColonyBuilder`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColonyConfig {
    /// α, β, ρ and the evaporation rule.
    #[serde(default)]
    pub params: AcoParams,
    /// Number of ants (default: 10).
    #[serde(default = "default_num_agents")]
    pub num_agents: usize,
    /// Seed for the master random source. `None` draws from OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Run the cycle phase on the rayon thread pool (default: false).
    #[serde(default)]
    pub parallel: bool,
}

impl Default for ColonyConfig {
    fn default() -> Self {
        Self {
            params: AcoParams::default(),
            num_agents: default_num_agents(),
            seed: None,
            parallel: false,
        }
    }
}

impl ColonyConfig {
    /// Check the parameters and agent count.
    pub fn validate(&self) -> Result<()> {
        self.params.validate()?;
        if self.num_agents == 0 {
            return Err(TourError::NoAgents.into());
        }
        Ok(())
    }
}

/// The colony — manages ants and pheromone trails.
#[derive(Debug, Clone)]
pub struct Colony {
    graph: Graph,
    pheromones: Matrix,
    heuristics: Matrix,
    agents: Vec<Ant>,
    params: AcoParams,
    parallel: bool,
    seed: Option<u64>,
    iteration: Iteration,
    best: Option<Solution>,
    history: Vec<f64>,
    mean_costs: Vec<f64>,
    event_history: Vec<(Iteration, ColonyEvent)>,
    fitness_tracker: FitnessTracker,
}

impl Colony {
    /// Create a colony of `num_agents` ants with default parameters.
    pub fn new<P: Problem + ?Sized>(problem: &P, num_agents: usize) -> Result<Self> {
        Self::from_config(
            problem,
            ColonyConfig {
                num_agents,
                ..ColonyConfig::default()
            },
        )
    }

    /// Create a colony with the specified configuration.
    ///
    /// The master random source is seeded from `config.seed`, or from OS
    /// entropy when no seed is set.
    pub fn from_config<P: Problem + ?Sized>(problem: &P, config: ColonyConfig) -> Result<Self> {
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self::from_rng(problem, config, &mut rng)
    }

    /// Create a colony drawing every ant's random stream from `rng`.
    ///
    /// Each ant gets its own generator seeded from `rng`, so the tours an ant
    /// builds do not depend on how the cycle phase is scheduled.
    pub fn from_rng<P, R>(problem: &P, config: ColonyConfig, rng: &mut R) -> Result<Self>
    where
        P: Problem + ?Sized,
        R: Rng + ?Sized,
    {
        config.validate()?;

        let graph = problem.construct_graph();
        let n = graph.node_count();
        if n < 2 {
            return Err(TourError::TooFewNodes { found: n }.into());
        }

        let pheromones = problem.init_pheromones(config.num_agents);
        if pheromones.dim() != n {
            return Err(FormicaError::dimension_mismatch("pheromone matrix", n, pheromones.dim()));
        }
        let heuristics = problem.init_heuristics();
        if heuristics.dim() != n {
            return Err(FormicaError::dimension_mismatch("heuristic matrix", n, heuristics.dim()));
        }

        check_trail_values(&pheromones)?;
        check_trail_values(&heuristics)?;

        if !graph.is_strongly_connected() {
            warn!(nodes = n, "construction graph is not strongly connected; tours may be infeasible");
        }

        let agents = (0..config.num_agents)
            .map(|id| Ant::new(id, n, ChaCha8Rng::seed_from_u64(rng.gen())))
            .collect();

        Ok(Self {
            graph,
            pheromones,
            heuristics,
            agents,
            params: config.params,
            parallel: config.parallel,
            seed: config.seed,
            iteration: 0,
            best: None,
            history: Vec::new(),
            mean_costs: Vec::new(),
            event_history: Vec::new(),
            fitness_tracker: FitnessTracker::with_agents(config.num_agents),
        })
    }

    /// The configuration this colony runs with.
    pub fn config(&self) -> ColonyConfig {
        ColonyConfig {
            params: self.params,
            num_agents: self.agents.len(),
            seed: self.seed,
            parallel: self.parallel,
        }
    }

    /// Run the simulation for `num_iterations` iterations.
    #[instrument(skip(self), fields(agents = self.agents.len(), nodes = self.graph.node_count()))]
    pub fn run_simulation(&mut self, num_iterations: u64) -> Result<Vec<Vec<ColonyEvent>>> {
        info!(
            iterations = num_iterations,
            rho = self.params.rho,
            evaporation = self.params.evaporation.as_str(),
            parallel = self.parallel,
            "starting simulation"
        );

        let mut all_events = Vec::new();
        for _ in 0..num_iterations {
            all_events.push(self.iterate()?);
        }

        info!(
            iterations = self.iteration,
            best_cost = ?self.best.as_ref().map(|s| s.cost),
            "simulation finished"
        );
        Ok(all_events)
    }

    /// Run one iteration: cycle, evaporate, deposit, reset.
    pub fn iterate(&mut self) -> Result<Vec<ColonyEvent>> {
        let mut events = Vec::new();
        let outcomes = match self.cycle_all() {
            Ok(outcomes) => outcomes,
            Err(err) => {
                // Stuck and finished ants alike start the next attempt fresh.
                self.reset_agents();
                return Err(err);
            }
        };

        for (ant, outcome) in self.agents.iter().zip(&outcomes) {
            if outcome.uniform_fallbacks > 0 {
                warn!(
                    agent = ant.id(),
                    steps = outcome.uniform_fallbacks,
                    "all candidate scores were zero; chose uniformly among unvisited neighbours"
                );
                events.push(ColonyEvent::UniformFallback {
                    agent: ant.id(),
                    steps: outcome.uniform_fallbacks,
                });
            }
        }

        self.evaporate();

        let solutions: Vec<Solution> = self
            .agents
            .iter()
            .map(|ant| ant.solution(&self.heuristics))
            .collect();

        let mut cost_sum = 0.0;
        for (agent, (solution, outcome)) in solutions.iter().zip(&outcomes).enumerate() {
            self.deposit(solution);
            self.fitness_tracker
                .record_tour(agent, solution.cost, outcome.uniform_fallbacks);
            cost_sum += solution.cost;

            let improved = self
                .best
                .as_ref()
                .map_or(true, |best| solution.cost < best.cost);
            if improved {
                self.best = Some(solution.clone());
                events.push(ColonyEvent::NewBest {
                    agent,
                    cost: solution.cost,
                });
            }
        }

        self.reset_agents();

        let mean_cost = cost_sum / solutions.len() as f64;
        let best_cost = self.best.as_ref().map_or(f64::INFINITY, |s| s.cost);
        self.history.push(best_cost);
        self.mean_costs.push(mean_cost);

        debug!(iteration = self.iteration, best_cost, mean_cost, "iteration complete");
        events.push(ColonyEvent::IterationComplete {
            iteration: self.iteration,
            best_cost,
            mean_cost,
        });

        for event in &events {
            self.event_history.push((self.iteration, event.clone()));
        }
        self.iteration += 1;
        Ok(events)
    }

    /// Every ant builds one tour against the current, read-only matrices.
    fn cycle_all(&mut self) -> Result<Vec<CycleOutcome>> {
        if self.parallel {
            self.cycle_parallel()
        } else {
            self.cycle_sequential()
        }
    }

    fn cycle_sequential(&mut self) -> Result<Vec<CycleOutcome>> {
        let (graph, pheromones, heuristics, params) =
            (&self.graph, &self.pheromones, &self.heuristics, &self.params);
        self.agents
            .iter_mut()
            .map(|ant| ant.do_cycle(graph, pheromones, heuristics, params))
            .collect()
    }

    #[cfg(feature = "parallel")]
    fn cycle_parallel(&mut self) -> Result<Vec<CycleOutcome>> {
        let (graph, pheromones, heuristics, params) =
            (&self.graph, &self.pheromones, &self.heuristics, &self.params);
        self.agents
            .par_iter_mut()
            .map(|ant| ant.do_cycle(graph, pheromones, heuristics, params))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    fn cycle_parallel(&mut self) -> Result<Vec<CycleOutcome>> {
        self.cycle_sequential()
    }

    fn reset_agents(&mut self) {
        for ant in &mut self.agents {
            ant.reset();
        }
    }

    /// Apply evaporation to every pheromone entry.
    ///
    /// With [`EvaporationRule::Retain`] each entry is multiplied by ρ; with
    /// [`EvaporationRule::Decay`] by `1 - ρ`.
    pub fn evaporate(&mut self) {
        self.pheromones.scale(self.params.evaporation_factor());
    }

    /// Add `1 / cost` to the pheromone of every edge in `solution`.
    ///
    /// Tours whose cost is not a finite positive number deposit nothing.
    pub fn deposit(&mut self, solution: &Solution) {
        if !(solution.cost.is_finite() && solution.cost > 0.0) {
            return;
        }
        let amount = 1.0 / solution.cost;
        for &edge in &solution.edges {
            self.pheromones.add_at(edge, amount);
        }
    }

    /// Build one more tour on the current trails and return it.
    ///
    /// The read-out is not counted as an iteration and leaves the pheromone
    /// matrix untouched; it only changes the first ant's tour and memory.
    #[instrument(skip(self), fields(iteration = self.iteration))]
    pub fn get_solution(&mut self) -> Result<Solution> {
        let graph = &self.graph;
        let pheromones = &self.pheromones;
        let heuristics = &self.heuristics;
        let params = &self.params;

        let ant = self
            .agents
            .first_mut()
            .ok_or(FormicaError::Tour(TourError::NoAgents))?;
        if !ant.tour().is_empty() {
            ant.reset();
        }

        let outcome = ant.do_cycle(graph, pheromones, heuristics, params)?;
        if outcome.uniform_fallbacks > 0 {
            warn!(
                steps = outcome.uniform_fallbacks,
                "read-out tour fell back to uniform choice"
            );
        }

        let solution = ant.solution(heuristics);
        debug!(cost = solution.cost, "read-out tour");
        Ok(solution)
    }

    /// Cheapest tour found in any iteration so far.
    pub fn best_solution(&self) -> Option<&Solution> {
        self.best.as_ref()
    }

    /// Best-so-far cost after each iteration.
    pub fn history(&self) -> &[f64] {
        &self.history
    }

    /// Mean tour cost of each iteration.
    pub fn mean_costs(&self) -> &[f64] {
        &self.mean_costs
    }

    /// Number of completed iterations.
    pub fn iteration(&self) -> Iteration {
        self.iteration
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn pheromones(&self) -> &Matrix {
        &self.pheromones
    }

    pub fn heuristics(&self) -> &Matrix {
        &self.heuristics
    }

    pub fn params(&self) -> &AcoParams {
        &self.params
    }

    /// The evaporation rule in effect.
    pub fn evaporation(&self) -> EvaporationRule {
        self.params.evaporation
    }

    pub fn agents(&self) -> &[Ant] {
        &self.agents
    }

    /// Get a reference to the fitness tracker.
    pub fn fitness_tracker(&self) -> &FitnessTracker {
        &self.fitness_tracker
    }

    /// Get the full event history with iteration numbers.
    pub fn event_history(&self) -> &[(Iteration, ColonyEvent)] {
        &self.event_history
    }

    /// Get colony statistics.
    pub fn stats(&self) -> ColonyStats {
        ColonyStats {
            iteration: self.iteration,
            agents: self.agents.len(),
            nodes: self.graph.node_count(),
            edges: self.graph.edge_count(),
            best_cost: self.best.as_ref().map(|s| s.cost),
            last_mean_cost: self.mean_costs.last().copied(),
            uniform_fallbacks: self.fitness_tracker.total_uniform_fallbacks(),
        }
    }

    /// Take a serializable snapshot of the colony's current state.
    pub fn snapshot(&self) -> ColonySnapshot {
        let agents = self
            .agents
            .iter()
            .map(|ant| {
                let fitness = self.fitness_tracker.get(ant.id());
                AntSnapshot {
                    id: ant.id(),
                    start: ant.start(),
                    current: ant.current(),
                    tour_len: ant.tour().len(),
                    best_cost: fitness
                        .filter(|f| f.tours_completed > 0)
                        .map(|f| f.best_cost),
                    tours_completed: fitness.map_or(0, |f| f.tours_completed),
                }
            })
            .collect();

        ColonySnapshot {
            iteration: self.iteration,
            params: self.params,
            agents,
            pheromones: self.pheromones.clone(),
            best: self.best.clone(),
            history: self.history.clone(),
            mean_costs: self.mean_costs.clone(),
            stats: self.stats(),
        }
    }
}

/// Problems must hand over finite, non-negative matrices.
fn check_trail_values(matrix: &Matrix) -> Result<()> {
    for (index, &value) in matrix.values().iter().enumerate() {
        if !value.is_finite() || value < 0.0 {
            return Err(InputError::Negative {
                row: index / matrix.dim(),
                column: index % matrix.dim(),
                value,
            }
            .into());
        }
    }
    Ok(())
}
