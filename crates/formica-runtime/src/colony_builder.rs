//! Colony builder.
//!
//! Provides a fluent way to configure a colony before binding it to a
//! problem.
//!
//! # Example
//!
//! ```rust,ignore
//! use formica_runtime::colony_builder::ColonyBuilder;
//! use formica_core::params::EvaporationRule;
//!
//! let mut colony = ColonyBuilder::new()
//!     .num_agents(200)
//!     .beta(3.0)
//!     .evaporation(EvaporationRule::Decay)
//!     .seed(42)
//!     .build(&problem)?;
//!
//! colony.run_simulation(100)?;
//! ```

use crate::colony::{Colony, ColonyConfig};
use formica_core::error::Result;
use formica_core::params::{AcoParams, EvaporationRule};
use formica_core::problem::Problem;
use rand::Rng;

/// Builder for creating colonies.
#[derive(Debug, Clone, Default)]
pub struct ColonyBuilder {
    config: ColonyConfig,
}

impl ColonyBuilder {
    /// Create a new colony builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration.
    pub fn with_config(mut self, config: ColonyConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace α, β, ρ and the evaporation rule at once.
    pub fn with_params(mut self, params: AcoParams) -> Self {
        self.config.params = params;
        self
    }

    pub fn num_agents(mut self, num_agents: usize) -> Self {
        self.config.num_agents = num_agents;
        self
    }

    /// Pheromone exponent α.
    pub fn alpha(mut self, alpha: f64) -> Self {
        self.config.params.alpha = alpha;
        self
    }

    /// Heuristic exponent β.
    pub fn beta(mut self, beta: f64) -> Self {
        self.config.params.beta = beta;
        self
    }

    /// Evaporation parameter ρ.
    pub fn rho(mut self, rho: f64) -> Self {
        self.config.params.rho = rho;
        self
    }

    pub fn evaporation(mut self, rule: EvaporationRule) -> Self {
        self.config.params.evaporation = rule;
        self
    }

    /// Seed the master random source.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Run the cycle phase in parallel.
    pub fn parallel(mut self, enabled: bool) -> Self {
        self.config.parallel = enabled;
        self
    }

    /// The configuration built so far.
    pub fn config(&self) -> &ColonyConfig {
        &self.config
    }

    /// Build a colony for `problem`.
    pub fn build<P: Problem + ?Sized>(self, problem: &P) -> Result<Colony> {
        Colony::from_config(problem, self.config)
    }

    /// Build a colony whose ants draw from an explicit random source.
    ///
    /// Any seed set on the builder is ignored.
    pub fn build_with_rng<P, R>(self, problem: &P, rng: &mut R) -> Result<Colony>
    where
        P: Problem + ?Sized,
        R: Rng + ?Sized,
    {
        Colony::from_rng(problem, self.config, rng)
    }
}
