//! # Formica Runtime
//!
//! Colony engine, scheduling, and metrics.
//!
//! The runtime is the "colony": it owns the pheromone trails, drives the
//! iteration loop (cycle, evaporate, deposit, reset) and keeps the
//! best-so-far tour and convergence history.

pub mod colony;
pub mod colony_builder;
pub mod export;
pub mod metrics;
pub mod prelude;
