//! Formica Runtime Prelude — convenient imports for common usage.
//!
//! ```rust
//! use formica_runtime::prelude::*;
//! ```

// Re-export colony
pub use crate::colony::{AntSnapshot, Colony, ColonyConfig, ColonyEvent, ColonySnapshot, ColonyStats};

// Re-export colony builder
pub use crate::colony_builder::ColonyBuilder;

// Re-export metrics
pub use crate::metrics::{ColonyMetrics, ConvergenceMetrics, PheromoneMetrics};

// Re-export from agents
pub use formica_agents::prelude::*;
