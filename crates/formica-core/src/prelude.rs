//! Formica Core Prelude — convenient imports for common usage.
//!
//! ```rust
//! use formica_core::prelude::*;
//! ```

// Re-export commonly used types
pub use crate::types::{is_hamiltonian_cycle, Edge, Iteration, NodeId, Solution};

pub use crate::graph::Graph;
pub use crate::matrix::Matrix;
pub use crate::params::{AcoParams, EvaporationRule};

// Re-export the Problem trait
pub use crate::problem::Problem;

pub use crate::sampler::sample;

// Re-export error types
pub use crate::error::{ConfigError, FormicaError, InputError, Result, TourError};
