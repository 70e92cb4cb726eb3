//! Error types for Formica operations.
//!
//! Provides structured error handling instead of panics.

use thiserror::Error;

/// Result type for Formica operations.
pub type Result<T> = std::result::Result<T, FormicaError>;

/// Errors that can occur during Formica operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormicaError {
    /// Malformed problem input (distance matrix files and the like).
    #[error("Input error: {0}")]
    Input(#[from] InputError),
    /// Tour construction or engine invariant errors.
    #[error("Tour error: {0}")]
    Tour(#[from] TourError),
    /// Configuration errors.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    /// I/O errors (wrapped).
    #[error("I/O error: {0}")]
    Io(String),
    /// Serialization errors.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<std::io::Error> for FormicaError {
    fn from(e: std::io::Error) -> Self {
        FormicaError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for FormicaError {
    fn from(e: serde_json::Error) -> Self {
        FormicaError::Serialization(e.to_string())
    }
}

/// Problem input errors.
///
/// Line and column numbers are 1-based.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    /// Input has no rows.
    #[error("input contains no rows")]
    Empty,
    /// A token could not be parsed as a number.
    #[error("line {line}, column {column}: `{token}` is not a number")]
    NonNumeric {
        line: usize,
        column: usize,
        token: String,
    },
    /// A row has a different number of entries than the first row.
    #[error("line {line}: expected {expected} values, found {found}")]
    RaggedRow {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// The matrix is not square.
    #[error("matrix has {rows} rows but {columns} columns")]
    NotSquare { rows: usize, columns: usize },
    /// A weight is negative or not finite.
    #[error("entry ({row}, {column}) = {value} is not a finite non-negative weight")]
    Negative { row: usize, column: usize, value: f64 },
    /// The matrix is not symmetric.
    #[error("entry ({row}, {column}) differs from its mirror ({column}, {row})")]
    Asymmetric { row: usize, column: usize },
    /// Not enough nodes to form a cycle.
    #[error("at least two nodes are required, found {found}")]
    TooFewNodes { found: usize },
}

/// Tour construction and engine errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TourError {
    /// An ant ran out of feasible moves before closing its cycle.
    #[error("no feasible tour: ant {agent} is stuck at node {node} after {edges} edges")]
    NoFeasibleTour {
        agent: usize,
        node: usize,
        edges: usize,
    },
    /// A problem returned matrices that do not match its graph.
    #[error("{what} has dimension {found}, expected {expected}")]
    DimensionMismatch {
        what: String,
        expected: usize,
        found: usize,
    },
    /// The construction graph is too small to hold a Hamiltonian cycle.
    #[error("construction graph needs at least two nodes, found {found}")]
    TooFewNodes { found: usize },
    /// The colony has no ants.
    #[error("colony has no agents")]
    NoAgents,
}

/// Configuration errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Invalid value.
    #[error("invalid value for {field}: {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
    /// Out of range.
    #[error("{field} out of range: {value} (must be {min}-{max})")]
    OutOfRange {
        field: String,
        min: f64,
        max: f64,
        value: f64,
    },
}

// Convenience constructors
impl FormicaError {
    pub fn no_feasible_tour(agent: usize, node: usize, edges: usize) -> Self {
        FormicaError::Tour(TourError::NoFeasibleTour { agent, node, edges })
    }

    pub fn dimension_mismatch(what: impl Into<String>, expected: usize, found: usize) -> Self {
        FormicaError::Tour(TourError::DimensionMismatch {
            what: what.into(),
            expected,
            found,
        })
    }

    pub fn out_of_range(field: impl Into<String>, value: f64, min: f64, max: f64) -> Self {
        FormicaError::Config(ConfigError::OutOfRange {
            field: field.into(),
            min,
            max,
            value,
        })
    }

    pub fn invalid_config(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        FormicaError::Config(ConfigError::InvalidValue {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        })
    }
}
