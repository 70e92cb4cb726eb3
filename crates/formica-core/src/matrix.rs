//! Square real-valued matrices indexed by `(node, node)`.
//!
//! Used for pheromone trails, heuristic desirability and distances.

use crate::error::{FormicaError, InputError, Result};
use crate::types::{Edge, NodeId};
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// A dense `n x n` matrix stored row-major.
///
/// Serialized as nested rows; deserialization goes through
/// [`Matrix::from_rows`] and rejects non-square input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct Matrix {
    dim: usize,
    values: Vec<f64>,
}

impl Matrix {
    /// An `n x n` matrix with every entry set to `value`.
    pub fn filled(dim: usize, value: f64) -> Self {
        Self {
            dim,
            values: vec![value; dim * dim],
        }
    }

    pub fn zeros(dim: usize) -> Self {
        Self::filled(dim, 0.0)
    }

    /// Build an `n x n` matrix by evaluating `f(row, column)` for every cell.
    pub fn from_fn(dim: usize, mut f: impl FnMut(NodeId, NodeId) -> f64) -> Self {
        let mut values = Vec::with_capacity(dim * dim);
        for i in 0..dim {
            for j in 0..dim {
                values.push(f(i, j));
            }
        }
        Self { dim, values }
    }

    /// Build a matrix from rows, which must form a square.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let dim = rows.len();
        let mut values = Vec::with_capacity(dim * dim);
        for row in rows {
            if row.len() != dim {
                return Err(InputError::NotSquare {
                    rows: dim,
                    columns: row.len(),
                }
                .into());
            }
            values.extend(row);
        }
        Ok(Self { dim, values })
    }

    /// Number of rows (equal to the number of columns).
    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn get(&self, row: NodeId, column: NodeId) -> Option<f64> {
        (row < self.dim && column < self.dim).then(|| self.values[row * self.dim + column])
    }

    /// Value on a directed edge.
    pub fn at(&self, edge: Edge) -> f64 {
        self[(edge.a, edge.b)]
    }

    /// Multiply every entry by `factor`.
    pub fn scale(&mut self, factor: f64) {
        for v in &mut self.values {
            *v *= factor;
        }
    }

    /// Add `amount` to the entry on a directed edge.
    pub fn add_at(&mut self, edge: Edge, amount: f64) {
        self[(edge.a, edge.b)] += amount;
    }

    /// Row `i` as a slice.
    pub fn row(&self, i: NodeId) -> &[f64] {
        &self.values[i * self.dim..(i + 1) * self.dim]
    }

    /// Iterate over rows.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.values.chunks(self.dim.max(1))
    }

    /// All entries in row-major order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn min(&self) -> Option<f64> {
        self.values.iter().copied().reduce(f64::min)
    }

    pub fn max(&self) -> Option<f64> {
        self.values.iter().copied().reduce(f64::max)
    }

    pub fn sum(&self) -> f64 {
        self.values.iter().sum()
    }

    /// Convert back into nested rows.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.rows().map(<[f64]>::to_vec).collect()
    }
}

impl TryFrom<Vec<Vec<f64>>> for Matrix {
    type Error = FormicaError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self> {
        Self::from_rows(rows)
    }
}

impl From<Matrix> for Vec<Vec<f64>> {
    fn from(matrix: Matrix) -> Self {
        matrix.to_rows()
    }
}

impl Index<(NodeId, NodeId)> for Matrix {
    type Output = f64;

    fn index(&self, (row, column): (NodeId, NodeId)) -> &f64 {
        &self.values[row * self.dim + column]
    }
}

impl IndexMut<(NodeId, NodeId)> for Matrix {
    fn index_mut(&mut self, (row, column): (NodeId, NodeId)) -> &mut f64 {
        &mut self.values[row * self.dim + column]
    }
}
