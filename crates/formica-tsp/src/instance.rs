//! Distance matrices for symmetric TSP instances.
//!
//! The plain-text format is one row per line, one whitespace-separated
//! weight per node. Blank lines and trailing whitespace are ignored;
//! anything else that is not a number is an error.

use formica_core::error::{FormicaError, InputError, Result};
use formica_core::matrix::Matrix;
use formica_core::types::{Edge, NodeId};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Relative tolerance when comparing `d(i, j)` with `d(j, i)`.
const SYMMETRY_TOLERANCE: f64 = 1e-9;

/// A validated symmetric matrix of non-negative distances.
///
/// Deserialization runs the same checks as [`DistanceMatrix::from_rows`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct DistanceMatrix {
    weights: Matrix,
}

impl DistanceMatrix {
    /// Wrap a matrix after checking it is a usable TSP instance.
    ///
    /// Requires at least two nodes, finite non-negative weights and
    /// symmetry. The diagonal is never traversed and is not checked
    /// beyond being a finite non-negative number.
    pub fn new(weights: Matrix) -> Result<Self> {
        let n = weights.dim();
        if n < 2 {
            return Err(InputError::TooFewNodes { found: n }.into());
        }

        for i in 0..n {
            for j in 0..n {
                let w = weights[(i, j)];
                if !w.is_finite() || w < 0.0 {
                    return Err(InputError::Negative {
                        row: i,
                        column: j,
                        value: w,
                    }
                    .into());
                }
            }
        }

        for i in 0..n {
            for j in (i + 1)..n {
                let (a, b) = (weights[(i, j)], weights[(j, i)]);
                let scale = a.abs().max(b.abs()).max(1.0);
                if (a - b).abs() > SYMMETRY_TOLERANCE * scale {
                    return Err(InputError::Asymmetric { row: i, column: j }.into());
                }
            }
        }

        Ok(Self { weights })
    }

    /// Build from rows, which must form a square.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        if rows.is_empty() {
            return Err(InputError::Empty.into());
        }
        Self::new(Matrix::from_rows(rows)?)
    }

    /// Parse the whitespace-delimited text format.
    pub fn parse(content: &str) -> Result<Self> {
        let mut rows: Vec<Vec<f64>> = Vec::new();

        for (line_num, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let mut row = Vec::new();
            for (column, token) in line.split_whitespace().enumerate() {
                let value: f64 = token.parse().map_err(|_| InputError::NonNumeric {
                    line: line_num + 1,
                    column: column + 1,
                    token: token.to_string(),
                })?;
                row.push(value);
            }

            if let Some(first) = rows.first() {
                if row.len() != first.len() {
                    return Err(InputError::RaggedRow {
                        line: line_num + 1,
                        expected: first.len(),
                        found: row.len(),
                    }
                    .into());
                }
            }
            rows.push(row);
        }

        Self::from_rows(rows)
    }

    /// Load a distance matrix file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let matrix = Self::parse(&content)?;
        debug!(path = %path.display(), nodes = matrix.dim(), "loaded distance matrix");
        Ok(matrix)
    }

    /// Render in the text format accepted by [`DistanceMatrix::parse`].
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for row in self.weights.rows() {
            let line: Vec<String> = row.iter().map(|w| w.to_string()).collect();
            out.push_str(&line.join(" "));
            out.push('\n');
        }
        out
    }

    /// Write the matrix to `path` in the text format.
    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_text())?;
        Ok(())
    }

    /// Uniform `[0, 1)` weights above the diagonal, mirrored below, zero diagonal.
    pub fn random_symmetric<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Result<Self> {
        let mut weights = Matrix::zeros(n);
        for i in 0..n {
            for j in 0..i {
                let w: f64 = rng.gen();
                weights[(i, j)] = w;
                weights[(j, i)] = w;
            }
        }
        Self::new(weights)
    }

    /// Euclidean distances between points in the plane.
    pub fn from_coords(points: &[(f64, f64)]) -> Result<Self> {
        let weights = Matrix::from_fn(points.len(), |i, j| {
            let (dx, dy) = (points[i].0 - points[j].0, points[i].1 - points[j].1);
            dx.hypot(dy)
        });
        Self::new(weights)
    }

    /// `n` points drawn uniformly from the unit square.
    pub fn random_points<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<(f64, f64)> {
        (0..n).map(|_| (rng.gen(), rng.gen())).collect()
    }

    /// Number of nodes.
    pub fn dim(&self) -> usize {
        self.weights.dim()
    }

    pub fn distance(&self, a: NodeId, b: NodeId) -> f64 {
        self.weights[(a, b)]
    }

    pub fn matrix(&self) -> &Matrix {
        &self.weights
    }

    /// Sum of the weights of `edges`.
    pub fn tour_cost(&self, edges: &[Edge]) -> f64 {
        edges.iter().map(|&e| self.weights.at(e)).sum()
    }
}

impl TryFrom<Vec<Vec<f64>>> for DistanceMatrix {
    type Error = FormicaError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self> {
        Self::from_rows(rows)
    }
}

impl From<DistanceMatrix> for Vec<Vec<f64>> {
    fn from(distances: DistanceMatrix) -> Self {
        distances.weights.to_rows()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn input_error(result: Result<DistanceMatrix>) -> InputError {
        match result {
            Err(FormicaError::Input(e)) => e,
            other => panic!("expected input error, got {:?}", other),
        }
    }

    #[test]
    fn parse_tolerates_trailing_spaces_and_blank_lines() {
        let text = "0 1.5 2 \n1.5 0 3 \n\n2 3 0 \n";
        let m = DistanceMatrix::parse(text).unwrap();
        assert_eq!(m.dim(), 3);
        assert_eq!(m.distance(1, 2), 3.0);
    }

    #[test]
    fn parse_rejects_non_numeric_token() {
        let err = input_error(DistanceMatrix::parse("0 1\n1 x\n"));
        assert_eq!(
            err,
            InputError::NonNumeric {
                line: 2,
                column: 2,
                token: "x".to_string()
            }
        );
    }

    #[test]
    fn parse_rejects_ragged_rows() {
        let err = input_error(DistanceMatrix::parse("0 1 2\n1 0\n2 1 0\n"));
        assert_eq!(
            err,
            InputError::RaggedRow {
                line: 2,
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn parse_rejects_non_square_input() {
        let err = input_error(DistanceMatrix::parse("0 1 2\n1 0 3\n"));
        assert_eq!(err, InputError::NotSquare { rows: 2, columns: 3 });
    }

    #[test]
    fn parse_rejects_empty_input() {
        assert_eq!(input_error(DistanceMatrix::parse("\n  \n")), InputError::Empty);
    }

    #[test]
    fn negative_and_asymmetric_weights_are_rejected() {
        let err = input_error(DistanceMatrix::parse("0 -1\n-1 0\n"));
        assert!(matches!(err, InputError::Negative { row: 0, column: 1, .. }));

        let err = input_error(DistanceMatrix::parse("0 1\n2 0\n"));
        assert_eq!(err, InputError::Asymmetric { row: 0, column: 1 });
    }

    #[test]
    fn single_node_is_rejected() {
        let err = input_error(DistanceMatrix::parse("0\n"));
        assert_eq!(err, InputError::TooFewNodes { found: 1 });
    }

    #[test]
    fn random_symmetric_has_zero_diagonal_and_unit_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let m = DistanceMatrix::random_symmetric(6, &mut rng).unwrap();
        for i in 0..6 {
            assert_eq!(m.distance(i, i), 0.0);
            for j in 0..6 {
                assert_eq!(m.distance(i, j), m.distance(j, i));
                assert!(m.distance(i, j) < 1.0);
            }
        }
    }

    #[test]
    fn from_coords_is_euclidean() {
        let m = DistanceMatrix::from_coords(&[(0.0, 0.0), (3.0, 4.0), (0.0, 4.0)]).unwrap();
        assert_eq!(m.distance(0, 1), 5.0);
        assert_eq!(m.distance(1, 2), 3.0);
        assert_eq!(m.distance(2, 2), 0.0);
    }

    #[test]
    fn deserializing_validates_like_from_rows() {
        let asymmetric = serde_json::from_str::<DistanceMatrix>("[[0.0, 1.0], [2.0, 0.0]]");
        assert!(asymmetric.is_err());
        let single = serde_json::from_str::<DistanceMatrix>("[[0.0]]");
        assert!(single.is_err());

        let m: DistanceMatrix = serde_json::from_str("[[0.0, 4.0], [4.0, 0.0]]").unwrap();
        assert_eq!(m.distance(1, 0), 4.0);
    }

    #[test]
    fn save_and_load_through_file() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let points = DistanceMatrix::random_points(8, &mut rng);
        let m = DistanceMatrix::from_coords(&points).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dist_mat");
        m.save(&path).unwrap();

        assert_eq!(DistanceMatrix::load(&path).unwrap(), m);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = DistanceMatrix::load(&dir.path().join("nope")).unwrap_err();
        assert!(matches!(err, FormicaError::Io(_)));
    }
}
