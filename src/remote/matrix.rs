//! Textual matrix literals and the small amount of matrix algebra done
//! in-process.
//!
//! Inverse and determinant are only defined for 2×2 matrices; general-size
//! algebra belongs to the remote service.

use crate::core::format_for_display;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from parsing or combining matrices.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatrixError {
    #[error("Invalid matrix format. Use format like [[1,2],[3,4]]")]
    Malformed,

    #[error("Matrices must have the same dimensions")]
    DimensionMismatch,

    #[error("Number of columns in A must equal number of rows in B")]
    NotMultipliable,

    #[error("Matrix must be square to find {0}")]
    NotSquare(&'static str),

    #[error("{0} calculation only supported for 2x2 matrices")]
    Unsupported(&'static str),

    #[error("Matrix is singular (determinant is 0)")]
    Singular,
}

/// Rectangular, non-empty matrix of numbers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct Matrix {
    rows: Vec<Vec<f64>>,
}

impl TryFrom<Vec<Vec<f64>>> for Matrix {
    type Error = MatrixError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl From<Matrix> for Vec<Vec<f64>> {
    fn from(matrix: Matrix) -> Self {
        matrix.rows
    }
}

impl Matrix {
    /// Parse a nested-array literal such as `[[1, 2], [3, 4]]`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lambdacalc::remote::Matrix;
    ///
    /// let m = Matrix::parse("[[1, 2], [3, 4]]").unwrap();
    /// assert_eq!(m.dimensions(), (2, 2));
    /// assert!(Matrix::parse("[[1, 2], [3]]").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self, MatrixError> {
        let cleaned: String = text.chars().filter(|c| !c.is_whitespace()).collect();
        let rows: Vec<Vec<f64>> =
            serde_json::from_str(&cleaned).map_err(|_| MatrixError::Malformed)?;
        Self::from_rows(rows)
    }

    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, MatrixError> {
        let width = rows.first().map(Vec::len).ok_or(MatrixError::Malformed)?;
        if width == 0 || rows.iter().any(|row| row.len() != width) {
            return Err(MatrixError::Malformed);
        }
        Ok(Self { rows })
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// `(rows, columns)`
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows.len(), self.rows[0].len())
    }

    pub fn is_square(&self) -> bool {
        let (r, c) = self.dimensions();
        r == c
    }

    pub fn add(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        if self.dimensions() != other.dimensions() {
            return Err(MatrixError::DimensionMismatch);
        }
        let rows = self
            .rows
            .iter()
            .zip(&other.rows)
            .map(|(a, b)| a.iter().zip(b).map(|(x, y)| x + y).collect())
            .collect();
        Ok(Matrix { rows })
    }

    pub fn multiply(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        let (n, inner) = self.dimensions();
        let (other_rows, m) = other.dimensions();
        if inner != other_rows {
            return Err(MatrixError::NotMultipliable);
        }
        let rows = (0..n)
            .map(|i| {
                (0..m)
                    .map(|j| (0..inner).map(|k| self.rows[i][k] * other.rows[k][j]).sum::<f64>())
                    .collect()
            })
            .collect();
        Ok(Matrix { rows })
    }

    pub fn transpose(&self) -> Matrix {
        let (n, m) = self.dimensions();
        let rows = (0..m)
            .map(|j| (0..n).map(|i| self.rows[i][j]).collect())
            .collect();
        Matrix { rows }
    }

    pub fn determinant(&self) -> Result<f64, MatrixError> {
        if !self.is_square() {
            return Err(MatrixError::NotSquare("determinant"));
        }
        match self.rows.as_slice() {
            [r0, r1] => Ok(r0[0] * r1[1] - r0[1] * r1[0]),
            _ => Err(MatrixError::Unsupported("Determinant")),
        }
    }

    pub fn inverse(&self) -> Result<Matrix, MatrixError> {
        if !self.is_square() {
            return Err(MatrixError::NotSquare("inverse"));
        }
        let [r0, r1] = self.rows.as_slice() else {
            return Err(MatrixError::Unsupported("Inverse"));
        };
        let (a, b, c, d) = (r0[0], r0[1], r1[0], r1[1]);
        let det = a * d - b * c;
        if det == 0.0 {
            return Err(MatrixError::Singular);
        }
        Ok(Matrix {
            rows: vec![vec![d / det, -b / det], vec![-c / det, a / det]],
        })
    }

    /// One `[a, b, ...]` line per row, each cell formatted for display.
    pub fn display(&self) -> String {
        format_rows(&self.rows)
    }
}

pub(crate) fn format_rows(rows: &[Vec<f64>]) -> String {
    rows.iter()
        .map(|row| {
            let cells: Vec<String> = row.iter().map(|v| format_for_display(*v)).collect();
            format!("[{}]", cells.join(", "))
        })
        .collect::<Vec<_>>()
        .join("\n")
}
