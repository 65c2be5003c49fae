//! Real-valued matrix type: elementary row operations, arithmetic, norms,
//! determinant and inverse

use crate::error::ShapeError;
use crate::triangulate::{Gauss, GaussJordan, Triangulator};
use crate::vector::Vector;
use ndarray::{Array2, Axis};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Rectangular grid of real numbers addressed by zero-based `(row, col)`.
///
/// The only mutating operations are the elementary row operations
/// ([`swap_rows`](Matrix::swap_rows), [`scale_row`](Matrix::scale_row),
/// [`add_scaled_row`](Matrix::add_scaled_row), [`add_row`](Matrix::add_row));
/// every derived operation returns a new matrix and leaves its operands
/// untouched. Equality is exact entrywise comparison with no tolerance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix {
    data: Array2<f64>,
}

impl Matrix {
    /// Create a matrix from a rectangular grid of rows.
    ///
    /// Every row must have the same number of entries as the first one.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self, ShapeError> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, Vec::len);
        let mut data = Array2::zeros((nrows, ncols));
        for (i, row) in rows.iter().enumerate() {
            if row.len() != ncols {
                return Err(ShapeError::Ragged {
                    row: i,
                    expected: ncols,
                    found: row.len(),
                });
            }
            for (j, &value) in row.iter().enumerate() {
                data[[i, j]] = value;
            }
        }
        Ok(Self { data })
    }

    /// Create a matrix from a flat row-major buffer of `rows * cols` entries
    pub fn from_shape_vec(
        rows: usize,
        cols: usize,
        entries: Vec<f64>,
    ) -> Result<Self, ShapeError> {
        let found = entries.len();
        let data = Array2::from_shape_vec((rows, cols), entries).map_err(|_| {
            ShapeError::Ragged {
                row: 0,
                expected: rows * cols,
                found,
            }
        })?;
        Ok(Self { data })
    }

    /// Entry at `(i, j)` (zero-based)
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[[i, j]]
    }

    /// `(rows, cols)` of the matrix
    pub fn dims(&self) -> (usize, usize) {
        (self.data.nrows(), self.data.ncols())
    }

    /// Number of rows
    pub fn nrows(&self) -> usize {
        self.data.nrows()
    }

    /// Number of columns
    pub fn ncols(&self) -> usize {
        self.data.ncols()
    }

    fn check_square(&self) -> Result<usize, ShapeError> {
        let (rows, cols) = self.dims();
        if rows != cols {
            return Err(ShapeError::NotSquare { rows, cols });
        }
        Ok(rows)
    }

    fn check_same_shape(&self, other: &Matrix) -> Result<(), ShapeError> {
        if self.dims() != other.dims() {
            return Err(ShapeError::ShapeMismatch {
                lhs_rows: self.nrows(),
                lhs_cols: self.ncols(),
                rhs_rows: other.nrows(),
                rhs_cols: other.ncols(),
            });
        }
        Ok(())
    }

    // --- Elementary row operations (mutate in place) -----------------------

    /// Swap rows `r1` and `r2`
    pub fn swap_rows(&mut self, r1: usize, r2: usize) {
        if r1 == r2 {
            return;
        }
        for j in 0..self.ncols() {
            self.data.swap([r1, j], [r2, j]);
        }
    }

    /// Multiply every entry of row `r` by `scalar`
    pub fn scale_row(&mut self, r: usize, scalar: f64) {
        self.data.row_mut(r).mapv_inplace(|v| v * scalar);
    }

    /// `row[dest] += scalar * row[src]`
    pub fn add_scaled_row(&mut self, dest: usize, src: usize, scalar: f64) {
        for j in 0..self.ncols() {
            let v = self.data[[src, j]];
            self.data[[dest, j]] += scalar * v;
        }
    }

    /// `row[dest] += row[src]`
    pub fn add_row(&mut self, dest: usize, src: usize) {
        self.add_scaled_row(dest, src, 1.0);
    }

    // --- Derived operations (return new matrices) ---------------------------

    /// Identity matrix of the same order; the matrix must be square
    pub fn identity(&self) -> Result<Matrix, ShapeError> {
        let n = self.check_square()?;
        Ok(Matrix {
            data: Array2::from_shape_fn((n, n), |(i, j)| if i == j { 1.0 } else { 0.0 }),
        })
    }

    /// Entrywise sum; both matrices must have the same shape
    pub fn add(&self, other: &Matrix) -> Result<Matrix, ShapeError> {
        self.check_same_shape(other)?;
        Ok(Matrix {
            data: &self.data + &other.data,
        })
    }

    /// Entrywise difference; both matrices must have the same shape
    pub fn sub(&self, other: &Matrix) -> Result<Matrix, ShapeError> {
        self.check_same_shape(other)?;
        Ok(Matrix {
            data: &self.data - &other.data,
        })
    }

    /// Matrix product; `self.cols` must equal `other.rows`.
    ///
    /// The result has shape `self.rows x other.cols`.
    pub fn mul(&self, other: &Matrix) -> Result<Matrix, ShapeError> {
        if self.ncols() != other.nrows() {
            return Err(ShapeError::InnerDimMismatch {
                lhs_cols: self.ncols(),
                rhs_rows: other.nrows(),
            });
        }
        Ok(Matrix {
            data: self.data.dot(&other.data),
        })
    }

    /// Multiply every entry by the scalar `n`
    pub fn mul_scalar(&self, n: f64) -> Matrix {
        Matrix {
            data: &self.data * n,
        }
    }

    /// Matrix-vector product; `self.cols` must equal `vector.len()`.
    ///
    /// The result is a single-column matrix of height `self.rows`.
    pub fn mul_vector(&self, vector: &Vector) -> Result<Matrix, ShapeError> {
        if self.ncols() != vector.len() {
            return Err(ShapeError::MatrixVectorMismatch {
                cols: self.ncols(),
                len: vector.len(),
            });
        }
        let column = self.data.dot(vector.as_array());
        Ok(Matrix {
            data: column.insert_axis(Axis(1)),
        })
    }

    /// Determinant: product of the diagonal of the Gauss-triangulated clone.
    ///
    /// The initial column-0 pivot swap is not compensated by a sign flip, so
    /// the sign is wrong whenever that swap occurs (see
    /// [`Pivoting::FirstColumnOnce`](crate::Pivoting::FirstColumnOnce)).
    pub fn determinant(&self) -> Result<f64, ShapeError> {
        let n = self.check_square()?;
        let triangulated = Gauss::default().triangulate(self)?;
        Ok((0..n).map(|i| triangulated.get(i, i)).product())
    }

    /// Inverse: the companion matrix produced by Gauss-Jordan triangulation.
    ///
    /// A zero pivot beyond the initial column is skipped, not reported, so
    /// the result of inverting a singular matrix is not a true inverse.
    pub fn inverse(&self) -> Result<Matrix, ShapeError> {
        GaussJordan::default().triangulate(self)
    }

    /// Maximum over columns of the sum of absolute entries in that column
    pub fn norm1(&self) -> f64 {
        self.data
            .axis_iter(Axis(1))
            .map(|col| col.iter().map(|v| v.abs()).sum::<f64>())
            .fold(0.0, f64::max)
    }

    /// Frobenius norm: square root of the sum of squares of all entries
    pub fn norm2(&self) -> f64 {
        self.data.iter().map(|v| v * v).sum::<f64>().sqrt()
    }

    /// Maximum over rows of the sum of absolute entries in that row
    pub fn norm_inf(&self) -> f64 {
        self.data
            .axis_iter(Axis(0))
            .map(|row| row.iter().map(|v| v.abs()).sum::<f64>())
            .fold(0.0, f64::max)
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.data.rows() {
            let parts: Vec<String> = row.iter().map(|v| v.to_string()).collect();
            writeln!(f, "({})", parts.join(", "))?;
        }
        Ok(())
    }
}

impl TryFrom<&Matrix> for Vector {
    type Error = ShapeError;

    /// Convert a single-column matrix into a vector
    fn try_from(m: &Matrix) -> Result<Self, ShapeError> {
        let (rows, cols) = m.dims();
        if cols != 1 {
            return Err(ShapeError::NotColumn { rows, cols });
        }
        Ok(Vector::new(m.data.column(0).to_vec()))
    }
}
