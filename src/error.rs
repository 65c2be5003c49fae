//! Error types for dimensional preconditions and solver failures

use thiserror::Error;

/// Errors raised when a dimensional precondition is violated
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    /// Square-only operation (identity, determinant, inverse, triangulation)
    /// applied to a rectangular matrix
    #[error("matrix must be square, got {rows}x{cols}")]
    NotSquare {
        /// Row count of the offending matrix
        rows: usize,
        /// Column count of the offending matrix
        cols: usize,
    },

    /// Matrix addition/subtraction with operands of different shapes
    #[error("matrix shapes do not match: {lhs_rows}x{lhs_cols} vs {rhs_rows}x{rhs_cols}")]
    ShapeMismatch {
        /// Rows of the left operand
        lhs_rows: usize,
        /// Columns of the left operand
        lhs_cols: usize,
        /// Rows of the right operand
        rhs_rows: usize,
        /// Columns of the right operand
        rhs_cols: usize,
    },

    /// Matrix product with mismatched inner dimensions
    #[error("inner dimensions do not match for product: {lhs_cols} columns vs {rhs_rows} rows")]
    InnerDimMismatch {
        /// Columns of the left operand
        lhs_cols: usize,
        /// Rows of the right operand
        rhs_rows: usize,
    },

    /// Matrix-vector product where the vector length differs from the column count
    #[error("matrix has {cols} columns but vector has length {len}")]
    MatrixVectorMismatch {
        /// Columns of the matrix
        cols: usize,
        /// Length of the vector
        len: usize,
    },

    /// Componentwise vector operation with operands of different lengths
    #[error("vector lengths do not match: {lhs} vs {rhs}")]
    LengthMismatch {
        /// Length of the left operand
        lhs: usize,
        /// Length of the right operand
        rhs: usize,
    },

    /// Cross product with an operand whose length is not 3
    #[error("cross product requires length-3 vectors, got {lhs} and {rhs}")]
    CrossLength {
        /// Length of the left operand
        lhs: usize,
        /// Length of the right operand
        rhs: usize,
    },

    /// Conversion to a vector from a matrix that is not a single column
    #[error("expected a single-column matrix, got {rows}x{cols}")]
    NotColumn {
        /// Row count of the offending matrix
        rows: usize,
        /// Column count of the offending matrix
        cols: usize,
    },

    /// Matrix construction from a ragged grid
    #[error("row {row} has {found} entries, expected {expected}")]
    Ragged {
        /// Index of the offending row
        row: usize,
        /// Expected entry count (taken from the first row)
        expected: usize,
        /// Actual entry count
        found: usize,
    },
}

/// Errors raised by [`LinearSystem`](crate::LinearSystem)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// The coefficient matrix could not be inverted
    #[error("system has no solution")]
    Unsolvable(#[source] ShapeError),

    /// The residual was requested before a successful `solve()`
    #[error("system has not been solved yet")]
    NotSolved,
}
