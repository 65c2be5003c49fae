//! Linear-system solver: `M·x = b` via inversion, with residual reporting

use crate::error::{ShapeError, SolveError};
use crate::matrix::Matrix;
use crate::vector::Vector;
use std::fmt;

/// Residual threshold below which a solution is accepted by [`LinearSystem::check`]
const RESIDUAL_EPSILON: f64 = 1e-12;

/// A square linear system `M·x = b`.
///
/// The solution `x` and the residual error exist only after a successful
/// [`solve`](LinearSystem::solve); `format()` (and `Display`) renders the
/// solution lines or the no-solution sentinel accordingly.
#[derive(Debug, Clone)]
pub struct LinearSystem {
    m: Matrix,
    b: Vector,
    x: Option<Vector>,
    error: f64,
}

impl LinearSystem {
    /// Build the system from its coefficient matrix and right-hand side
    pub fn new(m: Matrix, b: Vector) -> Self {
        Self {
            m,
            b,
            x: None,
            error: 0.0,
        }
    }

    /// Coefficient matrix
    pub fn matrix(&self) -> &Matrix {
        &self.m
    }

    /// Right-hand side
    pub fn rhs(&self) -> &Vector {
        &self.b
    }

    /// Solution vector, present only after a successful [`solve`](LinearSystem::solve)
    pub fn solution(&self) -> Option<&Vector> {
        self.x.as_ref()
    }

    /// Residual error of the last solve
    pub fn error(&self) -> f64 {
        self.error
    }

    /// Whether the last [`solve`](LinearSystem::solve) succeeded
    pub fn has_solution(&self) -> bool {
        self.x.is_some()
    }

    /// Residual `||b - M·x||_2` for a candidate solution
    fn residual(&self, x: &Vector) -> Result<f64, ShapeError> {
        let approx = Vector::try_from(&self.m.mul_vector(x)?)?;
        Ok(self.b.sub(&approx)?.norm2())
    }

    /// Solve the system as `x = M⁻¹·b` and record the residual error.
    ///
    /// On any shape failure (non-square matrix, mismatched right-hand side)
    /// the solution is cleared and the originating [`ShapeError`] is
    /// propagated wrapped in [`SolveError::Unsolvable`].
    pub fn solve(&mut self) -> Result<(), SolveError> {
        self.x = None;
        let inverse = self.m.inverse().map_err(SolveError::Unsolvable)?;
        let column = inverse
            .mul_vector(&self.b)
            .map_err(SolveError::Unsolvable)?;
        let x = Vector::try_from(&column).map_err(SolveError::Unsolvable)?;
        self.error = self.residual(&x).map_err(SolveError::Unsolvable)?;
        log::debug!("solved {}-unknown system, residual {}", x.len(), self.error);
        self.x = Some(x);
        Ok(())
    }

    /// Recompute and return the residual error from the current solution.
    ///
    /// Fails with [`SolveError::NotSolved`] before a successful
    /// [`solve`](LinearSystem::solve).
    pub fn compute_error(&mut self) -> Result<f64, SolveError> {
        let x = self.x.as_ref().ok_or(SolveError::NotSolved)?;
        let error = self.residual(x).map_err(SolveError::Unsolvable)?;
        self.error = error;
        Ok(error)
    }

    /// Whether the recomputed residual is below `1e-12`.
    ///
    /// Fails with [`SolveError::NotSolved`] before a successful
    /// [`solve`](LinearSystem::solve).
    pub fn check(&mut self) -> Result<bool, SolveError> {
        Ok(self.compute_error()? < RESIDUAL_EPSILON)
    }

    /// Render the solution as one `x{i} = {value}` line per unknown followed
    /// by the residual error, or the no-solution sentinel.
    pub fn format(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for LinearSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.x {
            Some(x) => {
                for i in 0..x.len() {
                    writeln!(f, "x{} = {}", i, x.get(i))?;
                }
                write!(f, "{}", self.error)
            }
            None => write!(f, "system has no solution"),
        }
    }
}
