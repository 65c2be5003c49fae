//! Dense real-valued linear algebra
//!
//! This crate provides matrix and vector value types, elementary row
//! operations, two triangularization strategies, and a linear-system solver
//! that reports the residual error of its solution.
//!
//! # Features
//!
//! - **Value types**: [`Matrix`] and [`Vector`] with arithmetic, norms and
//!   exact structural equality
//! - **Row operations**: in-place swap, scale and add-scaled-row primitives
//! - **Triangulation**: [`Gauss`] elimination and [`GaussJordan`] inversion
//!   over an augmented identity, with a configurable [`Pivoting`] policy
//! - **Solving**: [`LinearSystem`] computes `x = M⁻¹·b` and the residual
//!   `||b - M·x||_2`
//!
//! # Example
//!
//! ```
//! use math_dense_linalg::{LinearSystem, Matrix, Vector};
//!
//! let m = Matrix::from_rows(&[vec![2.0, 3.0], vec![2.0, 7.0]])?;
//! let b = Vector::new(vec![1.0, 5.0]);
//!
//! let mut system = LinearSystem::new(m, b);
//! system.solve()?;
//! assert!(system.error() < 1e-12);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Derived operations never mutate their operands: triangulation,
//! determinant and inverse all clone their input before applying any row
//! operation.

#![warn(missing_docs)]

pub mod error;
pub mod matrix;
pub mod system;
pub mod triangulate;
pub mod vector;

pub use error::{ShapeError, SolveError};
pub use matrix::Matrix;
pub use system::LinearSystem;
pub use triangulate::{Gauss, GaussJordan, Pivoting, Triangulator};
pub use vector::Vector;
