//! Real-valued vector type with componentwise arithmetic and norms

use crate::error::ShapeError;
use ndarray::Array1;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered sequence of real numbers.
///
/// Immutable after construction; every arithmetic operation returns a new
/// vector and leaves its operands untouched. Equality is exact componentwise
/// comparison with no tolerance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vector {
    data: Array1<f64>,
}

impl Vector {
    /// Create a vector from its components
    pub fn new(components: Vec<f64>) -> Self {
        Self {
            data: Array1::from_vec(components),
        }
    }

    /// Create a vector by copying a slice
    pub fn from_slice(components: &[f64]) -> Self {
        Self {
            data: Array1::from_vec(components.to_vec()),
        }
    }

    /// Number of components
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the vector has no components
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Component at position `i` (zero-based)
    pub fn get(&self, i: usize) -> f64 {
        self.data[i]
    }

    pub(crate) fn as_array(&self) -> &Array1<f64> {
        &self.data
    }

    fn check_same_length(&self, other: &Vector) -> Result<(), ShapeError> {
        if self.len() != other.len() {
            return Err(ShapeError::LengthMismatch {
                lhs: self.len(),
                rhs: other.len(),
            });
        }
        Ok(())
    }

    /// Componentwise sum; both vectors must have the same length
    pub fn add(&self, other: &Vector) -> Result<Vector, ShapeError> {
        self.check_same_length(other)?;
        Ok(Vector {
            data: &self.data + &other.data,
        })
    }

    /// Componentwise difference; both vectors must have the same length
    pub fn sub(&self, other: &Vector) -> Result<Vector, ShapeError> {
        self.check_same_length(other)?;
        Ok(Vector {
            data: &self.data - &other.data,
        })
    }

    /// Inner product; both vectors must have the same length
    pub fn dot(&self, other: &Vector) -> Result<f64, ShapeError> {
        self.check_same_length(other)?;
        Ok(self.data.dot(&other.data))
    }

    /// Cross product; both vectors must have length exactly 3
    pub fn cross(&self, other: &Vector) -> Result<Vector, ShapeError> {
        if self.len() != 3 || other.len() != 3 {
            return Err(ShapeError::CrossLength {
                lhs: self.len(),
                rhs: other.len(),
            });
        }
        let (a, b) = (&self.data, &other.data);
        Ok(Vector::new(vec![
            a[1] * b[2] - b[1] * a[2],
            -(a[0] * b[2] - b[0] * a[2]),
            a[0] * b[1] - b[0] * a[1],
        ]))
    }

    /// Multiply every component by the scalar `n`
    pub fn scale(&self, n: f64) -> Vector {
        Vector {
            data: &self.data * n,
        }
    }

    /// Sum of absolute components
    pub fn norm1(&self) -> f64 {
        self.data.iter().map(|v| v.abs()).sum()
    }

    /// Euclidean norm: square root of the sum of squared components
    pub fn norm2(&self) -> f64 {
        self.data.iter().map(|v| v * v).sum::<f64>().sqrt()
    }

    /// Maximum absolute component
    pub fn norm_inf(&self) -> f64 {
        self.data.iter().fold(0.0, |max, v| f64::max(max, v.abs()))
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.data.iter().map(|v| v.to_string()).collect();
        write!(f, "({})", parts.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn v1() -> Vector {
        Vector::new(vec![3.0, 2.0, 5.0])
    }

    fn v2() -> Vector {
        Vector::new(vec![10.0, 2.0, 3.0])
    }

    #[test]
    fn add_componentwise() {
        let sum = v1().add(&v2()).unwrap();
        assert_eq!(sum, Vector::new(vec![13.0, 4.0, 8.0]));
    }

    #[test]
    fn sub_componentwise() {
        let diff = v1().sub(&v2()).unwrap();
        assert_eq!(diff, Vector::new(vec![-7.0, 0.0, 2.0]));
    }

    #[test]
    fn add_then_sub_is_identity() {
        let v = v1();
        let round_trip = v.add(&v2()).unwrap().sub(&v2()).unwrap();
        assert_eq!(round_trip, v);
    }

    #[test]
    fn add_rejects_mismatched_lengths() {
        let short = Vector::new(vec![1.0, 2.0]);
        assert_eq!(
            v1().add(&short),
            Err(ShapeError::LengthMismatch { lhs: 3, rhs: 2 })
        );
    }

    #[test]
    fn dot_product() {
        assert_eq!(v1().dot(&v2()).unwrap(), 49.0);
    }

    #[test]
    fn cross_product() {
        let cross = v1().cross(&v2()).unwrap();
        assert_eq!(cross, Vector::new(vec![-4.0, 41.0, -14.0]));
    }

    #[test]
    fn cross_anti_commutes() {
        let ab = v1().cross(&v2()).unwrap();
        let ba = v2().cross(&v1()).unwrap().scale(-1.0);
        assert_eq!(ab, ba);
    }

    #[test]
    fn cross_rejects_non_3d() {
        let planar = Vector::new(vec![1.0, 2.0]);
        assert_eq!(
            planar.cross(&v2()),
            Err(ShapeError::CrossLength { lhs: 2, rhs: 3 })
        );
    }

    #[test]
    fn scale_multiplies_components() {
        assert_eq!(v1().scale(20.0), Vector::new(vec![60.0, 40.0, 100.0]));
    }

    #[test]
    fn norms() {
        assert_eq!(v1().norm1(), 10.0);
        assert_relative_eq!(v1().norm2(), 38.0_f64.sqrt());
        assert_eq!(v1().norm_inf(), 5.0);
    }

    #[test]
    fn norms_of_empty_vector_are_zero() {
        let empty = Vector::new(vec![]);
        assert_eq!(empty.norm1(), 0.0);
        assert_eq!(empty.norm2(), 0.0);
        assert_eq!(empty.norm_inf(), 0.0);
    }

    #[test]
    fn clone_is_deep_and_equal() {
        let v = v1();
        let copy = v.clone();
        assert_eq!(v, copy);
    }

    #[test]
    fn display_renders_parenthesized_components() {
        assert_eq!(v1().to_string(), "(3, 2, 5)");
    }
}
