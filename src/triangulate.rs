//! Triangulation strategies: Gauss elimination and Gauss-Jordan inversion
//!
//! Both strategies clone their input before touching a single row, so the
//! caller's matrix is never mutated. Gauss zeroes every off-diagonal entry
//! and returns the working copy (its diagonal product is the determinant).
//! Gauss-Jordan additionally normalizes the diagonal to 1 and threads every
//! row operation through a companion identity matrix, which it returns as
//! the inverse.

use crate::error::ShapeError;
use crate::matrix::Matrix;
use serde::{Deserialize, Serialize};

/// Pivot acquisition policy, chosen at construction time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Pivoting {
    /// No pivot search at all
    None,

    /// Scan column 0 once, before elimination, for the first row with a
    /// nonzero leading entry and swap it into row 0. The scan stops at the
    /// last row even when its entry is zero, and is never repeated for later
    /// diagonal positions. The swap is not compensated when the determinant
    /// is read off the diagonal, so the determinant sign is wrong whenever
    /// the swap occurs.
    #[default]
    FirstColumnOnce,

    /// Partial pivoting at every diagonal step: swap in the row at or below
    /// the diagonal with the largest absolute entry in the current column
    PartialPerStep,
}

/// Strategy that derives a matrix from a square input via elementary row
/// operations.
pub trait Triangulator {
    /// Triangulate `m`, leaving `m` itself untouched
    fn triangulate(&self, m: &Matrix) -> Result<Matrix, ShapeError>;
}

/// Gauss elimination: zeroes every off-diagonal entry without normalizing
/// the diagonal, and returns the eliminated working copy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Gauss {
    pivoting: Pivoting,
}

impl Gauss {
    /// Gauss elimination with the given pivoting policy
    pub fn new(pivoting: Pivoting) -> Self {
        Self { pivoting }
    }
}

impl Triangulator for Gauss {
    fn triangulate(&self, m: &Matrix) -> Result<Matrix, ShapeError> {
        let mut work = square_clone(m)?;
        eliminate(&mut work, None, false, self.pivoting);
        Ok(work)
    }
}

/// Gauss-Jordan elimination: normalizes the diagonal to 1 while carrying a
/// companion identity matrix through every row operation, and returns the
/// companion, which equals the inverse when no zero pivot was used as a
/// divisor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GaussJordan {
    pivoting: Pivoting,
}

impl GaussJordan {
    /// Gauss-Jordan elimination with the given pivoting policy
    pub fn new(pivoting: Pivoting) -> Self {
        Self { pivoting }
    }
}

impl Triangulator for GaussJordan {
    fn triangulate(&self, m: &Matrix) -> Result<Matrix, ShapeError> {
        let mut work = square_clone(m)?;
        let mut companion = work.identity()?;
        eliminate(&mut work, Some(&mut companion), true, self.pivoting);
        Ok(companion)
    }
}

fn square_clone(m: &Matrix) -> Result<Matrix, ShapeError> {
    let (rows, cols) = m.dims();
    if rows != cols {
        return Err(ShapeError::NotSquare { rows, cols });
    }
    Ok(m.clone())
}

/// Shared elimination skeleton.
///
/// For every diagonal index `j` and row `i != j`, replaces `row[i]` with
/// `row[i] + (-entry(i,j) / pivot) * row[j]` when the pivot is nonzero; a
/// zero pivot skips the step and elimination continues, which silently
/// yields a non-inverse for singular input. When `normalize_diagonal` is
/// set, row `j` is scaled by `1 / pivot` whenever the pivot is not already 1.
/// Every row operation is mirrored onto the companion matrix when present.
fn eliminate(
    work: &mut Matrix,
    mut companion: Option<&mut Matrix>,
    normalize_diagonal: bool,
    pivoting: Pivoting,
) {
    let n = work.nrows();
    if n == 0 {
        return;
    }

    if pivoting == Pivoting::FirstColumnOnce {
        let mut row = 0;
        while work.get(row, 0) == 0.0 && row + 1 < n {
            row += 1;
        }
        if row != 0 {
            log::debug!("initial pivot swap: row 0 <-> row {row}");
            work.swap_rows(0, row);
            if let Some(c) = companion.as_deref_mut() {
                c.swap_rows(0, row);
            }
        }
    }

    for j in 0..n {
        if pivoting == Pivoting::PartialPerStep {
            let mut best = j;
            let mut best_mag = work.get(j, j).abs();
            for i in (j + 1)..n {
                let mag = work.get(i, j).abs();
                if mag > best_mag {
                    best_mag = mag;
                    best = i;
                }
            }
            if best != j {
                log::debug!("partial pivot swap at column {j}: row {j} <-> row {best}");
                work.swap_rows(j, best);
                if let Some(c) = companion.as_deref_mut() {
                    c.swap_rows(j, best);
                }
            }
        }

        for i in 0..n {
            let pivot = work.get(j, j);
            if i != j {
                let b = work.get(i, j);
                if pivot != 0.0 {
                    // row[i] + (-b/pivot) * row[j] cancels entry (i, j)
                    let factor = -b / pivot;
                    work.add_scaled_row(i, j, factor);
                    if let Some(c) = companion.as_deref_mut() {
                        c.add_scaled_row(i, j, factor);
                    }
                } else {
                    log::debug!("zero pivot at ({j}, {j}): leaving row {i} untouched");
                }
            } else if normalize_diagonal && pivot != 1.0 {
                work.scale_row(j, 1.0 / pivot);
                if let Some(c) = companion.as_deref_mut() {
                    c.scale_row(j, 1.0 / pivot);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn m2() -> Matrix {
        Matrix::from_rows(&[vec![2.0, 3.0], vec![2.0, 7.0]]).unwrap()
    }

    #[test]
    fn gauss_diagonalizes_and_keeps_determinant_product() {
        let tri = Gauss::default().triangulate(&m2()).unwrap();
        assert_eq!(tri.get(1, 0), 0.0);
        assert_eq!(tri.get(0, 1), 0.0);
        assert_relative_eq!(tri.get(0, 0) * tri.get(1, 1), 8.0);
    }

    #[test]
    fn gauss_rejects_rectangular() {
        let rect = Matrix::from_rows(&[vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
        assert_eq!(
            Gauss::default().triangulate(&rect),
            Err(ShapeError::NotSquare { rows: 2, cols: 3 })
        );
    }

    #[test]
    fn gauss_leaves_input_untouched() {
        let m = m2();
        let copy = m.clone();
        let _ = Gauss::default().triangulate(&m).unwrap();
        assert_eq!(m, copy);
    }

    #[test]
    fn gauss_jordan_companion_is_inverse() {
        let m = m2();
        let inverse = GaussJordan::default().triangulate(&m).unwrap();
        let product = m.mul(&inverse).unwrap();
        let id = m.identity().unwrap();
        assert!(id.sub(&product).unwrap().norm2() < 1e-12);
    }

    #[test]
    fn first_column_pivot_swap_recovers_zero_leading_entry() {
        // (0, 0) is zero, so the narrow policy swaps rows 0 and 1 up front
        let m = Matrix::from_rows(&[vec![0.0, 1.0], vec![2.0, 0.0]]).unwrap();
        let inverse = GaussJordan::default().triangulate(&m).unwrap();
        let product = m.mul(&inverse).unwrap();
        let id = m.identity().unwrap();
        assert!(id.sub(&product).unwrap().norm2() < 1e-12);
    }

    #[test]
    fn initial_swap_flips_determinant_sign() {
        // True determinant is -1; the uncompensated row swap yields +1
        let m = Matrix::from_rows(&[vec![0.0, 1.0], vec![1.0, 0.0]]).unwrap();
        assert_eq!(m.determinant().unwrap(), 1.0);
    }

    #[test]
    fn no_pivoting_skips_zero_leading_entry() {
        // Without any pivot search the zero at (0, 0) is used as-is and the
        // column-0 elimination steps are skipped
        let m = Matrix::from_rows(&[vec![0.0, 1.0], vec![2.0, 0.0]]).unwrap();
        let tri = Gauss::new(Pivoting::None).triangulate(&m).unwrap();
        assert_eq!(tri.get(1, 0), 2.0);
    }

    #[test]
    fn partial_per_step_handles_mid_elimination_zero_pivot() {
        // After eliminating column 0 the (1, 1) entry vanishes; only the
        // per-step policy re-pivots and recovers a usable inverse
        let m = Matrix::from_rows(&[
            vec![1.0, 1.0, 1.0],
            vec![2.0, 2.0, 5.0],
            vec![4.0, 6.0, 8.0],
        ])
        .unwrap();
        let inverse = GaussJordan::new(Pivoting::PartialPerStep)
            .triangulate(&m)
            .unwrap();
        let product = m.mul(&inverse).unwrap();
        let id = m.identity().unwrap();
        assert!(id.sub(&product).unwrap().norm2() < 1e-9);
    }

    #[test]
    fn empty_matrix_triangulates_to_empty() {
        let empty = Matrix::from_rows(&[]).unwrap();
        let tri = Gauss::default().triangulate(&empty).unwrap();
        assert_eq!(tri.dims(), (0, 0));
    }
}
