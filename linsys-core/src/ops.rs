//! Dense CPU operations on [`DenseMatrix`].

use crate::dense_matrix::DenseMatrix;
use crate::error::{LinsysCoreError, Result};
use crate::traits::Matrix;
use log::debug;
use num_traits::Float;
use std::fmt::Debug;

/// Computes `y = A * x`.
///
/// # Errors
/// Returns `DimensionMismatch` if `x.len()` differs from the number of columns.
pub fn mat_vec<T: Float + Debug>(a: &DenseMatrix<T>, x: &[T]) -> Result<Vec<T>> {
    if a.cols() != x.len() {
        return Err(LinsysCoreError::DimensionMismatch(format!(
            "Matrix columns ({}) must match vector length ({})",
            a.cols(),
            x.len()
        )));
    }
    Ok(a
        .row_iter()
        .map(|row| {
            row.iter()
                .zip(x)
                .fold(T::zero(), |acc, (&a_ij, &x_j)| acc + a_ij * x_j)
        })
        .collect())
}

/// Returns `max_i |(A * x)_i - b_i|`, the infinity norm of the residual.
pub fn max_abs_residual<T: Float + Debug>(a: &DenseMatrix<T>, x: &[T], b: &[T]) -> Result<T> {
    let ax = mat_vec(a, x)?;
    if ax.len() != b.len() {
        return Err(LinsysCoreError::DimensionMismatch(format!(
            "Matrix rows ({}) must match RHS vector length ({})",
            ax.len(),
            b.len()
        )));
    }
    Ok(ax
        .iter()
        .zip(b)
        .fold(T::zero(), |acc, (&lhs, &rhs)| acc.max((lhs - rhs).abs())))
}

/// Computes the determinant of a square matrix.
///
/// Uses Gaussian elimination with partial pivoting on a private copy; the
/// input is left untouched. A column without any non-zero candidate yields an
/// exact zero.
pub fn determinant<T: Float + Debug>(a: &DenseMatrix<T>) -> Result<T> {
    if !a.is_square() {
        return Err(LinsysCoreError::DimensionMismatch(format!(
            "Determinant requires a square matrix (dims: {}x{})",
            a.rows(),
            a.cols()
        )));
    }
    let n = a.rows();
    let mut work = a.data().to_vec();
    let mut det = T::one();

    for k in 0..n {
        let pivot_row = (k..n).fold(k, |best, r| {
            if work[r * n + k].abs() > work[best * n + k].abs() {
                r
            } else {
                best
            }
        });
        let pivot = work[pivot_row * n + k];
        if pivot == T::zero() {
            debug!("Determinant: column {} has no non-zero pivot", k);
            return Ok(T::zero());
        }
        if pivot_row != k {
            for c in 0..n {
                work.swap(k * n + c, pivot_row * n + c);
            }
            det = -det;
        }
        for r in (k + 1)..n {
            let factor = work[r * n + k] / pivot;
            if factor == T::zero() {
                continue;
            }
            for c in k..n {
                let upper = work[k * n + c];
                work[r * n + c] = work[r * n + c] - factor * upper;
            }
        }
        det = det * pivot;
    }
    Ok(det)
}
