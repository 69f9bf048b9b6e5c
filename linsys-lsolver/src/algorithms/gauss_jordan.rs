use linsys_core::{ops, DenseMatrix, LinsysCoreError, Matrix};
use log::{debug, warn};
use num_traits::Float;
use std::fmt::Debug;

use super::{GaussJordan, SolveAlgorithm, SolveResult};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaussJordanMetadata<T> {
    pub row_swaps: usize,
    /// Smallest pivot magnitude seen, before normalisation.
    pub smallest_pivot: T,
    /// max |A x - b| for the returned solution.
    pub residual_norm: T,
}

impl<T: Float + Debug> SolveAlgorithm<DenseMatrix<T>> for GaussJordan {
    type Value = T;
    type Metadata = GaussJordanMetadata<T>;

    fn solve(
        &self,
        a: &DenseMatrix<T>,
        b: &[T],
    ) -> Result<SolveResult<T, GaussJordanMetadata<T>>, LinsysCoreError> {
        self.validate_inputs(a, b)?;

        // a zero or negative threshold would let a zero pivot through
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(LinsysCoreError::InvalidParameter(format!(
                "Tolerance must be a finite value greater than zero (got {})",
                self.tolerance
            )));
        }

        let tolerance: T = num_traits::cast(self.tolerance).ok_or_else(|| {
            LinsysCoreError::Internal(format!(
                "Tolerance {} is not representable in the matrix value type",
                self.tolerance
            ))
        })?;

        if self.determinant_check {
            let det = ops::determinant(a)?;
            debug!("Determinant pre-check: det(A) = {:?}", det);
            if det == T::zero() {
                warn!("Determinant pre-check rejected the matrix: det(A) is exactly zero");
                return Err(LinsysCoreError::SingularMatrix {
                    pivot: 0,
                    magnitude: 0.0,
                });
            }
        }

        let mut work = Augmented::new(a, b);
        let n = work.n;
        let mut row_swaps = 0;
        let mut smallest_pivot = T::infinity();

        for i in 0..n {
            let pivot_row = work.pivot_row(i);
            if pivot_row != i {
                debug!("Pivot {}: swapping rows {} and {}", i, i, pivot_row);
                work.swap_rows(i, pivot_row);
                row_swaps += 1;
            }

            let magnitude = work.at(i, i).abs();
            // `!(x >= tol)` also rejects a NaN pivot
            if !(magnitude >= tolerance) {
                warn!(
                    "Pivot {} magnitude {:?} is below tolerance {:?}; no unique solution",
                    i, magnitude, tolerance
                );
                return Err(LinsysCoreError::SingularMatrix {
                    pivot: i,
                    magnitude: magnitude.to_f64().unwrap_or(f64::NAN),
                });
            }
            smallest_pivot = smallest_pivot.min(magnitude);

            work.normalize_row(i);
            work.eliminate(i);
        }

        let x = work.into_solution();
        let residual_norm = ops::max_abs_residual(a, &x, b)?;
        debug!(
            "Gauss-Jordan finished: n = {}, row swaps = {}, residual = {:?}",
            n, row_swaps, residual_norm
        );

        Ok(SolveResult {
            x,
            metadata: GaussJordanMetadata {
                row_swaps,
                smallest_pivot,
                residual_norm,
            },
        })
    }
}

/// The `[A | b]` working matrix, n rows by n + 1 columns, row-major.
/// Owned by a single solve call.
struct Augmented<T> {
    n: usize,
    data: Vec<T>,
}

impl<T: Float + Debug> Augmented<T> {
    fn new(a: &DenseMatrix<T>, b: &[T]) -> Self {
        let n = a.rows();
        let mut data = Vec::with_capacity(n * (n + 1));
        for (row, &rhs) in a.row_iter().zip(b) {
            data.extend_from_slice(row);
            data.push(rhs);
        }
        Self { n, data }
    }

    fn width(&self) -> usize {
        self.n + 1
    }

    fn at(&self, row: usize, col: usize) -> T {
        self.data[row * self.width() + col]
    }

    /// Row in `col..n` with the largest magnitude in column `col`; first one wins ties.
    fn pivot_row(&self, col: usize) -> usize {
        (col..self.n).fold(col, |best, r| {
            if self.at(r, col).abs() > self.at(best, col).abs() {
                r
            } else {
                best
            }
        })
    }

    fn swap_rows(&mut self, r1: usize, r2: usize) {
        if r1 == r2 {
            return;
        }
        let w = self.width();
        let (lo, hi) = (r1.min(r2), r1.max(r2));
        let (head, tail) = self.data.split_at_mut(hi * w);
        head[lo * w..(lo + 1) * w].swap_with_slice(&mut tail[..w]);
    }

    fn normalize_row(&mut self, row: usize) {
        let w = self.width();
        let pivot = self.at(row, row);
        for value in &mut self.data[row * w..(row + 1) * w] {
            *value = *value / pivot;
        }
    }

    /// Zeroes column `pivot` in every row except `pivot`, above and below.
    fn eliminate(&mut self, pivot: usize) {
        let w = self.width();
        for j in (0..self.n).filter(|&j| j != pivot) {
            let factor = self.at(j, pivot);
            if factor == T::zero() {
                continue;
            }
            for c in 0..w {
                let p = self.data[pivot * w + c];
                self.data[j * w + c] = self.data[j * w + c] - factor * p;
            }
        }
    }

    fn into_solution(self) -> Vec<T> {
        let w = self.width();
        self.data.chunks_exact(w).map(|row| row[self.n]).collect()
    }
}
