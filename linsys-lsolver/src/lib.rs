//! `linsys-lsolver`: a dense linear equation solver library.
//!
//! This library solves systems of linear equations of the form Ax = b with
//! Gauss-Jordan elimination and partial pivoting.

// Core modules
pub mod algorithms;

// Re-export from linsys_core
pub use linsys_core::{ops, DenseMatrix, LinsysCoreError, Matrix};

use algorithms::{GaussJordan, SolveAlgorithm};
use num_traits::Float;
use std::fmt::Debug;

/// Solves `a * x = b` with the default [`GaussJordan`] configuration and
/// returns only the solution vector.
///
/// # Errors
/// `DimensionMismatch` if `a` is not square (or empty) or `b` has the wrong
/// length; `SingularMatrix` if the system has no unique solution.
pub fn solve<T: Float + Debug>(a: &DenseMatrix<T>, b: &[T]) -> Result<Vec<T>, LinsysCoreError> {
    GaussJordan::default().solve(a, b).map(|result| result.x)
}
