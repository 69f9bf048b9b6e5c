use linsys_core::{LinsysCoreError, Matrix};
use num_traits::Float;
use std::fmt::Debug;

pub struct SolveResult<V: Float, M> {
    pub x: Vec<V>,   // Solution vector
    pub metadata: M, // Metadata about the solve process
}

// --- Algorithm Trait Definition ---
/// Trait representing a specific linear system solving algorithm.
/// Generic over the Matrix type it supports.
pub trait SolveAlgorithm<M: Matrix> {
    /// The numeric type the algorithm operates on (e.g., f32, f64).
    /// Must match the Matrix::Value type.
    type Value: Float + Debug;
    type Metadata: Debug;

    /// Solves the linear system Ax = b for x.
    ///
    /// # Arguments
    ///
    /// * `a` - The coefficient matrix A.
    /// * `b` - The right-hand side vector b.
    ///
    /// # Returns
    ///
    /// A `Result` containing the solution vector x or a `LinsysCoreError`.
    fn solve(
        &self,
        a: &M,
        b: &[Self::Value],
    ) -> Result<SolveResult<Self::Value, Self::Metadata>, LinsysCoreError>;

    // Helper for input validation, called by implementations before any numeric work.
    fn validate_inputs(&self, a: &M, b: &[Self::Value]) -> Result<(), LinsysCoreError> {
        let (rows, cols) = a.dims();
        if !a.is_square() {
            return Err(LinsysCoreError::DimensionMismatch(format!(
                "Matrix A must be square (dims: {}x{})",
                rows, cols
            )));
        }
        if rows == 0 {
            return Err(LinsysCoreError::DimensionMismatch(
                "Matrix A must have at least one row".to_string(),
            ));
        }
        if rows != b.len() {
            return Err(LinsysCoreError::DimensionMismatch(format!(
                "Matrix A rows ({}) must match RHS vector b length ({})",
                rows,
                b.len()
            )));
        }
        Ok(())
    }
}

// --- Algorithm Implementations ---

pub mod gauss_jordan; // Dense Gauss-Jordan elimination with partial pivoting

pub use gauss_jordan::GaussJordanMetadata;

/// Default singularity threshold on the pivot magnitude.
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

// --- Algorithm Struct Definitions ---

/// Gauss-Jordan elimination with partial pivoting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaussJordan {
    /// A pivot whose magnitude is below this value marks the matrix as singular.
    pub tolerance: f64,
    /// Reject matrices with an exactly zero determinant before eliminating.
    pub determinant_check: bool,
}

impl Default for GaussJordan {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            determinant_check: false,
        }
    }
}

impl GaussJordan {
    /// Creates a new instance of the Gauss-Jordan algorithm with default parameters.
    pub fn new() -> Self {
        Self::default()
    }
    /// Creates a new instance of the Gauss-Jordan algorithm with specified parameters.
    pub fn with_params(tolerance: f64, determinant_check: bool) -> Self {
        Self {
            tolerance,
            determinant_check,
        }
    }
}
