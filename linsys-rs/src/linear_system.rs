use linsys_core::{DenseMatrix, LinsysCoreError, Matrix};
use linsys_lsolver::algorithms::{GaussJordan, SolveAlgorithm};

use crate::{
    Solution, SystemForm,
    error::{LinsysError, Result},
};

/// A parsed square system `A x = b`, ready to be solved.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearSystem {
    matrix: DenseMatrix,
    constants: Vec<f64>,
}

impl LinearSystem {
    pub fn new(matrix: DenseMatrix, constants: Vec<f64>) -> Result<Self> {
        if !matrix.is_square() {
            return Err(LinsysCoreError::DimensionMismatch(format!(
                "Coefficient matrix must be square (dims: {}x{})",
                matrix.rows(),
                matrix.cols()
            ))
            .into());
        }
        if matrix.rows() == 0 {
            return Err(LinsysCoreError::DimensionMismatch(
                "System must have at least one equation".to_string(),
            )
            .into());
        }
        if matrix.rows() != constants.len() {
            return Err(LinsysCoreError::DimensionMismatch(format!(
                "Coefficient rows ({}) must match number of constants ({})",
                matrix.rows(),
                constants.len()
            ))
            .into());
        }
        Ok(Self { matrix, constants })
    }

    pub fn matrix(&self) -> &DenseMatrix {
        &self.matrix
    }

    pub fn constants(&self) -> &[f64] {
        &self.constants
    }

    /// Number of unknowns.
    pub fn size(&self) -> usize {
        self.constants.len()
    }

    /// Solves the system with the given algorithm configuration.
    pub fn evaluate(&self, algorithm: &GaussJordan) -> Result<Solution> {
        let result = algorithm.solve(&self.matrix, &self.constants)?;
        log::info!(
            "Solved {}x{} system: {} row swaps, residual {:.3e}",
            self.size(),
            self.size(),
            result.metadata.row_swaps,
            result.metadata.residual_norm
        );
        Ok(Solution::new(result.x))
    }
}

impl TryFrom<&SystemForm> for LinearSystem {
    type Error = LinsysError;

    fn try_from(form: &SystemForm) -> Result<Self> {
        form.compile()
    }
}
