use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LinsysCoreError {
    #[error("Dimension mismatch: {0}")]
    DimensionMismatch(String),

    #[error("Matrix is singular: pivot {pivot} has magnitude {magnitude:e}")]
    SingularMatrix {
        pivot: usize,     // 0-based pivot (column) index where elimination stopped
        magnitude: f64,
    },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = core::result::Result<T, LinsysCoreError>;
