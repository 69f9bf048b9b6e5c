//! # linsys core
//!
//! Shared data structures, error type and dense CPU operations used by the
//! `linsys` solver crates.

pub mod dense_matrix;
pub mod error;
pub mod ops;
pub mod traits;

pub use dense_matrix::DenseMatrix;
pub use error::LinsysCoreError;
pub use traits::Matrix;
