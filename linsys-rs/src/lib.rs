//! Form-level front of the `linsys` solver: text cells in, rendered solution
//! or classified error out.

mod linear_system;
mod solution;

pub mod error;
pub mod model;
pub use error::{ErrorKind, LinsysError};
pub use linear_system::LinearSystem;
pub use model::{DEFAULT_SIZE, SystemForm, parse_cell};
pub use solution::{Solution, render_outcome, variable_names};

pub use linsys_lsolver::algorithms::{DEFAULT_TOLERANCE, GaussJordan};

/// Parses the form and solves it in one step.
pub fn solve_form(form: &SystemForm, algorithm: &GaussJordan) -> error::Result<Solution> {
    form.compile()?.evaluate(algorithm)
}
