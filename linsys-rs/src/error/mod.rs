mod parse_error;

pub use parse_error::{CellLocation, ParseError};
use derive_more::From;

use linsys_core::error::LinsysCoreError;

pub type Result<T> = core::result::Result<T, LinsysError>;

#[derive(Debug, From)]
pub enum LinsysError {
    // -- Externals
    #[from]
    Io(std::io::Error),

    #[from]
    Parse(ParseError),

    #[from]
    LinsysCoreError(LinsysCoreError),

    #[from]
    Json(serde_json::Error),

    Format(String),
}

/// How a consumer should classify a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Parse,
    DimensionMismatch,
    SingularMatrix,
    /// The input document could not be read or decoded.
    Input,
    Internal,
}

impl LinsysError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LinsysError::Parse(_) => ErrorKind::Parse,
            LinsysError::LinsysCoreError(LinsysCoreError::DimensionMismatch(_)) => {
                ErrorKind::DimensionMismatch
            }
            LinsysError::LinsysCoreError(LinsysCoreError::SingularMatrix { .. }) => {
                ErrorKind::SingularMatrix
            }
            LinsysError::LinsysCoreError(LinsysCoreError::Internal(_)) => ErrorKind::Internal,
            LinsysError::LinsysCoreError(LinsysCoreError::InvalidParameter(_))
            | LinsysError::Io(_) | LinsysError::Json(_) | LinsysError::Format(_) => ErrorKind::Input,
        }
    }

    /// Message meant for the person who filled in the form.
    pub fn user_message(&self) -> String {
        match self {
            LinsysError::Parse(err) => format!(
                "Invalid value {:?} in {}. Enter a number or leave the field empty.",
                err.text, err.location
            ),
            LinsysError::LinsysCoreError(LinsysCoreError::DimensionMismatch(msg)) => {
                format!("The system dimensions do not match: {msg}.")
            }
            LinsysError::LinsysCoreError(LinsysCoreError::InvalidParameter(msg)) => {
                format!("Invalid solver setting: {msg}.")
            }
            LinsysError::LinsysCoreError(LinsysCoreError::SingularMatrix { .. }) => {
                "The matrix is singular, the system has no unique solution.".to_string()
            }
            LinsysError::LinsysCoreError(LinsysCoreError::Internal(msg)) => {
                format!("Internal error while solving: {msg}")
            }
            LinsysError::Io(err) => format!("Could not read the input: {err}"),
            LinsysError::Json(err) => format!("Could not decode the input form: {err}"),
            LinsysError::Format(msg) => format!("Malformed input: {msg}"),
        }
    }
}

// region:    --- Error Boilerplate

impl core::fmt::Display for LinsysError {
    fn fmt(&self, fmt: &mut core::fmt::Formatter) -> core::result::Result<(), core::fmt::Error> {
        write!(fmt, "{self:?}")
    }
}

impl std::error::Error for LinsysError {}

// endregion: --- Error Boilerplate
