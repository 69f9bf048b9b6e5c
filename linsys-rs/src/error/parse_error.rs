use std::fmt;
use thiserror::Error;

/// Where a form cell sits. Indices are 0-based, displayed 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellLocation {
    Coefficient { row: usize, col: usize },
    Constant { row: usize },
}

impl fmt::Display for CellLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellLocation::Coefficient { row, col } => {
                write!(f, "row {}, column {}", row + 1, col + 1)
            }
            CellLocation::Constant { row } => write!(f, "the constant of row {}", row + 1),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
#[error("Invalid value {text:?} in {location}")]
pub struct ParseError {
    pub location: CellLocation,
    pub text: String,
}

impl ParseError {
    pub fn new(location: CellLocation, text: impl Into<String>) -> Self {
        Self {
            location,
            text: text.into(),
        }
    }
}
