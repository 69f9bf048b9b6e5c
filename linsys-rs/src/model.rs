use serde::{Deserialize, Serialize};

use crate::{
    LinearSystem,
    error::{CellLocation, LinsysError, ParseError, Result},
};
use linsys_core::{DenseMatrix, LinsysCoreError, Matrix};

/// Problem size of the reference form: four equations in x, y, z, w.
pub const DEFAULT_SIZE: usize = 4;

/// Text cells of a square system as typed by a user.
///
/// `coefficients[i][j]` multiplies unknown j in equation i and `constants[i]`
/// is the right-hand side of equation i.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SystemForm {
    pub coefficients: Vec<Vec<String>>,
    pub constants: Vec<String>,
}

impl SystemForm {
    /// An n x n form with every cell empty.
    pub fn blank(size: usize) -> Self {
        Self {
            coefficients: vec![vec![String::new(); size]; size],
            constants: vec![String::new(); size],
        }
    }

    /// Builds a form from equation rows, each holding the coefficients followed
    /// by the constant.
    pub fn from_rows<S: Into<String>>(rows: Vec<Vec<S>>) -> Result<Self> {
        let mut coefficients = Vec::with_capacity(rows.len());
        let mut constants = Vec::with_capacity(rows.len());
        for (i, row) in rows.into_iter().enumerate() {
            let mut cells: Vec<String> = row.into_iter().map(Into::into).collect();
            let Some(constant) = cells.pop() else {
                return Err(LinsysError::Format(format!("Equation {} is empty", i + 1)));
            };
            coefficients.push(cells);
            constants.push(constant);
        }
        Ok(Self {
            coefficients,
            constants,
        })
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Number of equations.
    pub fn size(&self) -> usize {
        self.coefficients.len()
    }

    pub fn set_coefficient(&mut self, row: usize, col: usize, text: impl Into<String>) -> Result<()> {
        let cell = self
            .coefficients
            .get_mut(row)
            .and_then(|r| r.get_mut(col))
            .ok_or_else(|| {
                LinsysError::Format(format!("No coefficient cell at row {}, column {}", row + 1, col + 1))
            })?;
        *cell = text.into();
        Ok(())
    }

    pub fn set_constant(&mut self, row: usize, text: impl Into<String>) -> Result<()> {
        let cell = self
            .constants
            .get_mut(row)
            .ok_or_else(|| LinsysError::Format(format!("No constant cell at row {}", row + 1)))?;
        *cell = text.into();
        Ok(())
    }

    /// Empties every cell, keeping the shape.
    pub fn clear(&mut self) {
        self.coefficients
            .iter_mut()
            .flatten()
            .chain(self.constants.iter_mut())
            .for_each(String::clear);
    }

    /// Parses every cell and builds the numeric system.
    ///
    /// Cells are read equation by equation, coefficients before the constant.
    /// The first invalid cell aborts the whole form.
    pub fn compile(&self) -> Result<LinearSystem> {
        if self.constants.len() != self.coefficients.len() {
            return Err(LinsysCoreError::DimensionMismatch(format!(
                "Form has {} coefficient rows but {} constants",
                self.coefficients.len(),
                self.constants.len()
            ))
            .into());
        }

        let mut rows = Vec::with_capacity(self.size());
        let mut constants = Vec::with_capacity(self.size());
        for (row, (cells, constant)) in self.coefficients.iter().zip(&self.constants).enumerate() {
            let parsed = cells
                .iter()
                .enumerate()
                .map(|(col, text)| parse_cell(text, CellLocation::Coefficient { row, col }))
                .collect::<core::result::Result<Vec<f64>, ParseError>>()?;
            rows.push(parsed);
            constants.push(parse_cell(constant, CellLocation::Constant { row })?);
        }

        let matrix = DenseMatrix::from_rows(&rows)?;
        log::debug!("Compiled {}x{} system from form", matrix.rows(), matrix.cols());
        LinearSystem::new(matrix, constants)
    }
}

/// Reads one form cell: blank means 0.0, anything else must be a finite number.
pub fn parse_cell(text: &str, location: CellLocation) -> core::result::Result<f64, ParseError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    let parsed = strip_digit_separators(trimmed).and_then(|digits| digits.parse::<f64>().ok());
    match parsed {
        Some(value) if value.is_finite() => Ok(value),
        _ => Err(ParseError::new(location, text)),
    }
}

/// Drops `_` separators such as `1_000.5`; `None` when an underscore is not
/// placed between two digits.
fn strip_digit_separators(text: &str) -> Option<String> {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    for (i, c) in text.char_indices() {
        if c != '_' {
            out.push(c);
            continue;
        }
        let before = i.checked_sub(1).and_then(|j| bytes.get(j));
        let after = bytes.get(i + 1);
        match (before, after) {
            (Some(b), Some(a)) if b.is_ascii_digit() && a.is_ascii_digit() => {}
            _ => return None,
        }
    }
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_cell_is_zero() {
        let location = CellLocation::Coefficient { row: 0, col: 0 };
        assert_eq!(parse_cell("", location), Ok(0.0));
        assert_eq!(parse_cell("   ", location), Ok(0.0));
    }

    #[test]
    fn test_parse_cell_accepts_numbers() {
        let location = CellLocation::Constant { row: 0 };
        assert_eq!(parse_cell(" 2.5 ", location), Ok(2.5));
        assert_eq!(parse_cell("-3", location), Ok(-3.0));
        assert_eq!(parse_cell("1e3", location), Ok(1000.0));
    }

    #[test]
    fn test_parse_cell_digit_separators() {
        let location = CellLocation::Constant { row: 1 };
        assert_eq!(parse_cell("1_000", location), Ok(1000.0));
        assert_eq!(parse_cell("-2_500.2_5", location), Ok(-2500.25));
        for bad in ["_1", "1_", "1__0", "1_.5", "1e_3"] {
            assert_eq!(
                parse_cell(bad, location),
                Err(ParseError::new(location, bad)),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_cell_rejects_text_and_non_finite() {
        let location = CellLocation::Coefficient { row: 2, col: 1 };
        for bad in ["abc", "1,5", "2x", "inf", "NaN"] {
            assert_eq!(
                parse_cell(bad, location),
                Err(ParseError::new(location, bad)),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_blank_form_compiles_to_zero_system() {
        let system = SystemForm::blank(DEFAULT_SIZE).compile().unwrap();
        assert_eq!(system.matrix().dims(), (4, 4));
        assert!(system.matrix().data().iter().all(|&v| v == 0.0));
        assert_eq!(system.constants(), &[0.0; 4]);
    }

    #[test]
    fn test_compile_reports_first_bad_cell() {
        let mut form = SystemForm::blank(2);
        form.set_constant(0, "oops").unwrap();
        form.set_coefficient(1, 0, "bad").unwrap();
        match form.compile() {
            Err(LinsysError::Parse(err)) => {
                assert_eq!(err.location, CellLocation::Constant { row: 0 });
                assert_eq!(err.text, "oops");
            }
            other => panic!("Expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_from_rows_splits_constants() {
        let form = SystemForm::from_rows(vec![vec!["1", "2", "3"], vec!["4", "", "6"]]).unwrap();
        assert_eq!(form.coefficients, vec![vec!["1", "2"], vec!["4", ""]]);
        assert_eq!(form.constants, vec!["3", "6"]);
        assert!(SystemForm::from_rows(vec![Vec::<String>::new()]).is_err());
    }

    #[test]
    fn test_clear_keeps_shape() {
        let mut form = SystemForm::from_rows(vec![vec!["1", "2", "3"], vec!["4", "5", "6"]]).unwrap();
        form.clear();
        assert_eq!(form, SystemForm::blank(2));
    }

    #[test]
    fn test_set_cell_out_of_range() {
        let mut form = SystemForm::blank(2);
        assert!(form.set_coefficient(2, 0, "1").is_err());
        assert!(form.set_constant(5, "1").is_err());
    }

    #[test]
    fn test_json_round_trip() {
        let form = SystemForm::from_rows(vec![vec!["1", "", "3"], vec!["0", "1", "2"]]).unwrap();
        let json = form.to_json().unwrap();
        assert_eq!(SystemForm::from_json(&json).unwrap(), form);
    }
}
