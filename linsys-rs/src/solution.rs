use serde::Serialize;
use std::fmt;

use crate::error::Result;

const SHORT_NAMES: [&str; 4] = ["x", "y", "z", "w"];

/// Names of the unknowns: `x, y, z, w` up to four, `x1..xn` beyond that.
pub fn variable_names(n: usize) -> Vec<String> {
    if n <= SHORT_NAMES.len() {
        SHORT_NAMES[..n].iter().map(|s| s.to_string()).collect()
    } else {
        (1..=n).map(|i| format!("x{i}")).collect()
    }
}

/// Values of the unknowns of a solved system, in equation column order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Solution {
    names: Vec<String>,
    values: Vec<f64>,
}

impl Solution {
    pub fn new(values: Vec<f64>) -> Self {
        Self {
            names: variable_names(values.len()),
            values,
        }
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|i| self.values[i])
    }

    /// One `name = value` line per unknown, four decimals.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (name, value)) in self.names().iter().zip(self.values()).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{name} = {value:.4}")?;
        }
        Ok(())
    }
}

/// Renders either the solution or the error message, never both.
pub fn render_outcome(outcome: &Result<Solution>) -> String {
    match outcome {
        Ok(solution) => solution.render(),
        Err(err) => err.user_message(),
    }
}
