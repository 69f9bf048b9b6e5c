//! Reading a `SystemForm` from a CSV grid or a JSON document.

use clap::ValueEnum;
use linsys_rs::{LinsysError, SystemForm};
use std::io::Read;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    /// One equation per line: coefficients then the constant, delimiter separated
    Grid,
    /// A serialized form with `coefficients` and `constants`
    Json,
}

pub fn read_form<R: Read>(
    reader: R,
    format: InputFormat,
    delimiter: u8,
) -> Result<SystemForm, LinsysError> {
    match format {
        InputFormat::Grid => read_grid(reader, delimiter),
        InputFormat::Json => {
            let mut reader = reader;
            let mut json = String::new();
            reader.read_to_string(&mut json)?;
            SystemForm::from_json(&json)
        }
    }
}

/// Empty cells stay empty strings; the model layer reads them as zero.
fn read_grid<R: Read>(reader: R, delimiter: u8) -> Result<SystemForm, LinsysError> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .comment(Some(b'#'))
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result.map_err(|e| LinsysError::Format(format!("Invalid grid: {e}")))?;
        // skip blank lines
        if record.iter().all(str::is_empty) {
            continue;
        }
        rows.push(record.iter().map(str::to_string).collect::<Vec<String>>());
    }
    if rows.is_empty() {
        return Err(LinsysError::Format("Input contains no equations".to_string()));
    }
    log::debug!("Read {} equations from grid input", rows.len());
    SystemForm::from_rows(rows)
}
