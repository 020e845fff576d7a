pub mod command;
pub mod menu;
pub mod run;

use crate::domain::Record;
use crate::errors::AppError;
use std::io::{BufRead, Write};

pub use run::{run_app, run_session};

// OUTPUT FUNCTIONS
pub fn prompt(output: &mut impl Write, text: &str) -> Result<(), AppError> {
    write!(output, "{}", text)?;
    output.flush()?;
    Ok(())
}

pub fn display_records(output: &mut impl Write, records: &[Record]) -> Result<(), AppError> {
    for record in records {
        writeln!(output, "{}", record)?;
    }
    Ok(())
}

// INPUT FUNCTIONS

/// Read one line without its line ending. `None` once input is exhausted.
pub fn get_input(input: &mut impl BufRead) -> Result<Option<String>, AppError> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed);
    Ok(Some(line))
}

pub fn ask(
    input: &mut impl BufRead,
    output: &mut impl Write,
    text: &str,
) -> Result<Option<String>, AppError> {
    prompt(output, text)?;
    get_input(input)
}

pub fn get_input_as_usize(raw: &str) -> Result<usize, AppError> {
    Ok(raw.trim().parse::<usize>()?)
}
