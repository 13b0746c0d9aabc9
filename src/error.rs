use std::io;
use std::num::ParseIntError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("read input: {0}")]
    Io(#[from] io::Error),

    #[error("line {line_no}: unexpected line format: {line}")]
    BadLine { line_no: usize, line: String },

    #[error("line {line_no}: bad coordinate {text:?}: {source}")]
    BadNumber {
        line_no: usize,
        text: String,
        source: ParseIntError,
    },

    #[error("line {line_no}: sensor radius {distance} out of range")]
    RadiusOverflow { line_no: usize, distance: u64 },

    #[error("no uncovered cell in bound [{min}, {max}]")]
    NoGap { min: i32, max: i32 },
}

impl Error {
    /// Whether the failure came from the input rather than from the search.
    pub fn is_input_error(&self) -> bool {
        !matches!(self, Error::NoGap { .. })
    }
}
