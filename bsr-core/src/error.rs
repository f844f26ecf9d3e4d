//! Errors raised while loading the rental tables.
//!
//! Loading is all-or-nothing: the tables are produced upstream and assumed
//! clean, so any row that fails to parse aborts startup rather than being
//! skipped.

use std::fmt;

/// Fatal error raised while reading or parsing one of the input tables.
#[derive(Debug)]
pub enum LoadError {
    /// Reading the input file failed.
    Io(std::io::Error),
    /// The CSV reader could not produce a record.
    Csv(csv::Error),
    /// A record was present but one of its fields did not parse.
    Row { line: u64, message: String },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(e) => write!(f, "failed to read input file: {}", e),
            LoadError::Csv(e) => write!(f, "malformed CSV input: {}", e),
            LoadError::Row { line, message } => {
                write!(f, "bad record on line {}: {}", line, message)
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(e) => Some(e),
            LoadError::Csv(e) => Some(e),
            LoadError::Row { .. } => None,
        }
    }
}

impl From<std::io::Error> for LoadError {
    fn from(e: std::io::Error) -> Self {
        LoadError::Io(e)
    }
}

impl From<csv::Error> for LoadError {
    fn from(e: csv::Error) -> Self {
        LoadError::Csv(e)
    }
}
